use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute};

pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        if index < self.attributes.len() {
            Some(self.attributes[index].as_ref())
        } else {
            None
        }
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.attributes
            .get(self.class_index)?
            .as_any()
            .downcast_ref::<NominalAttribute>()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .map_or(0, |nominal| nominal.values.len())
    }

    pub fn class_name(&self, index: usize) -> Option<&str> {
        self.class_attribute()?.value_name(index)
    }

    pub fn class_names(&self) -> Vec<String> {
        self.class_attribute()
            .map_or_else(Vec::new, |nominal| nominal.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{AttributeRef, NumericAttribute};
    use std::sync::Arc;

    fn header() -> InstanceHeader {
        let attributes: Vec<AttributeRef> = vec![
            Arc::new(NumericAttribute::new("x".into())),
            Arc::new(NominalAttribute::new(
                "class".into(),
                vec!["yes".into(), "no".into()],
            )),
        ];
        InstanceHeader::new("relation".into(), attributes, 1)
    }

    #[test]
    fn class_accessors() {
        let h = header();
        assert_eq!(h.number_of_attributes(), 2);
        assert_eq!(h.number_of_classes(), 2);
        assert_eq!(h.class_name(1), Some("no"));
        assert_eq!(h.class_names(), vec!["yes".to_string(), "no".to_string()]);
        assert_eq!(h.index_of_attribute("x"), Some(0));
        assert_eq!(h.index_of_attribute("missing"), None);
    }
}
