use crate::core::attributes::Attribute;
use std::any::Any;
use std::collections::HashMap;

pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn with_values(
        name: String,
        values: Vec<String>,
        label_to_index: HashMap<String, usize>,
    ) -> NominalAttribute {
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn value_name(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        self.label_to_index.get(v).copied()
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_nominal(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_label_index() {
        let attr = NominalAttribute::new("color".into(), vec!["red".into(), "blue".into()]);
        assert_eq!(attr.num_values(), 2);
        assert_eq!(attr.index_of_value("blue"), Some(1));
        assert_eq!(attr.index_of_value("green"), None);
        assert_eq!(attr.value_name(0), Some("red"));
        assert_eq!(attr.value_name(2), None);
    }
}
