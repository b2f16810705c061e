use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

#[derive(Clone)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<f64>,
    pub weight: f64,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<f64>, weight: f64) -> DenseInstance {
        DenseInstance {
            header,
            values,
            weight,
        }
    }
}

impl Instance for DenseInstance {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        if index < self.values.len() {
            Some(self.values[index])
        } else {
            None
        }
    }

    fn is_missing_at_index(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|v| v.is_nan())
    }

    fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        if index < self.header.attributes.len() {
            Some(&*self.header.attributes[index])
        } else {
            None
        }
    }

    fn class_index(&self) -> usize {
        self.header.class_index()
    }

    fn class_value(&self) -> Option<f64> {
        if self.header.class_index() < self.values.len() {
            Some(self.values[self.header.class_index()])
        } else {
            None
        }
    }

    fn is_class_missing(&self) -> bool {
        self.class_value().is_none_or(|v| v.is_nan())
    }

    fn number_of_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}
