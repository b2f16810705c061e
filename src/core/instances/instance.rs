use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;

pub trait Instance {
    fn weight(&self) -> f64;

    fn value_at_index(&self, index: usize) -> Option<f64>;

    fn is_missing_at_index(&self, index: usize) -> bool;

    fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute>;

    fn class_index(&self) -> usize;

    fn class_value(&self) -> Option<f64>;

    fn is_class_missing(&self) -> bool;

    fn number_of_classes(&self) -> usize;

    fn header(&self) -> &InstanceHeader;
}
