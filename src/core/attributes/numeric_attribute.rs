use crate::core::attributes::Attribute;
use std::any::Any;

pub struct NumericAttribute {
    pub name: String,
}

impl NumericAttribute {
    pub fn new(name: String) -> NumericAttribute {
        NumericAttribute { name }
    }
}

impl Attribute for NumericAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_nominal(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
