use std::any::Any;
use std::sync::Arc;

pub trait Attribute: Any + Send + Sync {
    fn name(&self) -> &str;

    fn is_nominal(&self) -> bool;

    fn is_numeric(&self) -> bool {
        !self.is_nominal()
    }

    fn as_any(&self) -> &dyn Any;
}

pub type AttributeRef = Arc<dyn Attribute>;
