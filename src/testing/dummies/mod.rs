mod datasets;
mod headers;

pub use datasets::random_two_numeric_dataset;
pub use headers::{
    class_only_header, class_only_instance, mixed_header, mixed_instance, numeric_binary_header,
    numeric_instance, two_numeric_header, two_numeric_instance,
};
