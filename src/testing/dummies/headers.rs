use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

fn binary_class() -> AttributeRef {
    Arc::new(NominalAttribute::new(
        "class".into(),
        vec!["a".into(), "b".into()],
    ))
}

/// `x` numeric plus a binary class.
pub fn numeric_binary_header() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NumericAttribute::new("x".into())),
        binary_class(),
    ];
    Arc::new(InstanceHeader::new("numeric-binary".into(), attributes, 1))
}

pub fn numeric_instance(header: &Arc<InstanceHeader>, x: f64, class: usize) -> DenseInstance {
    DenseInstance::new(Arc::clone(header), vec![x, class as f64], 1.0)
}

/// `x` and `z` numeric plus a binary class.
pub fn two_numeric_header() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NumericAttribute::new("x".into())),
        Arc::new(NumericAttribute::new("z".into())),
        binary_class(),
    ];
    Arc::new(InstanceHeader::new("two-numeric".into(), attributes, 2))
}

pub fn two_numeric_instance(
    header: &Arc<InstanceHeader>,
    x: f64,
    z: f64,
    class: usize,
) -> DenseInstance {
    DenseInstance::new(Arc::clone(header), vec![x, z, class as f64], 1.0)
}

/// `x` numeric, `color` nominal over three values, plus a binary class.
pub fn mixed_header() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NumericAttribute::new("x".into())),
        Arc::new(NominalAttribute::new(
            "color".into(),
            vec!["red".into(), "green".into(), "blue".into()],
        )),
        binary_class(),
    ];
    Arc::new(InstanceHeader::new("mixed".into(), attributes, 2))
}

pub fn mixed_instance(
    header: &Arc<InstanceHeader>,
    x: f64,
    color: usize,
    class: usize,
) -> DenseInstance {
    DenseInstance::new(
        Arc::clone(header),
        vec![x, color as f64, class as f64],
        1.0,
    )
}

/// A schema with nothing but the class attribute.
pub fn class_only_header() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![binary_class()];
    Arc::new(InstanceHeader::new("class-only".into(), attributes, 0))
}

pub fn class_only_instance(header: &Arc<InstanceHeader>, class: usize) -> DenseInstance {
    DenseInstance::new(Arc::clone(header), vec![class as f64], 1.0)
}
