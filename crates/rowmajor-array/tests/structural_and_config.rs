//! Integration tests for shape-only comparisons and traversal configuration.

use std::any::Any;
use std::cmp::Ordering;

use rowmajor_array::{Array2D, ArrayError, Axis, ErrorKind, Shape, TraversalConfig};

// ---------------------------------------------------------------------------
// Structural equality / ordering
// ---------------------------------------------------------------------------

#[test]
fn structural_eq_ignores_content() {
    // Same shape, different elements: structurally equal, not `==`.
    let a = Array2D::from([[1, 2], [3, 4]]);
    let b = Array2D::from([[9, 9], [9, 9]]);
    assert!(a.structural_eq(&b));
    assert_ne!(a, b);

    let c = Array2D::from([[1, 2, 3, 4]]);
    assert!(!a.structural_eq(&c));
}

#[test]
fn structural_eq_across_element_types() {
    let numbers = Array2D::from([[1u8, 2], [3, 4]]);
    let labels = numbers.mapv(|v| v.to_string());
    assert!(numbers.structural_eq(&labels));
}

#[test]
fn structural_eq_by_custom_comparer() {
    let a: Array2D<i32> = Array2D::new(2, 3).unwrap();
    let b: Array2D<i32> = Array2D::new(4, 6).unwrap();
    assert!(!a.structural_eq(&b));
    assert!(a.structural_eq_by(&b, |x, y| x * 2 == y));
}

#[test]
fn cmp_shape_is_lexicographic() {
    let small: Array2D<i32> = Array2D::new(2, 9).unwrap();
    let tall: Array2D<i32> = Array2D::new(3, 1).unwrap();
    let wide: Array2D<i32> = Array2D::new(3, 4).unwrap();
    assert_eq!(small.cmp_shape(&tall), Ordering::Less);
    assert_eq!(wide.cmp_shape(&tall), Ordering::Greater);
    assert_eq!(tall.cmp_shape(&tall), Ordering::Equal);
    assert_eq!(
        wide.structural_cmp_by(&tall, |x, y| y.cmp(x)),
        Ordering::Less
    );
}

#[test]
fn structural_cmp_against_untyped_operands() {
    let array: Array2D<i32> = Array2D::new(2, 2).unwrap();
    let bigger: Array2D<i32> = Array2D::new(2, 3).unwrap();

    assert_eq!(array.structural_cmp(None).unwrap(), Ordering::Greater);
    assert_eq!(
        array.structural_cmp(Some(&bigger as &dyn Any)).unwrap(),
        Ordering::Less
    );

    let not_an_array = vec![1, 2, 3];
    let err = array
        .structural_cmp(Some(&not_an_array as &dyn Any))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let other_elements: Array2D<u8> = Array2D::new(2, 2).unwrap();
    let err = array
        .structural_cmp(Some(&other_elements as &dyn Any))
        .unwrap_err();
    assert!(matches!(err, ArrayError::TypeMismatch { .. }));
}

// ---------------------------------------------------------------------------
// Shape / Axis / TraversalConfig serialization
// ---------------------------------------------------------------------------

#[test]
fn shape_serializes_as_pair() {
    let shape = Shape::new(3, 2).unwrap();
    let json = serde_json::to_string(&shape).unwrap();
    assert_eq!(json, "[3,2]");
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn shape_rejects_negative_json() {
    let err = serde_json::from_str::<Shape>("[-1,2]").unwrap_err();
    assert!(err.to_string().contains("dim0"));
    let err = serde_json::from_str::<Shape>("[1,-2]").unwrap_err();
    assert!(err.to_string().contains("dim1"));
}

#[test]
fn traversal_config_defaults() {
    let cfg = TraversalConfig::default();
    assert_eq!(cfg.axis, Axis::Row);
    assert!(!cfg.reverse_items);
    assert!(!cfg.reverse_lines);

    let parsed: TraversalConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, cfg);
}

#[test]
fn traversal_config_from_json() {
    let cfg: TraversalConfig =
        serde_json::from_str(r#"{"axis": "column", "reverse_lines": true}"#).unwrap();
    assert_eq!(cfg.axis, Axis::Column);
    assert!(!cfg.reverse_items);
    assert!(cfg.reverse_lines);
}

#[test]
fn traversal_config_round_trips_json() {
    let cfg = TraversalConfig::new(Axis::Column).with_reverse_items(true);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("reverse_items"));
    let cfg2: TraversalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn traversal_config_rejects_unknown_axis() {
    assert!(serde_json::from_str::<TraversalConfig>(r#"{"axis": "diagonal"}"#).is_err());
}
