//! Finite-coercion at the deserialization boundary.
//!
//! Scene and config files are hand-edited JSON; values that overflow f32
//! must land as zero, not infinity, per the component invariant.

use scene_math_core::Vec3;

#[test]
fn test_deserialize_plain_components() {
    let v: Vec3 = serde_json::from_str(r#"{"x": 1.0, "y": 2.5, "z": -3.0}"#).unwrap();
    assert_eq!(v, Vec3::new(1.0, 2.5, -3.0));
}

#[test]
fn test_deserialize_coerces_overflowing_values() {
    // 1e300 is a valid JSON double but overflows f32 to infinity
    let v: Vec3 = serde_json::from_str(r#"{"x": 1e300, "y": 5.0, "z": -1e300}"#).unwrap();
    assert_eq!(v, Vec3::new(0.0, 5.0, 0.0));
}

#[test]
fn test_serializes_as_struct_form() {
    let value = serde_json::to_value(Vec3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(value, serde_json::json!({"x": 1.0, "y": 2.0, "z": 3.0}));
}
