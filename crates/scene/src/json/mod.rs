//! JSON adapters for the two host dialects.
//!
//! The host plugin bridge serializes native nodes into JSON documents; each
//! adapter maps one dialect's field names onto [`crate::NodeData`]. Missing or
//! malformed fields fall back to defaults, never to errors.

pub mod figma;
pub mod mastergo;

use crate::{Affine, Rect};
use serde_json::Value;

/// Read a string field, treating anything non-string as absent.
pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Read a numeric field, treating anything non-numeric as absent.
pub(crate) fn num_field(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

/// Read a boolean field with an explicit default for absence.
pub(crate) fn bool_field(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Read an `{x, y, width, height}` object as a rectangle.
pub(crate) fn rect_field(value: &Value, key: &str) -> Option<Rect> {
    let rect = value.get(key)?;
    Some(Rect {
        x: num_field(rect, "x")?,
        y: num_field(rect, "y")?,
        width: num_field(rect, "width")?,
        height: num_field(rect, "height")?,
    })
}

/// Read a row-major `[[a, c, e], [b, d, f]]` affine transform.
pub(crate) fn affine_field(value: &Value, key: &str) -> Option<Affine> {
    let rows = value.get(key)?.as_array()?;
    let first = rows.first()?.as_array()?;
    let second = rows.get(1)?.as_array()?;
    Some(Affine {
        a: first.first()?.as_f64()?,
        c: first.get(1)?.as_f64()?,
        e: first.get(2)?.as_f64()?,
        b: second.first()?.as_f64()?,
        d: second.get(1)?.as_f64()?,
        f: second.get(2)?.as_f64()?,
    })
}

/// Whether a `fills` array contains at least one visible paint.
pub(crate) fn has_visible_fills(value: &Value) -> bool {
    value
        .get("fills")
        .and_then(Value::as_array)
        .is_some_and(|fills| {
            fills
                .iter()
                .any(|fill| fill.get("visible").and_then(Value::as_bool) != Some(false))
        })
}
