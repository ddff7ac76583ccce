//! Small formatting helpers for CSS-equivalent values.

/// Format a pixel value, dropping the fraction when it is whole.
pub(crate) fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// Format a 0..=1 ratio as a CSS percentage.
pub(crate) fn percent(ratio: f64) -> String {
    let scaled = ratio * 100.0;
    if scaled.fract() == 0.0 {
        format!("{}%", scaled as i64)
    } else {
        format!("{scaled:.2}%")
    }
}
