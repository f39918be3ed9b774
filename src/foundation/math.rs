/// Scale a pixel length, rounding to nearest and never collapsing below one pixel.
pub(crate) fn scale_len(len: u32, scale: f64) -> u32 {
    let v = (f64::from(len) * scale).round();
    if v < 1.0 { 1 } else { v as u32 }
}

/// Offset that centers `inner` within `outer`; negative when `inner` overflows.
pub(crate) fn centered_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

/// Map a normalized offset in `[0, max_norm]` onto `[0, range]`.
pub(crate) fn denormalize(offset: u16, max_norm: u16, range: u32) -> u32 {
    if range == 0 || max_norm == 0 {
        return 0;
    }
    let t = f64::from(offset.min(max_norm)) / f64::from(max_norm);
    ((t * f64::from(range)).round() as u32).min(range)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
