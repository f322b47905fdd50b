/// Round `value` to `digits` decimal places.
///
/// The rounding goes through the decimal representation so that it is exact in base 10
/// (`0.125` rounded to two places is `0.13` as written, not whatever `0.125 * 100` happens to
/// be in binary). Values that are already integers, and non-finite values, come back unchanged.
pub(crate) fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value;
    }

    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// append a rounded float to `out` in its shortest round-trippable form
pub(crate) fn push_float(out: &mut String, value: f64, precision: usize) {
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format(round_to(value, precision)));
}

/// append a space separated tuple of rounded floats followed by a newline
pub(crate) fn push_tuple(out: &mut String, values: &[f64], precision: usize) {
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        push_float(out, *value, precision);
    }
    out.push('\n');
}
