pub(crate) fn cents_to_ratio(cents: f64, span: f64) -> f64 {
    2.0_f64.powf(cents / span)
}

pub(crate) fn octave_multiplier(octave: i32) -> f64 {
    2.0_f64.powi(octave)
}

/// Splits a semitone index into `(octave, degree)` using floor division, so
/// negative indices land in lower octaves with a non-negative degree.
pub(crate) fn split_index(index: i32, len: usize) -> (i32, usize) {
    let len = len as i32;
    (index.div_euclid(len), index.rem_euclid(len) as usize)
}

pub(crate) fn ratio_at(ratios: &[f64], degree: usize) -> f64 {
    if degree > 0 { ratios[degree - 1] } else { 1.0 }
}
