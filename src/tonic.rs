use serde::{Deserialize, Serialize};

use crate::degree::normalize;
use crate::error::{Result, TuningError};
use crate::utils::{octave_multiplier, ratio_at, split_index};

pub const DEFAULT_TONIC_HZ: f64 = 440.0;

/// How the frequency of semitone 0 is chosen.
///
/// In config files a bare number is a [`TonicDirective::Frequency`] and a
/// table `{ hz = 440.0, index = 9 }` is a [`TonicDirective::Pinned`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TonicDirective {
    Frequency(f64),
    /// Semitone `index` sounds at `hz`; semitone 0 is solved for.
    Pinned { hz: f64, index: i32 },
}

impl From<f64> for TonicDirective {
    fn from(hz: f64) -> Self {
        TonicDirective::Frequency(hz)
    }
}

impl From<(f64, i32)> for TonicDirective {
    fn from((hz, index): (f64, i32)) -> Self {
        TonicDirective::Pinned { hz, index }
    }
}

impl TonicDirective {
    /// Pins in `1..=len` divide by `ratios[index - 1]`. Any other index goes
    /// through the octave/degree split of [`crate::Tuning::frequency`], so
    /// index 0 pins the tonic itself. `ratios` must not be empty.
    pub(crate) fn resolve(&self, ratios: &[f64]) -> f64 {
        match *self {
            TonicDirective::Frequency(hz) => hz,
            TonicDirective::Pinned { hz, index } => {
                if index >= 1 && index as usize <= ratios.len() {
                    return hz / ratios[index as usize - 1];
                }
                let (octave, degree) = split_index(index, ratios.len());
                hz / (ratio_at(ratios, degree) * octave_multiplier(octave))
            }
        }
    }
}

pub fn resolve_tonic<S: AsRef<str>>(
    directive: Option<TonicDirective>,
    scale: &[S],
    default_hz: f64,
) -> Result<f64> {
    match directive {
        None => Ok(default_hz),
        Some(TonicDirective::Frequency(hz)) => Ok(hz),
        Some(pinned) => {
            let ratios = normalize(scale)?;
            if ratios.is_empty() {
                return Err(TuningError::EmptyScale);
            }
            Ok(pinned.resolve(&ratios))
        }
    }
}
