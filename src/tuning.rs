use crate::config::TuningConfig;
use crate::degree::normalize;
use crate::error::{Result, TuningError};
use crate::tonic::{DEFAULT_TONIC_HZ, TonicDirective};
use crate::utils::{octave_multiplier, ratio_at, split_index};

/// A scale paired with a tonic frequency.
///
/// Ratios and the tonic are computed once in the constructor and never change,
/// so a `Tuning` can be shared freely between threads.
///
/// ```
/// use scl_tuning::Tuning;
///
/// let tuning = Tuning::new(&["5/4", "3/2", "2/1"], None).unwrap();
/// assert_eq!(tuning.frequency(0, 0), 440.0);
/// assert_eq!(tuning.frequency(2, 0), 660.0);
/// assert_eq!(tuning.frequency(3, 0), 880.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    scale: Vec<String>,
    ratios: Vec<f64>,
    tonic_hz: f64,
}

impl Tuning {
    pub fn new<S: AsRef<str>>(scale: &[S], tonic: Option<TonicDirective>) -> Result<Self> {
        Self::with_default_tonic(scale, tonic, DEFAULT_TONIC_HZ)
    }

    pub fn with_default_tonic<S: AsRef<str>>(
        scale: &[S],
        tonic: Option<TonicDirective>,
        default_hz: f64,
    ) -> Result<Self> {
        if scale.is_empty() {
            return Err(TuningError::EmptyScale);
        }
        let ratios = normalize(scale)?;
        let tonic_hz = tonic.map_or(default_hz, |directive| directive.resolve(&ratios));
        log::debug!(
            "tuning: {} degrees, tonic {:.3} Hz ({:?})",
            ratios.len(),
            tonic_hz,
            tonic
        );
        Ok(Self {
            scale: scale.iter().map(|s| s.as_ref().to_string()).collect(),
            ratios,
            tonic_hz,
        })
    }

    pub fn from_config(config: &TuningConfig) -> Result<Self> {
        Self::with_default_tonic(&config.scale, config.tonic, config.default_tonic_hz)
    }

    pub fn scale(&self) -> &[String] {
        &self.scale
    }

    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    pub fn tonic_hz(&self) -> f64 {
        self.tonic_hz
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Octave and degree a semitone index falls on. Negative indices floor
    /// into lower octaves, so the degree is always in `0..len`.
    pub fn degree_of(&self, semitone: i32) -> (i32, usize) {
        split_index(semitone, self.ratios.len())
    }

    /// Degree 0 of every octave is the unison, so the last scale entry is only
    /// reached at index `len - 1` and index `len` is the tonic one octave up.
    pub fn frequency(&self, semitone: i32, octave_offset: i32) -> f64 {
        let (octave, degree) = self.degree_of(semitone);
        let octave = octave.saturating_add(octave_offset);
        ratio_at(&self.ratios, degree) * self.tonic_hz * octave_multiplier(octave)
    }

    pub fn frequencies(&self, octave_offset: i32) -> Vec<f64> {
        (0..self.ratios.len() as i32)
            .map(|i| self.frequency(i, octave_offset))
            .collect()
    }
}
