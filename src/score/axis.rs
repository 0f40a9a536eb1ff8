use crate::types::crop::Band;
use crate::types::scoring::Score;

/// How far outside the band a value may drift before its axis score reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    HalfRange,
    FullRange,
}

impl Normalizer {
    fn span(self, band: &Band) -> f64 {
        match self {
            Normalizer::HalfRange => band.width() / 2.0,
            Normalizer::FullRange => band.width(),
        }
    }
}

pub fn axis_score(value: f64, band: &Band, normalizer: Normalizer) -> Score {
    if band.contains(value) {
        return 1.0;
    }
    let deviation = if value < band.min {
        band.min - value
    } else {
        value - band.max
    };
    // NaN and zero-width bands both land on 0 here: f64::max drops NaN.
    (1.0 - deviation / normalizer.span(band)).max(0.0).min(1.0)
}

pub fn temperature_score(value: f64, band: &Band) -> Score {
    axis_score(value, band, Normalizer::HalfRange)
}

pub fn rainfall_score(value: f64, band: &Band) -> Score {
    axis_score(value, band, Normalizer::FullRange)
}

pub fn humidity_score(value: f64, band: &Band) -> Score {
    axis_score(value, band, Normalizer::HalfRange)
}
