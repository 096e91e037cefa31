//! Qualitative efficiency bands.
//!
//! The cut points are a display policy, not a physical law. The defaults are
//! exposed as named constants and can be overridden through [`BandThresholds`].

use std::fmt;

use uom::si::{f64::Ratio, ratio::ratio};

/// Default lower bound (inclusive) of [`EfficiencyBand::Excellent`].
pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 0.6;

/// Default lower bound (inclusive) of [`EfficiencyBand::Good`].
pub const DEFAULT_GOOD_THRESHOLD: f64 = 0.4;

/// Default lower bound (inclusive) of [`EfficiencyBand::Moderate`].
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 0.2;

/// Qualitative rating of a Carnot efficiency.
///
/// Variants are ordered from worst to best, so bands compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EfficiencyBand {
    Low,
    Moderate,
    Good,
    Excellent,
}

impl EfficiencyBand {
    /// Returns a human-readable label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for EfficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds used to assign an [`EfficiencyBand`].
///
/// Each bound is inclusive, so an efficiency sitting exactly on a threshold
/// lands in the higher band. Thresholds are checked from `excellent` down,
/// and anything below `moderate` is [`EfficiencyBand::Low`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    pub excellent: Ratio,
    pub good: Ratio,
    pub moderate: Ratio,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent: Ratio::new::<ratio>(DEFAULT_EXCELLENT_THRESHOLD),
            good: Ratio::new::<ratio>(DEFAULT_GOOD_THRESHOLD),
            moderate: Ratio::new::<ratio>(DEFAULT_MODERATE_THRESHOLD),
        }
    }
}

impl BandThresholds {
    /// Assigns a band to an efficiency.
    #[must_use]
    pub fn classify(&self, efficiency: Ratio) -> EfficiencyBand {
        if efficiency >= self.excellent {
            EfficiencyBand::Excellent
        } else if efficiency >= self.good {
            EfficiencyBand::Good
        } else if efficiency >= self.moderate {
            EfficiencyBand::Moderate
        } else {
            EfficiencyBand::Low
        }
    }
}
