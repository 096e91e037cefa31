//! Illustrative P-V geometry of a Carnot cycle.
//!
//! The cycle is traced by a fixed mass of ideal gas between two volume
//! bounds. It exists for plotting: the loop always fills the requested
//! bounds, so when the bounds are too narrow for the configured heat
//! capacity ratio the adiabats are steepened instead of overflowing them.

use tracing::{debug, trace};
use uom::si::{
    f64::{Energy, Mass, Pressure, ThermodynamicTemperature, Volume},
    mass::kilogram,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::ideal_gas_eos,
    units::SpecificGasConstant,
};

use super::{CarnotError, ReservoirPair};

/// Default number of samples along each leg, endpoints included.
pub const DEFAULT_POINTS_PER_LEG: usize = 40;

/// Default ratio of specific heats `γ = cp / cv` (diatomic gas).
pub const DEFAULT_HEAT_CAPACITY_RATIO: f64 = 1.4;

/// Default specific gas constant in J/kg·K (dry air).
pub const DEFAULT_GAS_CONSTANT: f64 = 287.053;

/// Default working gas mass in kg.
pub const DEFAULT_GAS_MASS: f64 = 1.0;

/// Plot geometry settings for [`build_pv_cycle_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvCycleConfig {
    /// Samples per leg, endpoints included. Values below 2 are treated as 2.
    pub points_per_leg: usize,

    /// Ratio of specific heats. Values at or below 1 give the steepest
    /// adiabats the bounds allow.
    pub heat_capacity_ratio: f64,

    /// Specific gas constant of the working gas.
    pub gas_constant: SpecificGasConstant,

    /// Mass of working gas.
    pub mass: Mass,
}

impl Default for PvCycleConfig {
    fn default() -> Self {
        Self {
            points_per_leg: DEFAULT_POINTS_PER_LEG,
            heat_capacity_ratio: DEFAULT_HEAT_CAPACITY_RATIO,
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
                DEFAULT_GAS_CONSTANT,
            ),
            mass: Mass::new::<kilogram>(DEFAULT_GAS_MASS),
        }
    }
}

/// Smallest and largest volume of the plotted cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBounds {
    min: Volume,
    max: Volume,
}

impl VolumeBounds {
    /// Validates a pair of volume bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CarnotError::InvalidVolumeBounds`] unless `0 < min < max`
    /// and `max / min` is finite.
    pub fn new(min: Volume, max: Volume) -> Result<Self, CarnotError> {
        let min_cubic_meters = min.get::<cubic_meter>();
        let max_cubic_meters = max.get::<cubic_meter>();

        let valid = StrictlyPositive::check(&min_cubic_meters).is_ok()
            && max_cubic_meters > min_cubic_meters
            && (max_cubic_meters / min_cubic_meters).is_finite();

        if valid {
            Ok(Self { min, max })
        } else {
            Err(CarnotError::InvalidVolumeBounds {
                min_cubic_meters,
                max_cubic_meters,
            })
        }
    }

    #[must_use]
    pub fn min(&self) -> Volume {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Volume {
        self.max
    }

    fn log_span(&self) -> f64 {
        (self.max.get::<cubic_meter>() / self.min.get::<cubic_meter>()).ln()
    }
}

/// The four processes of a Carnot cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleProcess {
    IsothermalExpansion,
    AdiabaticExpansion,
    IsothermalCompression,
    AdiabaticCompression,
}

impl CycleProcess {
    /// All processes in the order the cycle visits them.
    pub const ALL: [Self; 4] = [
        Self::IsothermalExpansion,
        Self::AdiabaticExpansion,
        Self::IsothermalCompression,
        Self::AdiabaticCompression,
    ];

    /// Returns a human-readable label for plot legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::IsothermalExpansion => "Isothermal expansion",
            Self::AdiabaticExpansion => "Adiabatic expansion",
            Self::IsothermalCompression => "Isothermal compression",
            Self::AdiabaticCompression => "Adiabatic compression",
        }
    }

    #[must_use]
    pub fn is_isothermal(self) -> bool {
        matches!(self, Self::IsothermalExpansion | Self::IsothermalCompression)
    }

    #[must_use]
    pub fn is_expansion(self) -> bool {
        matches!(self, Self::IsothermalExpansion | Self::AdiabaticExpansion)
    }
}

/// A sampled state of the working gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvPoint {
    pub pressure: Pressure,
    pub volume: Volume,
    pub temperature: ThermodynamicTemperature,
}

/// One process of the cycle as an ordered run of points.
#[derive(Debug, Clone, PartialEq)]
pub struct PvLeg {
    pub process: CycleProcess,
    pub points: Vec<PvPoint>,
}

/// A closed Carnot cycle on the P-V plane.
///
/// Each leg starts where the previous one ends, and the last leg ends on the
/// first point of the first leg.
#[derive(Debug, Clone, PartialEq)]
pub struct PvCycle {
    /// Legs in [`CycleProcess::ALL`] order.
    pub legs: [PvLeg; 4],

    /// Heat absorbed during the isothermal expansion.
    pub heat_input: Energy,

    /// Work enclosed by the loop.
    pub net_work: Energy,
}

impl PvCycle {
    /// Returns the whole loop as one ordered path without repeated joints.
    ///
    /// The first and last points coincide, closing the loop.
    #[must_use]
    pub fn closed_path(&self) -> Vec<PvPoint> {
        let mut path = Vec::with_capacity(self.legs.iter().map(|leg| leg.points.len()).sum());
        for leg in &self.legs {
            let skip = usize::from(!path.is_empty());
            path.extend(leg.points.iter().skip(skip).copied());
        }
        path
    }
}

/// Builds the P-V loop between two reservoirs with default geometry.
///
/// # Errors
///
/// Returns a [`CarnotError`] if the reservoir temperatures are invalid
/// (see [`ReservoirPair::new`]).
pub fn build_pv_cycle_points(
    hot: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
    bounds: VolumeBounds,
) -> Result<PvCycle, CarnotError> {
    let reservoirs = ReservoirPair::new(hot, cold)?;
    Ok(build_pv_cycle_with(
        &reservoirs,
        bounds,
        &PvCycleConfig::default(),
    ))
}

/// Builds the P-V loop for a validated reservoir pair.
///
/// The loop runs from `bounds.min()` at the hot temperature, expands to
/// `bounds.max()` at the cold temperature, and returns.
#[must_use]
pub fn build_pv_cycle_with(
    reservoirs: &ReservoirPair,
    bounds: VolumeBounds,
    config: &PvCycleConfig,
) -> PvCycle {
    let t_hot = reservoirs.hot().get::<kelvin>();
    let t_cold = reservoirs.cold().get::<kelvin>();
    let log_span = bounds.log_span();
    let log_temperature_ratio = (t_hot / t_cold).ln();

    // Each isotherm keeps at least half of the log-volume span.
    let physical = log_temperature_ratio / (config.heat_capacity_ratio - 1.0);
    let log_adiabat = if physical.is_finite() && physical > 0.0 {
        physical.min(0.5 * log_span)
    } else {
        0.5 * log_span
    };
    let log_isotherm = log_span - log_adiabat;

    // Effective `γ − 1` along both adiabats: T·V^exponent is constant.
    let exponent = log_temperature_ratio / log_adiabat;

    let v_1 = bounds.min.get::<cubic_meter>();
    let v_2 = v_1 * log_isotherm.exp();
    let v_3 = bounds.max.get::<cubic_meter>();
    let v_4 = v_1 * log_adiabat.exp();

    let count = config.points_per_leg.max(2);
    let sampler = LegSampler { config, count };

    let legs = [
        sampler.leg(CycleProcess::IsothermalExpansion, v_1, v_2, t_hot, |_| t_hot),
        sampler.leg(CycleProcess::AdiabaticExpansion, v_2, v_3, t_cold, |v| {
            t_hot * (v_2 / v).powf(exponent)
        }),
        sampler.leg(CycleProcess::IsothermalCompression, v_3, v_4, t_cold, |_| t_cold),
        sampler.leg(CycleProcess::AdiabaticCompression, v_4, v_1, t_hot, |v| {
            t_cold * (v_4 / v).powf(exponent)
        }),
    ];

    let heat_input: Energy = config.mass * config.gas_constant * reservoirs.hot() * log_isotherm;
    let heat_rejected: Energy =
        config.mass * config.gas_constant * reservoirs.cold() * log_isotherm;

    debug!(
        t_hot,
        t_cold,
        v_min = v_1,
        v_max = v_3,
        exponent,
        "built Carnot P-V cycle"
    );

    PvCycle {
        legs,
        heat_input,
        net_work: heat_input - heat_rejected,
    }
}

struct LegSampler<'a> {
    config: &'a PvCycleConfig,
    count: usize,
}

impl LegSampler<'_> {
    /// Samples one leg from `v_start` to `v_end`, spaced evenly in log-volume.
    ///
    /// The final point is pinned to `(v_end, t_end)` so legs join exactly.
    fn leg(
        &self,
        process: CycleProcess,
        v_start: f64,
        v_end: f64,
        t_end: f64,
        temperature_at: impl Fn(f64) -> f64,
    ) -> PvLeg {
        #[allow(clippy::cast_precision_loss)]
        let step = (v_end / v_start).ln() / (self.count - 1) as f64;

        let points = (0..self.count)
            .map(|i| {
                if i + 1 == self.count {
                    self.point(v_end, t_end)
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let volume = v_start * (step * i as f64).exp();
                    self.point(volume, temperature_at(volume))
                }
            })
            .collect();

        trace!(process = process.label(), v_start, v_end, "sampled P-V leg");

        PvLeg { process, points }
    }

    fn point(&self, volume: f64, temperature: f64) -> PvPoint {
        let volume = Volume::new::<cubic_meter>(volume);
        let temperature = ThermodynamicTemperature::new::<kelvin>(temperature);
        PvPoint {
            pressure: ideal_gas_eos::pressure_in_volume(
                temperature,
                self.config.mass,
                volume,
                self.config.gas_constant,
            ),
            volume,
            temperature,
        }
    }
}
