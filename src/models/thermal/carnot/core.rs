//! Carnot heat engine computations.
//!
//! Every operation here is a pure function of its inputs: validate the
//! reservoirs, evaluate `η = 1 − T_cold / T_hot`, and derive the quantities a
//! calculator displays (work and waste fractions, an efficiency band, an
//! energy split, and a P-V loop for plotting).

mod band;
mod comparison;
mod efficiency;
mod energy_flow;
mod error;
mod pv_cycle;
mod reservoir;
mod temperature;

pub use band::{
    BandThresholds, DEFAULT_EXCELLENT_THRESHOLD, DEFAULT_GOOD_THRESHOLD,
    DEFAULT_MODERATE_THRESHOLD, EfficiencyBand,
};
pub use comparison::{
    COMPARISON_CSV_HEADER, EngineComparisonRow, comparison_csv, comparison_table,
};
pub use efficiency::{CarnotResult, compute_efficiency, compute_efficiency_with};
pub use energy_flow::{EnergyFlow, derive_energy_flow};
pub use error::CarnotError;
pub use pv_cycle::{
    CycleProcess, DEFAULT_GAS_CONSTANT, DEFAULT_GAS_MASS, DEFAULT_HEAT_CAPACITY_RATIO,
    DEFAULT_POINTS_PER_LEG, PvCycle, PvCycleConfig, PvLeg, PvPoint, VolumeBounds,
    build_pv_cycle_points, build_pv_cycle_with,
};
pub use reservoir::{ReservoirInput, ReservoirPair};
pub use temperature::{
    Temperature, TemperatureUnit, denormalize_temperature, normalize_temperature,
};
