//! # Carnot Models
//!
//! The calculation core of an interactive Carnot heat engine calculator,
//! packaged as a [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] adapter for a Carnot engine and the
//!   free functions a presentation layer calls on every input change.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use carnot_models::models::thermal::carnot::{EfficiencyBand, compute_efficiency};
//! use uom::si::{f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::kelvin};
//!
//! let hot = ThermodynamicTemperature::new::<kelvin>(500.0);
//! let cold = ThermodynamicTemperature::new::<kelvin>(300.0);
//!
//! let result = compute_efficiency(hot, cold).unwrap();
//! assert!((result.efficiency.as_ref().get::<ratio>() - 0.4).abs() < 1e-12);
//! assert_eq!(result.band, EfficiencyBand::Good);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Presentation concerns (band thresholds, P-V plot geometry) are plain
//! configuration structs with `Default` impls so callers can override them
//! without touching the thermodynamics.

pub mod models;
pub mod support;
