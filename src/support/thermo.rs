//! Thermodynamic property helpers for the Twine framework.

pub mod ideal_gas_eos;
