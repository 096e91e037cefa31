//! Thermal systems models.
//!
//! This module contains models for heat engines and related thermodynamic cycles.

pub mod carnot;
