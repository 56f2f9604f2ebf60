//! Thermal systems models.
//!
//! This module contains conduction models for solid walls.

pub mod wall;
