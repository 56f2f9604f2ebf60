//! # Twine Wall
//!
//! Steady-state plane wall conduction models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The central model is a furnace wall: a flat solid slab heated by a hot
//! gas on one face and cooled by ambient air on the other. The wall is
//! discretized into a line of equally spaced nodes, the temperature field is
//! relaxed to steady state, and the position beyond which the material stays
//! below a temperature ceiling is located.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
