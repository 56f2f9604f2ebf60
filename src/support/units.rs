//! Extensions to [`uom`].
//!
//! Every physical input and output of the wall models is a [`uom`] quantity.
//! This module holds the pieces that [`uom`] does not provide on its own.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts one absolute temperature from
//! another and yields a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_wall::support::units::TemperatureDifference;
//!
//! let ceiling = ThermodynamicTemperature::new::<degree_celsius>(800.0);
//! let interface = ThermodynamicTemperature::new::<degree_celsius>(704.2);
//! let margin = ceiling.minus(interface);
//! assert!((margin.get::<delta_kelvin>() - 95.8).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
