use uom::si::{
    f64::{HeatTransfer, Length, Ratio, ThermalConductivity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constrained, NonNegative};

use crate::models::thermal::wall::core::WallError;

/// Convective environment on one face of the wall.
///
/// The face exchanges heat with an ambient fluid at `ambient` through the
/// convective coefficient `h`. A coefficient of zero makes the face adiabatic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    ambient: ThermodynamicTemperature,
    h: HeatTransfer,
}

impl Face {
    /// Constructs a validated face.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is negative or not a number.
    pub fn new(ambient: ThermodynamicTemperature, h: HeatTransfer) -> Result<Self, WallError> {
        let h = NonNegative::new(h).map_err(WallError::invalid("convective coefficient"))?;
        Ok(Self::from_constrained(ambient, h))
    }

    /// Constructs a face from a pre-validated convective coefficient.
    #[must_use]
    pub fn from_constrained(
        ambient: ThermodynamicTemperature,
        h: Constrained<HeatTransfer, NonNegative>,
    ) -> Self {
        Self {
            ambient,
            h: h.into_inner(),
        }
    }

    /// Constructs a face without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `h` is non-negative.
    #[must_use]
    pub fn new_unchecked(ambient: ThermodynamicTemperature, h: HeatTransfer) -> Self {
        Self { ambient, h }
    }

    /// Returns the ambient fluid temperature.
    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        self.ambient
    }

    /// Returns the convective heat transfer coefficient.
    #[must_use]
    pub fn h(&self) -> HeatTransfer {
        self.h
    }

    /// Returns the Biot-like coefficient `h * dx / k` of the boundary node.
    #[must_use]
    pub fn biot(&self, dx: Length, conductivity: ThermalConductivity) -> Ratio {
        Ratio::new::<ratio>(
            self.h.get::<watt_per_square_meter_kelvin>() * dx.get::<meter>()
                / conductivity.get::<watt_per_meter_kelvin>(),
        )
    }
}
