//! Proporcion de granos de cafe y agua de un shot de espresso
use std::fmt;

use serde::Serialize;

use crate::{constants::FLUID_OUNCES_TO_GRAMS, errors::CoffeeTruckError};

/// Proporcion `beans:water`. Se pasa por valor en cada preparacion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EspressoRatio {
    pub name: &'static str,
    pub beans: u32,
    pub water: u32,
}

impl EspressoRatio {
    pub const LIGHT: EspressoRatio = EspressoRatio { name: "Light", beans: 1, water: 20 };
    pub const STANDARD: EspressoRatio = EspressoRatio { name: "Standard", beans: 1, water: 18 };
    pub const STRONG: EspressoRatio = EspressoRatio { name: "Strong", beans: 1, water: 15 };

    pub fn presets() -> [EspressoRatio; 3] {
        [EspressoRatio::LIGHT, EspressoRatio::STANDARD, EspressoRatio::STRONG]
    }

    /// Proporcion personalizada de un grano por `water` partes de agua.
    /// Con `water == 0` queda sin definir y no se puede usar para preparar.
    pub fn custom(water: u32) -> EspressoRatio {
        EspressoRatio { name: "Custom", beans: 1, water }
    }

    pub fn is_unset(&self) -> bool {
        self.water == 0
    }

    pub fn ensure_set(&self) -> Result<(), CoffeeTruckError> {
        if self.is_unset() {
            return Err(CoffeeTruckError::UnsetEspressoRatio);
        }
        Ok(())
    }

    pub fn bean_fraction(&self) -> f64 {
        self.beans as f64 / (self.beans + self.water) as f64
    }

    pub fn water_fraction(&self) -> f64 {
        self.water as f64 / (self.beans + self.water) as f64
    }

    /// Gramos de granos por cada unidad de shot
    pub fn bean_grams_per_shot(&self) -> f64 {
        self.bean_fraction() * FLUID_OUNCES_TO_GRAMS
    }

    /// Onzas liquidas de agua por cada unidad de shot
    pub fn water_per_shot(&self) -> f64 {
        self.water_fraction()
    }
}

impl fmt::Display for EspressoRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            return write!(f, "Customize");
        }
        write!(f, "{} ({} Coffee Beans : {} Water)", self.name, self.beans, self.water)
    }
}
