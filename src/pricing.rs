//! Precios de los cafes y de los agregados
use std::collections::HashMap;

use crate::{
    coffee::{CoffeeKind, CoffeeSize, ALL_COFFEES},
    constants::PRICE_SIZE_MODIFIER,
    errors::CoffeeTruckError,
    order::BrewOrder,
};

/// Precio de un producto. Empieza sin definir y nunca puede ser negativo.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Price {
    value: Option<f64>,
}

impl Price {
    pub fn get(&self) -> Option<f64> {
        self.value
    }

    pub fn set(&mut self, value: f64) -> Result<(), CoffeeTruckError> {
        if !value.is_finite() {
            return Err(CoffeeTruckError::InvalidAmount);
        }
        if value < 0.0 {
            return Err(CoffeeTruckError::NegativePrice);
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// El precio base corresponde al vaso mediano
    pub fn for_size(&self, size: CoffeeSize) -> Option<f64> {
        self.value.map(|price| match size {
            CoffeeSize::Small => price - price * PRICE_SIZE_MODIFIER,
            CoffeeSize::Medium => price,
            CoffeeSize::Large => price + price * PRICE_SIZE_MODIFIER,
        })
    }
}

#[derive(Debug, Default)]
pub struct PriceList {
    coffees: HashMap<CoffeeKind, Price>,
    espresso_shot: Price,
    syrup_pump: Price,
}

impl PriceList {
    pub fn new() -> PriceList {
        PriceList::default()
    }

    pub fn set_coffee_price(&mut self, coffee: CoffeeKind, price: f64) -> Result<(), CoffeeTruckError> {
        self.coffees.entry(coffee).or_default().set(price)
    }

    pub fn set_espresso_shot_price(&mut self, price: f64) -> Result<(), CoffeeTruckError> {
        self.espresso_shot.set(price)
    }

    pub fn set_syrup_pump_price(&mut self, price: f64) -> Result<(), CoffeeTruckError> {
        self.syrup_pump.set(price)
    }

    pub fn coffee_price(&self, coffee: CoffeeKind) -> Price {
        self.coffees.get(&coffee).copied().unwrap_or_default()
    }

    pub fn espresso_shot_price(&self) -> Price {
        self.espresso_shot
    }

    pub fn syrup_pump_price(&self) -> Price {
        self.syrup_pump
    }

    pub fn is_set(&self) -> bool {
        self.espresso_shot.is_set()
            && self.syrup_pump.is_set()
            && ALL_COFFEES.iter().all(|coffee| self.coffee_price(*coffee).is_set())
    }

    /// Precio del cafe segun el tamaño mas los shots extra y los bombeos de syrup
    pub fn order_cost(&self, order: &BrewOrder) -> Result<f64, CoffeeTruckError> {
        let coffee = self
            .coffee_price(order.coffee)
            .for_size(order.size)
            .ok_or(CoffeeTruckError::PricesNotSet)?;
        let mut cost = coffee;
        if order.extra_shot_count() > 0 {
            let shot = self.espresso_shot.get().ok_or(CoffeeTruckError::PricesNotSet)?;
            cost += shot * order.extra_shot_count() as f64;
        }
        if order.syrup_pumps() > 0 {
            let pump = self.syrup_pump.get().ok_or(CoffeeTruckError::PricesNotSet)?;
            cost += pump * order.syrup_pumps() as f64;
        }
        Ok(cost)
    }
}
