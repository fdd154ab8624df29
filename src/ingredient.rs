//! Catalogo de ingredientes que pueden guardarse en los contenedores de un camion
use std::fmt;

use serde::{Deserialize, Serialize};

pub const TOTAL_INGREDIENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    SmallCup,
    MediumCup,
    LargeCup,
    CoffeeBeans,
    Milk,
    Water,
    HazelnutSyrup,
    ChocolateSyrup,
    AlmondSyrup,
    Sweetener,
}

/// Datos fijos de un ingrediente
#[derive(Debug)]
pub struct IngredientInfo {
    pub name: &'static str,
    /// Los agregados solo pueden guardarse en los contenedores extra de los camiones especiales
    pub is_add_on: bool,
    /// Capacidad maxima de un contenedor con este ingrediente
    pub max_capacity: f64,
    pub unit: &'static str,
}

static INGREDIENT_TABLE: [IngredientInfo; TOTAL_INGREDIENTS] = [
    IngredientInfo { name: "Small Cups", is_add_on: false, max_capacity: 80.0, unit: "pcs" },
    IngredientInfo { name: "Medium Cups", is_add_on: false, max_capacity: 64.0, unit: "pcs" },
    IngredientInfo { name: "Large Cups", is_add_on: false, max_capacity: 40.0, unit: "pcs" },
    IngredientInfo { name: "Coffee Beans", is_add_on: false, max_capacity: 1008.0, unit: "g" },
    IngredientInfo { name: "Milk", is_add_on: false, max_capacity: 640.0, unit: "fl oz" },
    IngredientInfo { name: "Water", is_add_on: false, max_capacity: 640.0, unit: "fl oz" },
    IngredientInfo { name: "Hazelnut Syrup", is_add_on: true, max_capacity: 640.0, unit: "fl oz" },
    IngredientInfo { name: "Chocolate Syrup", is_add_on: true, max_capacity: 640.0, unit: "fl oz" },
    IngredientInfo { name: "Almond Syrup", is_add_on: true, max_capacity: 640.0, unit: "fl oz" },
    IngredientInfo { name: "Sweetener (Sucrose)", is_add_on: true, max_capacity: 640.0, unit: "fl oz" },
];

pub static ALL_INGREDIENTS: [Ingredient; TOTAL_INGREDIENTS] = [
    Ingredient::SmallCup,
    Ingredient::MediumCup,
    Ingredient::LargeCup,
    Ingredient::CoffeeBeans,
    Ingredient::Milk,
    Ingredient::Water,
    Ingredient::HazelnutSyrup,
    Ingredient::ChocolateSyrup,
    Ingredient::AlmondSyrup,
    Ingredient::Sweetener,
];

impl Ingredient {
    pub fn info(self) -> &'static IngredientInfo {
        &INGREDIENT_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_add_on(self) -> bool {
        self.info().is_add_on
    }

    pub fn max_capacity(self) -> f64 {
        self.info().max_capacity
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }

    /// Los vasos se cuentan por unidad
    pub fn is_cup(self) -> bool {
        matches!(self, Ingredient::SmallCup | Ingredient::MediumCup | Ingredient::LargeCup)
    }

    /// Ingredientes que puede usar cualquier camion
    pub fn regular_values() -> impl Iterator<Item = Ingredient> {
        ALL_INGREDIENTS.iter().copied().filter(|i| !i.is_add_on())
    }

    /// Ingredientes que solo pueden usar los camiones especiales
    pub fn add_on_values() -> impl Iterator<Item = Ingredient> {
        ALL_INGREDIENTS.iter().copied().filter(|i| i.is_add_on())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_six_regular_ingredients_and_four_add_ons() {
        assert_eq!(6, Ingredient::regular_values().count());
        assert_eq!(4, Ingredient::add_on_values().count());
    }

    #[test]
    fn should_look_up_the_record_of_an_ingredient() {
        assert_eq!("Coffee Beans", Ingredient::CoffeeBeans.name());
        assert_eq!(1008.0, Ingredient::CoffeeBeans.max_capacity());
        assert_eq!("g", Ingredient::CoffeeBeans.unit());
        assert_eq!(40.0, Ingredient::LargeCup.max_capacity());
        assert_eq!(true, Ingredient::Sweetener.is_add_on());
        assert_eq!(false, Ingredient::Water.is_add_on());
        assert_eq!(true, Ingredient::MediumCup.is_cup());
        assert_eq!(false, Ingredient::CoffeeBeans.is_cup());
    }

    #[test]
    fn should_keep_the_table_in_the_same_order_as_the_identifiers() {
        for ingredient in ALL_INGREDIENTS.iter() {
            assert_eq!(ingredient.info().name, INGREDIENT_TABLE[*ingredient as usize].name);
        }
        assert_eq!("Sweetener (Sucrose)", Ingredient::Sweetener.to_string());
    }

    #[test]
    fn should_deserialize_from_snake_case() {
        let ingredient: Ingredient = serde_json::from_str("\"hazelnut_syrup\"").unwrap();
        assert_eq!(Ingredient::HazelnutSyrup, ingredient);
    }
}
