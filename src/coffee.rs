//! Cafes que se pueden preparar y sus tamaños
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ingredient::Ingredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeKind {
    Americano,
    Latte,
    Cappuccino,
}

/// Receta de un cafe. Las proporciones se aplican sobre la capacidad del vaso.
#[derive(Debug)]
pub struct Coffee {
    pub name: &'static str,
    pub extra_ingredient: Ingredient,
    pub espresso_share: f64,
    pub extra_ingredient_share: f64,
}

static AMERICANO: Coffee = Coffee {
    name: "Café Americano",
    extra_ingredient: Ingredient::Water,
    espresso_share: 1.0 / 3.0,
    extra_ingredient_share: 2.0 / 3.0,
};

static LATTE: Coffee = Coffee {
    name: "Latte",
    extra_ingredient: Ingredient::Milk,
    espresso_share: 1.0 / 5.0,
    extra_ingredient_share: 4.0 / 5.0,
};

static CAPPUCCINO: Coffee = Coffee {
    name: "Cappuccino",
    extra_ingredient: Ingredient::Milk,
    espresso_share: 1.0 / 3.0,
    extra_ingredient_share: 2.0 / 3.0,
};

pub const ALL_COFFEES: [CoffeeKind; 3] = [CoffeeKind::Americano, CoffeeKind::Latte, CoffeeKind::Cappuccino];

impl CoffeeKind {
    pub fn recipe(self) -> &'static Coffee {
        match self {
            CoffeeKind::Americano => &AMERICANO,
            CoffeeKind::Latte => &LATTE,
            CoffeeKind::Cappuccino => &CAPPUCCINO,
        }
    }
}

impl fmt::Display for CoffeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recipe().name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeSize {
    Small,
    Medium,
    Large,
}

pub const ALL_SIZES: [CoffeeSize; 3] = [CoffeeSize::Small, CoffeeSize::Medium, CoffeeSize::Large];

impl CoffeeSize {
    pub fn cup(self) -> Ingredient {
        match self {
            CoffeeSize::Small => Ingredient::SmallCup,
            CoffeeSize::Medium => Ingredient::MediumCup,
            CoffeeSize::Large => Ingredient::LargeCup,
        }
    }

    /// Capacidad del vaso en onzas liquidas
    pub fn capacity(self) -> u32 {
        match self {
            CoffeeSize::Small => 8,
            CoffeeSize::Medium => 12,
            CoffeeSize::Large => 16,
        }
    }
}

impl fmt::Display for CoffeeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoffeeSize::Small => "Small Cup",
            CoffeeSize::Medium => "Medium Cup",
            CoffeeSize::Large => "Large Cup",
        };
        write!(f, "{} ({} fl oz)", name, self.capacity())
    }
}
