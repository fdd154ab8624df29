//! Cantidades de ingredientes usadas (o necesarias) para una preparacion
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::ingredient::Ingredient;

/// Lista de `(ingrediente, cantidad)` en orden de insercion.
/// Si el ingrediente ya esta, la cantidad se suma a la existente.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientUsage {
    ingredients: Vec<(Ingredient, f64)>,
}

impl IngredientUsage {
    pub fn new() -> IngredientUsage {
        IngredientUsage { ingredients: Vec::new() }
    }

    pub fn add(&mut self, ingredient: Ingredient, amount: f64) {
        match self.ingredients.iter_mut().find(|(i, _)| *i == ingredient) {
            Some((_, current)) => *current += amount,
            None => self.ingredients.push((ingredient, amount)),
        }
    }

    pub fn merge(&mut self, other: &IngredientUsage) {
        for (ingredient, amount) in other.iter() {
            self.add(ingredient, amount);
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|(i, _)| *i == ingredient)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, f64)> + '_ {
        self.ingredients.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Agregados (syrups) que forman parte del uso
    pub fn add_ons(&self) -> Vec<Ingredient> {
        self.iter()
            .filter(|(ingredient, _)| ingredient.is_add_on())
            .map(|(ingredient, _)| ingredient)
            .collect()
    }
}

impl Serialize for IngredientUsage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ingredients.len()))?;
        for (ingredient, amount) in self.ingredients.iter() {
            map.serialize_entry(ingredient, amount)?;
        }
        map.end()
    }
}
