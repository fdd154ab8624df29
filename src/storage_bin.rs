//! Contenedor de un ingrediente dentro de un camion
use crate::{constants::CRITICAL_CAPACITY_FRACTION, ingredient::Ingredient};

/// Representa un contenedor de un camion.
/// `capacity` es la cantidad del ingrediente que queda guardada.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageBin {
    pub id: usize,
    pub truck_id: usize,
    ingredient: Ingredient,
    capacity: f64,
}

impl StorageBin {
    /// Crea un contenedor lleno del ingrediente
    pub fn new(id: usize, truck_id: usize, ingredient: Ingredient) -> StorageBin {
        StorageBin {
            id,
            truck_id,
            ingredient,
            capacity: ingredient.max_capacity(),
        }
    }

    pub fn ingredient(&self) -> Ingredient {
        self.ingredient
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn max_capacity(&self) -> f64 {
        self.ingredient.max_capacity()
    }

    /// Agrega `amount` al contenedor. No hace nada si `amount` no es un numero positivo.
    /// No se limita al maximo, eso queda a cargo de quien llama.
    pub fn increase_capacity(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount <= 0.0 {
            return false;
        }
        self.capacity += amount;
        true
    }

    /// Saca `amount` del contenedor. No hace nada si no alcanza lo que hay
    /// o si `amount` es negativo o NaN.
    pub fn decrease_capacity(&mut self, amount: f64) -> bool {
        if amount.is_nan() || amount < 0.0 || amount > self.capacity {
            return false;
        }
        self.capacity -= amount;
        true
    }

    /// Vacia el contenedor y lo llena con el nuevo ingrediente
    pub fn replace_ingredient(&mut self, ingredient: Ingredient) {
        self.decrease_capacity(self.capacity);
        self.ingredient = ingredient;
        self.increase_capacity(ingredient.max_capacity());
    }

    pub fn is_critical_capacity(&self) -> bool {
        self.capacity < self.max_capacity() * CRITICAL_CAPACITY_FRACTION
    }

    pub fn is_full(&self) -> bool {
        self.capacity >= self.max_capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0.0
    }
}
