//! Registro de los contenedores de todos los camiones
use log::debug;

use crate::{
    constants::STANDARD_TRUCK_BINS,
    errors::CoffeeTruckError,
    ingredient::{Ingredient, ALL_INGREDIENTS},
    storage_bin::StorageBin,
    truck::storage_bin_count,
};

/// Contenedores de todos los camiones, en el orden en el que fueron agregados.
/// Ese orden es el que se usa para vaciar contenedores con el mismo ingrediente.
#[derive(Debug, Default)]
pub struct StorageBinLedger {
    storage_bins: Vec<StorageBin>,
}

impl StorageBinLedger {
    pub fn new() -> StorageBinLedger {
        StorageBinLedger { storage_bins: Vec::new() }
    }

    pub fn storage_bins(&self) -> &[StorageBin] {
        &self.storage_bins
    }

    pub fn storage_bins_by_truck(&self, truck_id: usize) -> impl Iterator<Item = &StorageBin> {
        self.storage_bins.iter().filter(move |bin| bin.truck_id == truck_id)
    }

    pub fn storage_bins_with_ingredient(
        &self,
        truck_id: usize,
        ingredient: Ingredient,
    ) -> impl Iterator<Item = &StorageBin> {
        self.storage_bins_by_truck(truck_id)
            .filter(move |bin| bin.ingredient() == ingredient)
    }

    pub fn storage_bin(&self, truck_id: usize, bin_id: usize) -> Result<&StorageBin, CoffeeTruckError> {
        self.storage_bins
            .iter()
            .find(|bin| bin.truck_id == truck_id && bin.id == bin_id)
            .ok_or(CoffeeTruckError::StorageBinNotFound(truck_id, bin_id))
    }

    pub fn storage_bin_mut(
        &mut self,
        truck_id: usize,
        bin_id: usize,
    ) -> Result<&mut StorageBin, CoffeeTruckError> {
        self.storage_bins
            .iter_mut()
            .find(|bin| bin.truck_id == truck_id && bin.id == bin_id)
            .ok_or(CoffeeTruckError::StorageBinNotFound(truck_id, bin_id))
    }

    /// Verifica que los ingredientes elegidos para los contenedores de un camion sean validos:
    /// la cantidad depende de si es especial, y solo los ultimos contenedores guardan agregados.
    pub fn check_layout(is_special: bool, ingredients: &[Ingredient]) -> Result<(), CoffeeTruckError> {
        if ingredients.len() != storage_bin_count(is_special) {
            return Err(CoffeeTruckError::InvalidBinLayout(ingredients.len()));
        }
        for (index, ingredient) in ingredients.iter().enumerate() {
            check_bin_ingredient(index + 1, *ingredient)?;
        }
        Ok(())
    }

    /// Crea los contenedores de un camion, llenos, con los ingredientes en el orden dado
    pub fn assign_storage_bins(
        &mut self,
        truck_id: usize,
        is_special: bool,
        ingredients: &[Ingredient],
    ) -> Result<(), CoffeeTruckError> {
        StorageBinLedger::check_layout(is_special, ingredients)?;
        for (index, ingredient) in ingredients.iter().enumerate() {
            self.storage_bins
                .push(StorageBin::new(index + 1, truck_id, *ingredient));
        }
        debug!(
            "[LEDGER] Assigned {} storage bins to truck {}",
            ingredients.len(),
            truck_id
        );
        Ok(())
    }

    pub fn total_capacity(&self, truck_id: usize, ingredient: Ingredient) -> f64 {
        self.storage_bins_with_ingredient(truck_id, ingredient)
            .map(|bin| bin.capacity())
            .sum()
    }

    /// Saca `amount` de los contenedores del camion que tienen el ingrediente.
    /// Los contenedores se vacian en orden hasta cubrir lo pedido, el ultimo queda con el resto.
    /// Si entre todos no alcanza, o `amount` es negativo o NaN, no se toca ninguno.
    pub fn decrease_across_bins(&mut self, truck_id: usize, ingredient: Ingredient, amount: f64) -> bool {
        if amount.is_nan() || amount < 0.0 || self.total_capacity(truck_id, ingredient) < amount {
            return false;
        }

        let mut remaining = amount;
        for bin in self
            .storage_bins
            .iter_mut()
            .filter(|bin| bin.truck_id == truck_id && bin.ingredient() == ingredient)
        {
            if bin.capacity() >= remaining {
                bin.decrease_capacity(remaining);
                break;
            }
            remaining -= bin.capacity();
            bin.decrease_capacity(bin.capacity());
        }
        debug!(
            "[LEDGER] Truck {} used {:.2} {} of {}",
            truck_id,
            amount,
            ingredient.unit(),
            ingredient
        );
        true
    }

    /// Indica si el camion tiene al menos un contenedor con cada uno de los ingredientes
    pub fn truck_has_ingredients(&self, truck_id: usize, ingredients: &[Ingredient]) -> bool {
        ingredients.iter().all(|ingredient| {
            self.storage_bins_with_ingredient(truck_id, *ingredient)
                .next()
                .is_some()
        })
    }

    pub fn truck_has_add_ons(&self, truck_id: usize) -> bool {
        self.storage_bins_by_truck(truck_id)
            .any(|bin| bin.ingredient().is_add_on())
    }

    /// Agregados distintos que guarda el camion
    pub fn truck_add_ons(&self, truck_id: usize) -> Vec<Ingredient> {
        let mut add_ons = Vec::new();
        for bin in self.storage_bins_by_truck(truck_id) {
            if bin.ingredient().is_add_on() && !add_ons.contains(&bin.ingredient()) {
                add_ons.push(bin.ingredient());
            }
        }
        add_ons
    }

    pub fn critical_storage_bins(&self, truck_id: usize) -> impl Iterator<Item = &StorageBin> {
        self.storage_bins_by_truck(truck_id)
            .filter(|bin| bin.is_critical_capacity())
    }

    /// Cantidad total de cada ingrediente entre todos los camiones, en el orden del catalogo.
    /// Los ingredientes que no estan en ningun contenedor no aparecen.
    pub fn ingredient_capacities(&self) -> Vec<(Ingredient, f64)> {
        ALL_INGREDIENTS
            .iter()
            .filter_map(|ingredient| {
                let mut bins = self
                    .storage_bins
                    .iter()
                    .filter(|bin| bin.ingredient() == *ingredient)
                    .peekable();
                bins.peek()?;
                let total: f64 = bins.map(|bin| bin.capacity()).sum();
                Some((*ingredient, total))
            })
            .collect()
    }
}

/// Los contenedores `1..=8` solo guardan ingredientes comunes, el resto solo agregados
pub fn check_bin_ingredient(bin_id: usize, ingredient: Ingredient) -> Result<(), CoffeeTruckError> {
    let is_add_on_bin = bin_id > STANDARD_TRUCK_BINS;
    if bin_id == 0 || is_add_on_bin != ingredient.is_add_on() {
        return Err(CoffeeTruckError::IngredientNotAllowedInBin(bin_id, ingredient));
    }
    Ok(())
}
