//! Brewer de los camiones. Prepara los cafes descontando los ingredientes de los contenedores.
use log::{debug, error};

use crate::{
    coffee::{CoffeeKind, CoffeeSize},
    errors::CoffeeTruckError,
    espresso_ratio::EspressoRatio,
    feasibility,
    ingredient::Ingredient,
    ingredient_usage::IngredientUsage,
    order::BrewOrder,
    recipe,
    storage_bin_ledger::StorageBinLedger,
};

/// Representa al brewer de un camion.
/// Cada preparacion es atomica: o se descuentan todos los ingredientes o ninguno.
pub struct Brewer<'a> {
    truck_id: usize,
    ledger: &'a mut StorageBinLedger,
}

impl<'a> Brewer<'a> {
    pub fn new(truck_id: usize, ledger: &'a mut StorageBinLedger) -> Brewer<'a> {
        Brewer { truck_id, ledger }
    }

    pub fn brew_espresso_shots(
        &mut self,
        shots: f64,
        ratio: &EspressoRatio,
    ) -> Result<IngredientUsage, CoffeeTruckError> {
        feasibility::check_espresso_shots(self.ledger, self.truck_id, shots, ratio)?;
        self.consume(recipe::espresso_shots(shots, ratio))
    }

    pub fn brew_coffee(
        &mut self,
        coffee: CoffeeKind,
        size: CoffeeSize,
        ratio: &EspressoRatio,
    ) -> Result<IngredientUsage, CoffeeTruckError> {
        feasibility::check_coffee(self.ledger, self.truck_id, coffee, size, ratio)?;
        debug!(
            "[BREWER {}] Brewing a {} {} with a {} ratio",
            self.truck_id, size, coffee, ratio
        );
        self.consume(recipe::coffee(coffee, size, ratio))
    }

    pub fn add_syrup(&mut self, syrup: Ingredient, pumps: u32) -> Result<IngredientUsage, CoffeeTruckError> {
        if !syrup.is_add_on() {
            return Err(CoffeeTruckError::NotAnAddOn(syrup));
        }
        feasibility::check_syrup(self.ledger, self.truck_id, syrup, pumps)?;
        self.consume(recipe::syrup(syrup, pumps))
    }

    /// Prepara el cafe del pedido junto con sus shots extra y su syrup
    pub fn brew_order(&mut self, order: &BrewOrder) -> Result<IngredientUsage, CoffeeTruckError> {
        if let Some(add_on) = order.syrup {
            if !add_on.syrup.is_add_on() {
                return Err(CoffeeTruckError::NotAnAddOn(add_on.syrup));
            }
        }
        feasibility::check_order(self.ledger, order)?;
        debug!(
            "[BREWER {}] Takes order {}: {} {}",
            self.truck_id, order.id, order.size, order.coffee
        );
        self.consume(recipe::order(order))
    }

    /// Verifica que alcancen todos los ingredientes y recien ahi los descuenta
    fn consume(&mut self, usage: IngredientUsage) -> Result<IngredientUsage, CoffeeTruckError> {
        for (ingredient, amount) in usage.iter() {
            if self.ledger.total_capacity(self.truck_id, ingredient) < amount {
                debug!(
                    "[BREWER {}] Not enough {}, needs {:.2} {}",
                    self.truck_id,
                    ingredient,
                    amount,
                    ingredient.unit()
                );
                return Err(CoffeeTruckError::InsufficientCapacity(ingredient));
            }
        }

        for (ingredient, amount) in usage.iter() {
            if !self.ledger.decrease_across_bins(self.truck_id, ingredient, amount) {
                error!(
                    "[BREWER {}] Could not take {:.2} of {} after checking it",
                    self.truck_id, amount, ingredient
                );
                return Err(CoffeeTruckError::InsufficientCapacity(ingredient));
            }
        }
        Ok(usage)
    }
}
