//! Reposicion de los contenedores de un camion
use log::{debug, info};

use crate::{
    errors::CoffeeTruckError,
    ingredient::Ingredient,
    storage_bin_ledger::{check_bin_ingredient, StorageBinLedger},
};

/// Repone `amount` en un contenedor sin pasarse de su maximo.
/// Los vasos solo se reponen de a unidades enteras.
/// Devuelve cuanto se agrego realmente.
pub fn restock(
    ledger: &mut StorageBinLedger,
    truck_id: usize,
    bin_id: usize,
    amount: f64,
) -> Result<f64, CoffeeTruckError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoffeeTruckError::InvalidAmount);
    }
    let bin = ledger.storage_bin_mut(truck_id, bin_id)?;
    if bin.ingredient().is_cup() && amount.fract() != 0.0 {
        return Err(CoffeeTruckError::InvalidAmount);
    }
    if bin.is_full() {
        return Err(CoffeeTruckError::StorageBinFull(bin_id));
    }

    let added = amount.min(bin.max_capacity() - bin.capacity());
    bin.increase_capacity(added);
    debug!(
        "[RESTOCKER] Restocked storage bin {} of truck {} with {:.2} {} of {}",
        bin_id,
        truck_id,
        added,
        bin.ingredient().unit(),
        bin.ingredient()
    );
    Ok(added)
}

/// Vacia un contenedor. Devuelve cuanto se saco.
pub fn empty(ledger: &mut StorageBinLedger, truck_id: usize, bin_id: usize) -> Result<f64, CoffeeTruckError> {
    let bin = ledger.storage_bin_mut(truck_id, bin_id)?;
    if bin.is_empty() {
        return Err(CoffeeTruckError::StorageBinEmpty(bin_id));
    }
    let removed = bin.capacity();
    bin.decrease_capacity(removed);
    debug!(
        "[RESTOCKER] Emptied storage bin {} of truck {}, removed {:.2} of {}",
        bin_id,
        truck_id,
        removed,
        bin.ingredient()
    );
    Ok(removed)
}

/// Cambia el ingrediente de un contenedor. El contenedor queda lleno con el nuevo ingrediente.
pub fn change_ingredient(
    ledger: &mut StorageBinLedger,
    truck_id: usize,
    bin_id: usize,
    ingredient: Ingredient,
) -> Result<(), CoffeeTruckError> {
    check_bin_ingredient(bin_id, ingredient)?;
    let bin = ledger.storage_bin_mut(truck_id, bin_id)?;
    if bin.ingredient() == ingredient {
        return Err(CoffeeTruckError::SameIngredient(ingredient));
    }
    let previous = bin.ingredient();
    bin.replace_ingredient(ingredient);
    info!(
        "[RESTOCKER] Storage bin {} of truck {} changed from {} to {}",
        bin_id, truck_id, previous, ingredient
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_bin_ledger::tests::special_layout;

    fn ledger() -> StorageBinLedger {
        let mut ledger = StorageBinLedger::new();
        ledger.assign_storage_bins(1, true, &special_layout()).unwrap();
        ledger
    }

    #[test]
    fn should_restock_up_to_the_maximum() {
        let mut ledger = ledger();
        ledger.decrease_across_bins(1, Ingredient::Milk, 100.0);
        assert_eq!(Ok(60.0), restock(&mut ledger, 1, 5, 60.0));
        assert_eq!(Ok(40.0), restock(&mut ledger, 1, 5, 500.0));
        assert_eq!(640.0, ledger.storage_bin(1, 5).unwrap().capacity());
    }

    #[test]
    fn should_not_restock_a_full_bin_or_a_non_positive_amount() {
        let mut ledger = ledger();
        assert_eq!(Err(CoffeeTruckError::StorageBinFull(5)), restock(&mut ledger, 1, 5, 10.0));
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), restock(&mut ledger, 1, 5, 0.0));
        assert_eq!(
            Err(CoffeeTruckError::StorageBinNotFound(1, 11)),
            restock(&mut ledger, 1, 11, 10.0)
        );
    }

    #[test]
    fn should_not_restock_a_nan_amount() {
        let mut ledger = ledger();
        ledger.decrease_across_bins(1, Ingredient::Milk, 100.0);
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), restock(&mut ledger, 1, 5, f64::NAN));
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), restock(&mut ledger, 1, 5, f64::INFINITY));
        assert_eq!(540.0, ledger.storage_bin(1, 5).unwrap().capacity());
    }

    #[test]
    fn should_restock_cups_by_whole_units() {
        let mut ledger = ledger();
        empty(&mut ledger, 1, 1).unwrap();
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), restock(&mut ledger, 1, 1, 0.5));
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), restock(&mut ledger, 1, 1, 2.5));
        assert_eq!(0.0, ledger.storage_bin(1, 1).unwrap().capacity());
        assert_eq!(Ok(2.0), restock(&mut ledger, 1, 1, 2.0));
        ledger.decrease_across_bins(1, Ingredient::Milk, 10.0);
        assert_eq!(Ok(0.5), restock(&mut ledger, 1, 5, 0.5));
    }

    #[test]
    fn should_empty_a_bin_once() {
        let mut ledger = ledger();
        assert_eq!(Ok(80.0), empty(&mut ledger, 1, 1));
        assert_eq!(Err(CoffeeTruckError::StorageBinEmpty(1)), empty(&mut ledger, 1, 1));
    }

    #[test]
    fn should_refill_when_changing_the_ingredient() {
        let mut ledger = ledger();
        empty(&mut ledger, 1, 5).unwrap();
        assert_eq!(Ok(()), change_ingredient(&mut ledger, 1, 5, Ingredient::Water));
        let bin = ledger.storage_bin(1, 5).unwrap();
        assert_eq!(Ingredient::Water, bin.ingredient());
        assert_eq!(640.0, bin.capacity());
        assert_eq!(1920.0, ledger.total_capacity(1, Ingredient::Water));
    }

    #[test]
    fn should_keep_add_ons_in_the_add_on_bins() {
        let mut ledger = ledger();
        assert_eq!(
            Err(CoffeeTruckError::IngredientNotAllowedInBin(9, Ingredient::Milk)),
            change_ingredient(&mut ledger, 1, 9, Ingredient::Milk)
        );
        assert_eq!(
            Err(CoffeeTruckError::IngredientNotAllowedInBin(2, Ingredient::AlmondSyrup)),
            change_ingredient(&mut ledger, 1, 2, Ingredient::AlmondSyrup)
        );
        assert_eq!(
            Err(CoffeeTruckError::SameIngredient(Ingredient::HazelnutSyrup)),
            change_ingredient(&mut ledger, 1, 9, Ingredient::HazelnutSyrup)
        );
        assert_eq!(Ok(()), change_ingredient(&mut ledger, 1, 9, Ingredient::AlmondSyrup));
    }
}
