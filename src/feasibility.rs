//! Chequeos previos a preparar un cafe. No modifican los contenedores.
use crate::{
    coffee::{CoffeeKind, CoffeeSize, ALL_COFFEES},
    errors::CoffeeTruckError,
    espresso_ratio::EspressoRatio,
    ingredient::Ingredient,
    ingredient_usage::IngredientUsage,
    order::BrewOrder,
    recipe,
    storage_bin_ledger::StorageBinLedger,
};

pub fn check_espresso_shots(
    ledger: &StorageBinLedger,
    truck_id: usize,
    shots: f64,
    ratio: &EspressoRatio,
) -> Result<(), CoffeeTruckError> {
    if !shots.is_finite() || shots < 0.0 {
        return Err(CoffeeTruckError::InvalidAmount);
    }
    ratio.ensure_set()?;
    if ledger.total_capacity(truck_id, Ingredient::CoffeeBeans) < ratio.bean_grams_per_shot() * shots {
        return Err(CoffeeTruckError::InsufficientCapacity(Ingredient::CoffeeBeans));
    }
    if ledger.total_capacity(truck_id, Ingredient::Water) < ratio.water_per_shot() * shots {
        return Err(CoffeeTruckError::InsufficientCapacity(Ingredient::Water));
    }
    Ok(())
}

/// Chequea granos, agua, ingrediente extra y vaso, en ese orden.
/// Si el ingrediente extra es agua, tambien cuenta el agua del espresso.
/// El vaso solo falla si no queda ninguno.
pub fn check_coffee(
    ledger: &StorageBinLedger,
    truck_id: usize,
    coffee: CoffeeKind,
    size: CoffeeSize,
    ratio: &EspressoRatio,
) -> Result<(), CoffeeTruckError> {
    let shot_units = recipe::coffee_shot_units(coffee, size);
    check_espresso_shots(ledger, truck_id, shot_units, ratio)?;

    let extra_ingredient = coffee.recipe().extra_ingredient;
    let mut extra_required = recipe::extra_ingredient_amount(coffee, size);
    if extra_ingredient == Ingredient::Water {
        extra_required += ratio.water_per_shot() * shot_units;
    }
    if ledger.total_capacity(truck_id, extra_ingredient) < extra_required {
        return Err(CoffeeTruckError::InsufficientCapacity(extra_ingredient));
    }

    if ledger.total_capacity(truck_id, size.cup()) == 0.0 {
        return Err(CoffeeTruckError::InsufficientCapacity(size.cup()));
    }
    Ok(())
}

pub fn check_syrup(
    ledger: &StorageBinLedger,
    truck_id: usize,
    syrup: Ingredient,
    pumps: u32,
) -> Result<(), CoffeeTruckError> {
    check_additional(ledger, truck_id, &IngredientUsage::new(), &recipe::syrup(syrup, pumps))
}

/// Chequea el cafe y despues los agregados, teniendo en cuenta lo que ya usa el cafe
pub fn check_order(ledger: &StorageBinLedger, order: &BrewOrder) -> Result<(), CoffeeTruckError> {
    check_coffee(ledger, order.truck_id, order.coffee, order.size, &order.ratio)?;
    let mut claimed = recipe::coffee(order.coffee, order.size, &order.ratio);

    if let Some(extra_shots) = order.extra_shots.filter(|shots| shots.count > 0) {
        extra_shots.ratio.ensure_set()?;
        let shots = recipe::espresso_shots(extra_shots.count as f64, &extra_shots.ratio);
        check_additional(ledger, order.truck_id, &claimed, &shots)?;
        claimed.merge(&shots);
    }

    if let Some(add_on) = order.syrup.filter(|add_on| add_on.pumps > 0) {
        let syrup = recipe::syrup(add_on.syrup, add_on.pumps);
        check_additional(ledger, order.truck_id, &claimed, &syrup)?;
    }
    Ok(())
}

fn check_additional(
    ledger: &StorageBinLedger,
    truck_id: usize,
    claimed: &IngredientUsage,
    additional: &IngredientUsage,
) -> Result<(), CoffeeTruckError> {
    for (ingredient, amount) in additional.iter() {
        let required = claimed.get(ingredient).unwrap_or(0.0) + amount;
        if ledger.total_capacity(truck_id, ingredient) < required {
            return Err(CoffeeTruckError::InsufficientCapacity(ingredient));
        }
    }
    Ok(())
}

pub fn is_capable_of_brewing(ledger: &StorageBinLedger, truck_id: usize, coffee: CoffeeKind) -> bool {
    ledger.truck_has_ingredients(
        truck_id,
        &[coffee.recipe().extra_ingredient, Ingredient::CoffeeBeans, Ingredient::Water],
    )
}

/// Cafes que el camion puede preparar segun los ingredientes que guarda
pub fn brewable_coffees(ledger: &StorageBinLedger, truck_id: usize) -> Vec<CoffeeKind> {
    ALL_COFFEES
        .iter()
        .copied()
        .filter(|coffee| is_capable_of_brewing(ledger, truck_id, *coffee))
        .collect()
}
