//! Cantidades de ingredientes que necesita cada preparacion.
//! Las usan tanto el chequeo previo como el brewer, asi ambos calculan lo mismo.
use crate::{
    coffee::{CoffeeKind, CoffeeSize},
    constants::{CUPS_PER_COFFEE, SYRUP_PUMP_FL_OZ},
    espresso_ratio::EspressoRatio,
    ingredient::Ingredient,
    ingredient_usage::IngredientUsage,
    order::BrewOrder,
};

/// Granos (g) y agua (fl oz) para `shots` unidades de espresso
pub fn espresso_shots(shots: f64, ratio: &EspressoRatio) -> IngredientUsage {
    let mut usage = IngredientUsage::new();
    usage.add(Ingredient::CoffeeBeans, ratio.bean_grams_per_shot() * shots);
    usage.add(Ingredient::Water, ratio.water_per_shot() * shots);
    usage
}

/// Unidades de shot que lleva el cafe segun el tamaño del vaso
pub fn coffee_shot_units(coffee: CoffeeKind, size: CoffeeSize) -> f64 {
    coffee.recipe().espresso_share * size.capacity() as f64
}

pub fn extra_ingredient_amount(coffee: CoffeeKind, size: CoffeeSize) -> f64 {
    coffee.recipe().extra_ingredient_share * size.capacity() as f64
}

/// Granos, agua, ingrediente extra y vaso, en ese orden
pub fn coffee(coffee: CoffeeKind, size: CoffeeSize, ratio: &EspressoRatio) -> IngredientUsage {
    let mut usage = espresso_shots(coffee_shot_units(coffee, size), ratio);
    usage.add(coffee.recipe().extra_ingredient, extra_ingredient_amount(coffee, size));
    usage.add(size.cup(), CUPS_PER_COFFEE);
    usage
}

/// Cada bombeo es de `SYRUP_PUMP_FL_OZ`, se registra el volumen total
pub fn syrup(syrup: Ingredient, pumps: u32) -> IngredientUsage {
    let mut usage = IngredientUsage::new();
    usage.add(syrup, SYRUP_PUMP_FL_OZ * pumps as f64);
    usage
}

/// Todo lo que usa un pedido, incluyendo agregados
pub fn order(order: &BrewOrder) -> IngredientUsage {
    let mut usage = coffee(order.coffee, order.size, &order.ratio);
    if let Some(extra_shots) = order.extra_shots.filter(|shots| shots.count > 0) {
        usage.merge(&espresso_shots(extra_shots.count as f64, &extra_shots.ratio));
    }
    if let Some(add_on) = order.syrup.filter(|add_on| add_on.pumps > 0) {
        usage.merge(&syrup(add_on.syrup, add_on.pumps));
    }
    usage
}
