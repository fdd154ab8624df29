//! Generacion de pedidos aleatorios para los camiones existentes
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::coffee::ALL_SIZES;
use crate::coffee_truck_business::CoffeeTruckBusiness;
use crate::espresso_ratio::EspressoRatio;
use crate::order::BrewOrder;

const MAX_EXTRA_SHOTS: u32 = 3;
const MAX_SYRUP_PUMPS: u32 = 4;
const MAX_CUSTOM_WATER_RATIO: u32 = 25;

/// Genera hasta `count` pedidos, solo con cafes que el camion puede preparar.
/// Los camiones especiales ademas piden otras proporciones, shots extra y syrups.
pub fn random_orders<R: Rng>(business: &CoffeeTruckBusiness, count: usize, rng: &mut R) -> Vec<BrewOrder> {
    let trucks = business.fleet().trucks();
    let mut orders = Vec::new();
    if trucks.is_empty() {
        return orders;
    }

    for id in 0..count {
        let truck = match trucks.choose(rng) {
            Some(truck) => truck,
            None => break,
        };
        let coffees = match business.brewable_coffees(truck.id) {
            Ok(coffees) => coffees,
            Err(_) => continue,
        };
        let (coffee, size) = match (coffees.choose(rng), ALL_SIZES.choose(rng)) {
            (Some(coffee), Some(size)) => (*coffee, *size),
            _ => continue,
        };

        if !truck.is_special {
            orders.push(BrewOrder::new(id, truck.id, coffee, size, EspressoRatio::STANDARD));
            continue;
        }

        let mut order = BrewOrder::new(id, truck.id, coffee, size, random_ratio(rng));
        if rng.gen_bool(0.3) {
            order = order.with_extra_shots(rng.gen_range(1, MAX_EXTRA_SHOTS + 1), random_ratio(rng));
        }
        let add_ons = business.ledger().truck_add_ons(truck.id);
        if let Some(syrup) = add_ons.choose(rng) {
            if rng.gen_bool(0.5) {
                order = order.with_syrup(*syrup, rng.gen_range(1, MAX_SYRUP_PUMPS + 1));
            }
        }
        orders.push(order);
    }
    debug!("[GENERATOR] Generated {} orders", orders.len());
    orders
}

fn random_ratio<R: Rng>(rng: &mut R) -> EspressoRatio {
    if rng.gen_bool(0.25) {
        return EspressoRatio::custom(rng.gen_range(1, MAX_CUSTOM_WATER_RATIO + 1));
    }
    let presets = EspressoRatio::presets();
    presets.choose(rng).copied().unwrap_or(EspressoRatio::STANDARD)
}
