//! Lectura del escenario a simular: precios, camiones y pedidos
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::coffee::{CoffeeKind, CoffeeSize};
use crate::coffee_truck_business::CoffeeTruckBusiness;
use crate::errors::CoffeeTruckError;
use crate::espresso_ratio::EspressoRatio;
use crate::ingredient::Ingredient;
use crate::order::BrewOrder;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum JsonRatio {
    Light,
    Standard,
    Strong,
    Custom(u32),
}

impl From<JsonRatio> for EspressoRatio {
    fn from(ratio: JsonRatio) -> Self {
        match ratio {
            JsonRatio::Light => EspressoRatio::LIGHT,
            JsonRatio::Standard => EspressoRatio::STANDARD,
            JsonRatio::Strong => EspressoRatio::STRONG,
            JsonRatio::Custom(water) => EspressoRatio::custom(water),
        }
    }
}

fn standard_ratio() -> JsonRatio {
    JsonRatio::Standard
}

#[derive(Deserialize, Debug)]
pub struct JsonPrices {
    americano: f64,
    latte: f64,
    cappuccino: f64,
    espresso_shot: f64,
    syrup_pump: f64,
}

#[derive(Deserialize, Debug)]
pub struct JsonTruck {
    location: String,
    #[serde(default)]
    is_special: bool,
    bins: Vec<Ingredient>,
}

#[derive(Deserialize, Debug)]
pub struct JsonExtraShots {
    count: u32,
    #[serde(default = "standard_ratio")]
    ratio: JsonRatio,
}

#[derive(Deserialize, Debug)]
pub struct JsonSyrup {
    syrup: Ingredient,
    pumps: u32,
}

#[derive(Deserialize, Debug)]
pub struct JsonOrder {
    truck_id: usize,
    coffee: CoffeeKind,
    size: CoffeeSize,
    #[serde(default = "standard_ratio")]
    ratio: JsonRatio,
    extra_shots: Option<JsonExtraShots>,
    syrup: Option<JsonSyrup>,
}

#[derive(Deserialize, Debug)]
pub struct Scenario {
    prices: JsonPrices,
    trucks: Vec<JsonTruck>,
    #[serde(default)]
    orders: Vec<JsonOrder>,
}

pub fn read_scenario_from_file<P: AsRef<Path>>(path: P) -> Result<Scenario, CoffeeTruckError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario: Scenario = serde_json::from_reader(reader)?;
    Ok(scenario)
}

/// Carga los precios y los camiones del escenario. Devuelve los pedidos a procesar.
pub fn load_scenario(
    business: &mut CoffeeTruckBusiness,
    scenario: Scenario,
) -> Result<Vec<BrewOrder>, CoffeeTruckError> {
    set_prices(business, &scenario.prices)?;
    for truck in scenario.trucks {
        business.create_truck(&truck.location, truck.is_special, &truck.bins)?;
    }

    let orders: Vec<BrewOrder> = scenario
        .orders
        .into_iter()
        .enumerate()
        .map(|(id, order)| get_order(id, order))
        .collect();
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}

fn set_prices(business: &mut CoffeeTruckBusiness, json_prices: &JsonPrices) -> Result<(), CoffeeTruckError> {
    let prices = business.prices_mut();
    prices.set_coffee_price(CoffeeKind::Americano, json_prices.americano)?;
    prices.set_coffee_price(CoffeeKind::Latte, json_prices.latte)?;
    prices.set_coffee_price(CoffeeKind::Cappuccino, json_prices.cappuccino)?;
    prices.set_espresso_shot_price(json_prices.espresso_shot)?;
    prices.set_syrup_pump_price(json_prices.syrup_pump)?;
    Ok(())
}

fn get_order(id: usize, order: JsonOrder) -> BrewOrder {
    let mut brew_order = BrewOrder::new(id, order.truck_id, order.coffee, order.size, order.ratio.into());
    if let Some(extra_shots) = order.extra_shots {
        brew_order = brew_order.with_extra_shots(extra_shots.count, extra_shots.ratio.into());
    }
    if let Some(syrup) = order.syrup {
        brew_order = brew_order.with_syrup(syrup.syrup, syrup.pumps);
    }
    debug!("[READER] Added order {}", id);
    brew_order
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "prices": { "americano": 100, "latte": 150, "cappuccino": 140, "espresso_shot": 30, "syrup_pump": 10 },
        "trucks": [
            {
                "location": "Taft Avenue",
                "is_special": true,
                "bins": ["small_cup", "medium_cup", "large_cup", "coffee_beans", "milk", "water", "water", "coffee_beans",
                         "almond_syrup", "sweetener"]
            }
        ],
        "orders": [
            { "truck_id": 1, "coffee": "latte", "size": "medium" },
            {
                "truck_id": 1, "coffee": "americano", "size": "large", "ratio": { "custom": 12 },
                "extra_shots": { "count": 2, "ratio": "strong" },
                "syrup": { "syrup": "almond_syrup", "pumps": 3 }
            }
        ]
    }"#;

    #[test]
    fn should_load_a_scenario() {
        let scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let mut business = CoffeeTruckBusiness::new();
        let orders = load_scenario(&mut business, scenario).unwrap();

        assert_eq!(true, business.prices().is_set());
        assert_eq!(1, business.fleet().special_trucks().count());
        assert_eq!(10, business.ledger().storage_bins().len());
        assert_eq!(2, orders.len());
        assert_eq!(EspressoRatio::STANDARD, orders[0].ratio);
        assert_eq!(EspressoRatio::custom(12), orders[1].ratio);
        assert_eq!(2, orders[1].extra_shot_count());
        assert_eq!(EspressoRatio::STRONG, orders[1].extra_shots.unwrap().ratio);
        assert_eq!(3, orders[1].syrup_pumps());
    }

    #[test]
    fn should_fail_on_a_missing_file() {
        let result = read_scenario_from_file("missing-scenario.json");
        assert_eq!(true, matches!(result, Err(CoffeeTruckError::FileReaderError(_))));
    }

    #[test]
    fn should_fail_on_an_unknown_ingredient() {
        let result: Result<Scenario, serde_json::Error> = serde_json::from_str(
            r#"{ "prices": { "americano": 1, "latte": 1, "cappuccino": 1, "espresso_shot": 1, "syrup_pump": 1 },
                 "trucks": [ { "location": "A", "bins": ["caramel"] } ] }"#,
        );
        assert_eq!(true, result.is_err());
    }
}
