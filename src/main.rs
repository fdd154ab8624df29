use std::env;

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_trucks::{
    coffee::CoffeeKind,
    coffee_truck_business::CoffeeTruckBusiness,
    constants::RANDOM_ORDERS,
    errors::CoffeeTruckError,
    ingredient::Ingredient,
    order::BrewOrder,
    orders_generator::random_orders,
    orders_reader::{load_scenario, read_scenario_from_file},
    statistics::Statistics,
};

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", e);
    }

    if let Err(e) = run() {
        error!("[MAIN] {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CoffeeTruckError> {
    let mut business = CoffeeTruckBusiness::new();
    let orders = match env::args().nth(1) {
        Some(path) => {
            info!("[MAIN] Reading scenario from {}", path);
            load_scenario(&mut business, read_scenario_from_file(path)?)?
        }
        None => {
            info!("[MAIN] No scenario given, generating {} random orders", RANDOM_ORDERS);
            default_orders(&mut business)?
        }
    };

    business.process_orders(&orders);
    Statistics::collect(&business).log_statistics();
    Ok(())
}

fn default_orders(business: &mut CoffeeTruckBusiness) -> Result<Vec<BrewOrder>, CoffeeTruckError> {
    let regular = [
        Ingredient::SmallCup,
        Ingredient::MediumCup,
        Ingredient::LargeCup,
        Ingredient::CoffeeBeans,
        Ingredient::Milk,
        Ingredient::Water,
        Ingredient::Milk,
        Ingredient::CoffeeBeans,
    ];
    let mut special = regular.to_vec();
    special.push(Ingredient::HazelnutSyrup);
    special.push(Ingredient::ChocolateSyrup);

    business.create_truck("Taft Avenue", false, &regular)?;
    business.create_truck("Ayala Avenue", true, &special)?;

    let prices = business.prices_mut();
    prices.set_coffee_price(CoffeeKind::Americano, 120.0)?;
    prices.set_coffee_price(CoffeeKind::Latte, 150.0)?;
    prices.set_coffee_price(CoffeeKind::Cappuccino, 140.0)?;
    prices.set_espresso_shot_price(35.0)?;
    prices.set_syrup_pump_price(15.0)?;

    Ok(random_orders(business, RANDOM_ORDERS, &mut rand::thread_rng()))
}
