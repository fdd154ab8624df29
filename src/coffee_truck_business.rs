//! Negocio de camiones de cafe: une camiones, contenedores, precios y ventas
use log::{debug, info, warn};

use crate::{
    brewer::Brewer,
    coffee::CoffeeKind,
    errors::CoffeeTruckError,
    feasibility,
    fleet::Fleet,
    ingredient::Ingredient,
    order::BrewOrder,
    pricing::PriceList,
    restocker,
    storage_bin_ledger::StorageBinLedger,
    transactions::{Transaction, TransactionLog},
    truck::Truck,
};

#[derive(Debug, Default)]
pub struct CoffeeTruckBusiness {
    fleet: Fleet,
    ledger: StorageBinLedger,
    prices: PriceList,
    transactions: TransactionLog,
}

impl CoffeeTruckBusiness {
    pub fn new() -> CoffeeTruckBusiness {
        CoffeeTruckBusiness::default()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ledger(&self) -> &StorageBinLedger {
        &self.ledger
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    pub fn prices_mut(&mut self) -> &mut PriceList {
        &mut self.prices
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    /// Crea un camion con los ingredientes de cada contenedor, en orden.
    /// Si la ubicacion esta ocupada o los ingredientes no son validos no se crea nada.
    pub fn create_truck(
        &mut self,
        location: &str,
        is_special: bool,
        bins: &[Ingredient],
    ) -> Result<usize, CoffeeTruckError> {
        self.fleet.check_location(location)?;
        StorageBinLedger::check_layout(is_special, bins)?;
        let truck_id = self.fleet.create_truck(location, is_special)?;
        self.ledger.assign_storage_bins(truck_id, is_special, bins)?;
        Ok(truck_id)
    }

    pub fn relocate_truck(&mut self, truck_id: usize, location: &str) -> Result<(), CoffeeTruckError> {
        self.fleet.relocate(truck_id, location)
    }

    pub fn restock_bin(&mut self, truck_id: usize, bin_id: usize, amount: f64) -> Result<f64, CoffeeTruckError> {
        self.fleet.truck(truck_id)?;
        restocker::restock(&mut self.ledger, truck_id, bin_id, amount)
    }

    pub fn empty_bin(&mut self, truck_id: usize, bin_id: usize) -> Result<f64, CoffeeTruckError> {
        self.fleet.truck(truck_id)?;
        restocker::empty(&mut self.ledger, truck_id, bin_id)
    }

    pub fn change_bin_ingredient(
        &mut self,
        truck_id: usize,
        bin_id: usize,
        ingredient: Ingredient,
    ) -> Result<(), CoffeeTruckError> {
        self.fleet.truck(truck_id)?;
        restocker::change_ingredient(&mut self.ledger, truck_id, bin_id, ingredient)
    }

    pub fn brewable_coffees(&self, truck_id: usize) -> Result<Vec<CoffeeKind>, CoffeeTruckError> {
        self.fleet.truck(truck_id)?;
        Ok(feasibility::brewable_coffees(&self.ledger, truck_id))
    }

    /// Prepara el pedido, lo cobra y registra la venta.
    /// Si algo falla no se descuenta ningun ingrediente ni se registra nada.
    pub fn prepare_coffee(&mut self, order: &BrewOrder) -> Result<Transaction, CoffeeTruckError> {
        let truck = self.fleet.truck(order.truck_id)?;
        self.check_order_for_truck(truck, order)?;
        let cost = self.prices.order_cost(order)?;

        let ingredients = Brewer::new(order.truck_id, &mut self.ledger).brew_order(order)?;
        let transaction = Transaction {
            coffee_name: order.coffee.to_string(),
            size: order.size,
            cost,
            truck_id: order.truck_id,
            extra_shot_count: order.extra_shot_count(),
            ingredients,
        };
        self.transactions.record(transaction.clone());
        info!(
            "[TRUCK {}] Served order {}: {} {} for {:.2} PHP",
            order.truck_id, order.id, order.size, order.coffee, cost
        );
        Ok(transaction)
    }

    fn check_order_for_truck(&self, truck: &Truck, order: &BrewOrder) -> Result<(), CoffeeTruckError> {
        if !self.prices.is_set() {
            return Err(CoffeeTruckError::PricesNotSet);
        }
        if order.needs_special_truck() && !truck.is_special {
            return Err(CoffeeTruckError::SpecialTruckRequired(truck.id));
        }
        if let Some(add_on) = order.syrup {
            if !add_on.syrup.is_add_on() {
                return Err(CoffeeTruckError::NotAnAddOn(add_on.syrup));
            }
            if !self.ledger.truck_has_ingredients(truck.id, &[add_on.syrup]) {
                return Err(CoffeeTruckError::AddOnNotStocked(truck.id, add_on.syrup));
            }
        }
        Ok(())
    }

    /// Procesa los pedidos en orden. Los que no se pueden preparar se saltean.
    /// Devuelve la cantidad de pedidos servidos.
    pub fn process_orders(&mut self, orders: &[BrewOrder]) -> usize {
        let mut served = 0;
        for order in orders {
            match self.prepare_coffee(order) {
                Ok(_) => served += 1,
                Err(CoffeeTruckError::InsufficientCapacity(ingredient)) => {
                    info!(
                        "[TRUCK {}] Skipped order {}, not enough {}",
                        order.truck_id, order.id, ingredient
                    );
                }
                Err(e) => warn!("[TRUCK {}] Skipped order {}: {}", order.truck_id, order.id, e),
            }
        }
        debug!("[BUSINESS] Served {} of {} orders", served, orders.len());
        served
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coffee::CoffeeSize,
        espresso_ratio::EspressoRatio,
        storage_bin_ledger::tests::{special_layout, standard_layout},
    };

    fn business() -> CoffeeTruckBusiness {
        let mut business = CoffeeTruckBusiness::new();
        business.create_truck("Taft Avenue", false, &standard_layout()).unwrap();
        business.create_truck("Ayala Avenue", true, &special_layout()).unwrap();
        let prices = business.prices_mut();
        prices.set_coffee_price(CoffeeKind::Americano, 100.0).unwrap();
        prices.set_coffee_price(CoffeeKind::Latte, 150.0).unwrap();
        prices.set_coffee_price(CoffeeKind::Cappuccino, 140.0).unwrap();
        prices.set_espresso_shot_price(30.0).unwrap();
        prices.set_syrup_pump_price(10.0).unwrap();
        business
    }

    #[test]
    fn should_not_create_anything_with_an_invalid_layout() {
        let mut business = CoffeeTruckBusiness::new();
        assert_eq!(
            Err(CoffeeTruckError::InvalidBinLayout(8)),
            business.create_truck("Taft Avenue", true, &standard_layout())
        );
        assert_eq!(0, business.fleet().trucks().len());
        assert_eq!(0, business.ledger().storage_bins().len());
    }

    #[test]
    fn should_not_create_a_truck_on_an_occupied_location() {
        let mut business = business();
        assert_eq!(
            Err(CoffeeTruckError::OccupiedLocation("Taft Avenue".to_string())),
            business.create_truck("Taft Avenue", false, &standard_layout())
        );
        assert_eq!(2, business.fleet().trucks().len());
        assert_eq!(18, business.ledger().storage_bins().len());
    }

    #[test]
    fn should_record_a_transaction_for_a_served_order() {
        let mut business = business();
        let order = BrewOrder::new(1, 2, CoffeeKind::Latte, CoffeeSize::Large, EspressoRatio::STRONG)
            .with_extra_shots(1, EspressoRatio::STANDARD)
            .with_syrup(Ingredient::HazelnutSyrup, 2);
        let transaction = business.prepare_coffee(&order).unwrap();
        assert_eq!("Latte", transaction.coffee_name);
        assert_eq!(1, transaction.extra_shot_count);
        assert_eq!(true, (transaction.cost - (165.0 + 30.0 + 20.0)).abs() < 1e-9);
        assert_eq!(true, business.transactions().has_transactions(2));
        assert_eq!(false, business.transactions().has_transactions(1));
    }

    #[test]
    fn should_not_brew_before_setting_prices() {
        let mut business = CoffeeTruckBusiness::new();
        business.create_truck("Taft Avenue", false, &standard_layout()).unwrap();
        let order = BrewOrder::new(1, 1, CoffeeKind::Latte, CoffeeSize::Large, EspressoRatio::STANDARD);
        assert_eq!(Err(CoffeeTruckError::PricesNotSet), business.prepare_coffee(&order));
        assert_eq!(40.0, business.ledger().total_capacity(1, Ingredient::LargeCup));
    }

    #[test]
    fn should_reject_add_ons_on_a_regular_truck() {
        let mut business = business();
        let order = BrewOrder::new(1, 1, CoffeeKind::Latte, CoffeeSize::Large, EspressoRatio::STANDARD)
            .with_extra_shots(1, EspressoRatio::STANDARD);
        assert_eq!(
            Err(CoffeeTruckError::SpecialTruckRequired(1)),
            business.prepare_coffee(&order)
        );
        assert_eq!(true, business.transactions().is_empty());
    }

    #[test]
    fn should_reject_a_syrup_the_truck_does_not_carry() {
        let mut business = business();
        let order = BrewOrder::new(1, 2, CoffeeKind::Latte, CoffeeSize::Small, EspressoRatio::STANDARD)
            .with_syrup(Ingredient::AlmondSyrup, 1);
        assert_eq!(
            Err(CoffeeTruckError::AddOnNotStocked(2, Ingredient::AlmondSyrup)),
            business.prepare_coffee(&order)
        );
        assert_eq!(80.0, business.ledger().total_capacity(2, Ingredient::SmallCup));
        assert_eq!(true, business.transactions().is_empty());
    }

    #[test]
    fn should_brew_whenever_the_check_passes_after_restocking_cups() {
        let mut business = business();
        business.empty_bin(1, 1).unwrap();
        assert_eq!(Err(CoffeeTruckError::InvalidAmount), business.restock_bin(1, 1, 0.5));
        assert_eq!(
            Err(CoffeeTruckError::InsufficientCapacity(Ingredient::SmallCup)),
            feasibility::check_coffee(
                business.ledger(),
                1,
                CoffeeKind::Latte,
                CoffeeSize::Small,
                &EspressoRatio::STANDARD
            )
        );
        assert_eq!(Ok(1.0), business.restock_bin(1, 1, 1.0));
        assert_eq!(
            Ok(()),
            feasibility::check_coffee(
                business.ledger(),
                1,
                CoffeeKind::Latte,
                CoffeeSize::Small,
                &EspressoRatio::STANDARD
            )
        );
        let order = BrewOrder::new(1, 1, CoffeeKind::Latte, CoffeeSize::Small, EspressoRatio::STANDARD);
        assert_eq!(true, business.prepare_coffee(&order).is_ok());
        assert_eq!(0.0, business.ledger().total_capacity(1, Ingredient::SmallCup));
    }

    #[test]
    fn should_skip_orders_that_cannot_be_brewed() {
        let mut business = business();
        business.empty_bin(1, 5).unwrap();
        let orders = vec![
            BrewOrder::new(1, 1, CoffeeKind::Latte, CoffeeSize::Small, EspressoRatio::STANDARD),
            BrewOrder::new(2, 1, CoffeeKind::Americano, CoffeeSize::Small, EspressoRatio::STANDARD),
            BrewOrder::new(3, 7, CoffeeKind::Americano, CoffeeSize::Small, EspressoRatio::STANDARD),
        ];
        assert_eq!(1, business.process_orders(&orders));
        assert_eq!(1, business.transactions().len());
    }

    #[test]
    fn should_manage_the_bins_of_a_truck() {
        let mut business = business();
        assert_eq!(Ok(80.0), business.empty_bin(1, 1));
        assert_eq!(Ok(80.0), business.restock_bin(1, 1, 100.0));
        assert_eq!(Ok(()), business.change_bin_ingredient(1, 5, Ingredient::Water));
        assert_eq!(vec![CoffeeKind::Americano], business.brewable_coffees(1).unwrap());
        assert_eq!(Err(CoffeeTruckError::TruckNotFound(3)), business.empty_bin(3, 1));
    }

    #[test]
    fn should_relocate_a_truck() {
        let mut business = business();
        assert_eq!(Ok(()), business.relocate_truck(1, "Katipunan"));
        assert_eq!("Katipunan", business.fleet().truck(1).unwrap().location());
    }
}
