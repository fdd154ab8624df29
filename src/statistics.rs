use log::{info, warn};
use serde::Serialize;

use crate::{coffee_truck_business::CoffeeTruckBusiness, ingredient::Ingredient};

#[derive(Debug, Serialize)]
pub struct TruckStatistics {
    pub truck_id: usize,
    pub location: String,
    pub transactions: usize,
    pub sales: f64,
    pub critical_bins: Vec<usize>,
}

/// Resumen del estado de todos los camiones
#[derive(Debug, Serialize)]
pub struct Statistics {
    pub trucks: usize,
    pub special_trucks: usize,
    pub ingredients: Vec<(Ingredient, f64)>,
    pub transactions: usize,
    pub total_sales: f64,
    pub by_truck: Vec<TruckStatistics>,
}

impl Statistics {
    pub fn collect(business: &CoffeeTruckBusiness) -> Statistics {
        let fleet = business.fleet();
        let ledger = business.ledger();
        let transactions = business.transactions();

        let by_truck = fleet
            .trucks()
            .iter()
            .map(|truck| TruckStatistics {
                truck_id: truck.id,
                location: truck.location().to_string(),
                transactions: transactions.transactions_by_truck(truck.id).count(),
                sales: transactions.total_sales_by_truck(truck.id),
                critical_bins: ledger.critical_storage_bins(truck.id).map(|bin| bin.id).collect(),
            })
            .collect();

        Statistics {
            trucks: fleet.trucks().len(),
            special_trucks: fleet.special_trucks().count(),
            ingredients: ledger.ingredient_capacities(),
            transactions: transactions.len(),
            total_sales: transactions.total_sales(),
            by_truck,
        }
    }

    pub fn log_statistics(&self) {
        let mut statistics = format!(
            "[STATISTICS] Trucks={} | Special trucks={} | Transactions={} | Sales={:.2} PHP | Ingredient=remaining |",
            self.trucks, self.special_trucks, self.transactions, self.total_sales
        );
        for (ingredient, amount) in self.ingredients.iter() {
            statistics.push_str(&format!(" {}=({:.2} {}) ", ingredient, amount, ingredient.unit()));
        }
        info!("{}", statistics);

        for truck in self.by_truck.iter() {
            info!(
                "[STATISTICS] Truck {} at {} | Transactions={} | Sales={:.2} PHP",
                truck.truck_id, truck.location, truck.transactions, truck.sales
            );
            if !truck.critical_bins.is_empty() {
                warn!(
                    "[STATISTICS] Truck {} is running low on storage bins {:?}",
                    truck.truck_id, truck.critical_bins
                );
            }
        }
    }
}
