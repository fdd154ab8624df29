pub mod brewer;
pub mod coffee;
pub mod coffee_truck_business;
pub mod constants;
pub mod errors;
pub mod espresso_ratio;
pub mod feasibility;
pub mod fleet;
pub mod ingredient;
pub mod ingredient_usage;
pub mod order;
pub mod orders_generator;
pub mod orders_reader;
pub mod pricing;
pub mod recipe;
pub mod restocker;
pub mod statistics;
pub mod storage_bin;
pub mod storage_bin_ledger;
pub mod transactions;
pub mod truck;
