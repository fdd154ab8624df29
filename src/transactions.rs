//! Registro de las ventas de los camiones
use serde::Serialize;

use crate::{coffee::CoffeeSize, ingredient_usage::IngredientUsage};

/// Venta de un cafe. No se modifica una vez creada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub coffee_name: String,
    pub size: CoffeeSize,
    pub cost: f64,
    pub truck_id: usize,
    pub extra_shot_count: u32,
    pub ingredients: IngredientUsage,
}

/// Lista de ventas en el orden en el que se hicieron. Solo se pueden agregar.
#[derive(Debug, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> TransactionLog {
        TransactionLog { transactions: Vec::new() }
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_by_truck(&self, truck_id: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.truck_id == truck_id)
    }

    pub fn has_transactions(&self, truck_id: usize) -> bool {
        self.transactions_by_truck(truck_id).count() > 0
    }

    pub fn total_sales(&self) -> f64 {
        self.transactions.iter().map(|t| t.cost).sum()
    }

    pub fn total_sales_by_truck(&self, truck_id: usize) -> f64 {
        self.transactions_by_truck(truck_id).map(|t| t.cost).sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
