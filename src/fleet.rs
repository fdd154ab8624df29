//! Camiones del negocio
use log::info;

use crate::{errors::CoffeeTruckError, truck::Truck};

#[derive(Debug, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    pub fn new() -> Fleet {
        Fleet { trucks: Vec::new() }
    }

    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    pub fn special_trucks(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|truck| truck.is_special)
    }

    pub fn truck(&self, id: usize) -> Result<&Truck, CoffeeTruckError> {
        self.trucks
            .iter()
            .find(|truck| truck.id == id)
            .ok_or(CoffeeTruckError::TruckNotFound(id))
    }

    /// La comparacion distingue mayusculas y minusculas
    pub fn is_occupied_location(&self, location: &str) -> bool {
        self.trucks.iter().any(|truck| truck.location() == location)
    }

    pub fn check_location(&self, location: &str) -> Result<(), CoffeeTruckError> {
        if location.is_empty() {
            return Err(CoffeeTruckError::EmptyLocation);
        }
        if self.is_occupied_location(location) {
            return Err(CoffeeTruckError::OccupiedLocation(location.to_string()));
        }
        Ok(())
    }

    /// Crea un camion en una ubicacion libre. Devuelve el id asignado.
    pub fn create_truck(&mut self, location: &str, is_special: bool) -> Result<usize, CoffeeTruckError> {
        self.check_location(location)?;
        let id = self.trucks.len() + 1;
        self.trucks.push(Truck::new(id, location.to_string(), is_special));
        info!("[FLEET] Truck {} deployed at {}", id, location);
        Ok(id)
    }

    pub fn relocate(&mut self, id: usize, location: &str) -> Result<(), CoffeeTruckError> {
        self.truck(id)?;
        self.check_location(location)?;
        if let Some(truck) = self.trucks.iter_mut().find(|truck| truck.id == id) {
            info!(
                "[FLEET] Truck {} relocated from {} to {}",
                id,
                truck.location(),
                location
            );
            truck.set_location(location.to_string());
        }
        Ok(())
    }
}
