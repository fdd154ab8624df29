use crate::constants::{SPECIAL_TRUCK_BINS, STANDARD_TRUCK_BINS};

/// Camion de cafe. El `id` empieza en 1 y la ubicacion es unica entre todos los camiones.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub id: usize,
    pub is_special: bool,
    location: String,
}

impl Truck {
    pub fn new(id: usize, location: String, is_special: bool) -> Truck {
        Truck { id, is_special, location }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub(crate) fn set_location(&mut self, location: String) {
        self.location = location;
    }
}

pub fn storage_bin_count(is_special: bool) -> usize {
    if is_special {
        SPECIAL_TRUCK_BINS
    } else {
        STANDARD_TRUCK_BINS
    }
}
