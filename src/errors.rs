use std::fmt;

use crate::ingredient::Ingredient;

#[derive(Debug, PartialEq)]
pub enum CoffeeTruckError {
    InsufficientCapacity(Ingredient),
    OccupiedLocation(String),
    EmptyLocation,
    TruckNotFound(usize),
    StorageBinNotFound(usize, usize),
    InvalidBinLayout(usize),
    IngredientNotAllowedInBin(usize, Ingredient),
    SameIngredient(Ingredient),
    StorageBinFull(usize),
    StorageBinEmpty(usize),
    NotAnAddOn(Ingredient),
    AddOnNotStocked(usize, Ingredient),
    SpecialTruckRequired(usize),
    UnsetEspressoRatio,
    PricesNotSet,
    NegativePrice,
    InvalidAmount,
    FileReaderError(String),
}

impl fmt::Display for CoffeeTruckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeTruckError::InsufficientCapacity(ingredient) => write!(
                f,
                "The selected truck does not have enough {} to brew the coffee",
                ingredient
            ),
            CoffeeTruckError::OccupiedLocation(location) => {
                write!(f, "A truck already exists on {}", location)
            }
            CoffeeTruckError::EmptyLocation => write!(f, "A location must be specified"),
            CoffeeTruckError::TruckNotFound(id) => write!(f, "There is no truck with ID {}", id),
            CoffeeTruckError::StorageBinNotFound(truck_id, bin_id) => {
                write!(f, "Truck {} has no storage bin {}", truck_id, bin_id)
            }
            CoffeeTruckError::InvalidBinLayout(count) => {
                write!(f, "A truck cannot have {} storage bins", count)
            }
            CoffeeTruckError::IngredientNotAllowedInBin(bin_id, ingredient) => {
                write!(f, "Storage bin {} cannot contain {}", bin_id, ingredient)
            }
            CoffeeTruckError::SameIngredient(ingredient) => {
                write!(f, "The storage bin already contains {}", ingredient)
            }
            CoffeeTruckError::StorageBinFull(bin_id) => {
                write!(f, "Storage bin {} is already full", bin_id)
            }
            CoffeeTruckError::StorageBinEmpty(bin_id) => {
                write!(f, "Storage bin {} is already empty", bin_id)
            }
            CoffeeTruckError::NotAnAddOn(ingredient) => {
                write!(f, "{} cannot be added to a coffee", ingredient)
            }
            CoffeeTruckError::AddOnNotStocked(truck_id, ingredient) => {
                write!(f, "Truck {} does not carry {}", truck_id, ingredient)
            }
            CoffeeTruckError::SpecialTruckRequired(truck_id) => {
                write!(f, "Truck {} is not a special truck", truck_id)
            }
            CoffeeTruckError::UnsetEspressoRatio => write!(f, "The custom espresso ratio is not set"),
            CoffeeTruckError::PricesNotSet => write!(f, "The prices have not been set"),
            CoffeeTruckError::NegativePrice => write!(f, "A price cannot be negative"),
            CoffeeTruckError::InvalidAmount => write!(f, "The amount must be a valid positive number"),
            CoffeeTruckError::FileReaderError(reason) => {
                write!(f, "Error while reading the scenario: {}", reason)
            }
        }
    }
}

impl std::error::Error for CoffeeTruckError {}

impl From<std::io::Error> for CoffeeTruckError {
    fn from(error: std::io::Error) -> Self {
        CoffeeTruckError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for CoffeeTruckError {
    fn from(error: serde_json::Error) -> Self {
        CoffeeTruckError::FileReaderError(error.to_string())
    }
}
