use crate::{
    coffee::{CoffeeKind, CoffeeSize},
    espresso_ratio::EspressoRatio,
    ingredient::Ingredient,
};

/// Shots de espresso extra que se agregan al cafe, con su propia proporcion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraShots {
    pub count: u32,
    pub ratio: EspressoRatio,
}

/// Bombeos de syrup que se agregan al cafe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyrupAddOn {
    pub syrup: Ingredient,
    pub pumps: u32,
}

/// Pedido de un cafe a un camion
#[derive(Debug, Clone, PartialEq)]
pub struct BrewOrder {
    pub id: usize,
    pub truck_id: usize,
    pub coffee: CoffeeKind,
    pub size: CoffeeSize,
    pub ratio: EspressoRatio,
    pub extra_shots: Option<ExtraShots>,
    pub syrup: Option<SyrupAddOn>,
}

impl BrewOrder {
    pub fn new(
        id: usize,
        truck_id: usize,
        coffee: CoffeeKind,
        size: CoffeeSize,
        ratio: EspressoRatio,
    ) -> BrewOrder {
        BrewOrder {
            id,
            truck_id,
            coffee,
            size,
            ratio,
            extra_shots: None,
            syrup: None,
        }
    }

    pub fn with_extra_shots(mut self, count: u32, ratio: EspressoRatio) -> BrewOrder {
        self.extra_shots = Some(ExtraShots { count, ratio });
        self
    }

    pub fn with_syrup(mut self, syrup: Ingredient, pumps: u32) -> BrewOrder {
        self.syrup = Some(SyrupAddOn { syrup, pumps });
        self
    }

    pub fn extra_shot_count(&self) -> u32 {
        self.extra_shots.map_or(0, |shots| shots.count)
    }

    pub fn syrup_pumps(&self) -> u32 {
        self.syrup.map_or(0, |syrup| syrup.pumps)
    }

    /// Indica si el pedido usa algo que solo tienen los camiones especiales
    pub fn needs_special_truck(&self) -> bool {
        self.ratio != EspressoRatio::STANDARD || self.extra_shot_count() > 0 || self.syrup_pumps() > 0
    }
}
