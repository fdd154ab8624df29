//! Parametros de configuracion de los camiones de cafe

/// Cantidad de contenedores que tiene un camion estandar
pub const STANDARD_TRUCK_BINS: usize = 8;

/// Cantidad de contenedores que tiene un camion especial.
/// Los contenedores por encima de `STANDARD_TRUCK_BINS` solo pueden tener agregados (syrups)
pub const SPECIAL_TRUCK_BINS: usize = 10;

/// Gramos que hay en una onza liquida
pub const FLUID_OUNCES_TO_GRAMS: f64 = 28.34952;

/// Volumen (en onzas liquidas) de cada bombeo de syrup
pub const SYRUP_PUMP_FL_OZ: f64 = 0.5;

/// Modificador del precio segun el tamaño. El vaso chico es 10% mas barato y el grande 10% mas caro
pub const PRICE_SIZE_MODIFIER: f64 = 0.1;

/// Fraccion de la capacidad maxima por debajo de la cual un contenedor esta en estado critico
pub const CRITICAL_CAPACITY_FRACTION: f64 = 1.0 / 3.0;

/// Cantidad de vasos que usa un cafe
pub const CUPS_PER_COFFEE: f64 = 1.0;

/// Cantidad de pedidos aleatorios que se generan si no se indica un archivo de escenario
pub const RANDOM_ORDERS: usize = 20;
