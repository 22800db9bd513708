//! Consumers written against a trait behave the same for every
//! implementation handed to them.

pub mod area;
pub mod freight;
pub mod zoo;

pub use area::{area_line, print_area};
pub use freight::{total_cost, Ship, Truck, Vehicle};
pub use zoo::{Animal, Cat, Dog, Zoo};
