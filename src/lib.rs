//! Helpers for setting up and analysing replica-exchange molecular dynamics:
//! particle distances, periodic box vectors and temperature ladders.
//!
//! All values carry their unit of measure as a `Quantity`.
//!
//! # Examples
//! ```
//! use remdkit::{get_temperature_list, set_box_vectors};
//! use remdkit::quantity::Quantity;
//! use remdkit::system::System;
//! use remdkit::units::Unit;
//!
//! let mut system = System::new("peptide");
//! set_box_vectors(&mut system, &Quantity::new(5.0, Unit::Nanometer)).unwrap();
//!
//! let temps = get_temperature_list(
//!     &Quantity::new(300.0, Unit::Kelvin), &Quantity::new(450.0, Unit::Kelvin), 8
//! ).unwrap();
//! assert_eq!(8, temps.len());
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_json;
#[cfg(test)]
extern crate rand;

pub mod coord;
pub mod error;
pub mod geometry;
pub mod quantity;
pub mod system;
pub mod temperature;
pub mod units;

pub use error::{RemdError, Result};
pub use geometry::{distance, get_box_vectors, set_box_vectors, BoxVectors};
pub use temperature::get_temperature_list;
