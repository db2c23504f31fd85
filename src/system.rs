//! Simulation systems which accept periodic box vectors.
//!
//! The `PeriodicSystem` trait is the only part of a simulation engine that
//! the box helpers depend on. `System` is a small implementation of it which
//! follows the conventions of common molecular dynamics engines: box vectors
//! are stored in nanometers, default to a 2 nm cube and have to be in reduced
//! form to be accepted.

use coord::{Coord, Direction};
use geometry::BoxVectors;
use quantity::Quantity;
use units::{Dimension, Unit};

use std::error;
use std::fmt;
use std::result;

/// An object which owns a set of default periodic box vectors.
pub trait PeriodicSystem {
    /// Error returned when the system rejects a set of box vectors.
    type Error: error::Error + Send + Sync + 'static;

    /// Replace the default periodic box vectors of the system.
    fn set_default_periodic_box_vectors(&mut self,
                                        a: &Quantity<Coord>,
                                        b: &Quantity<Coord>,
                                        c: &Quantity<Coord>)
                                        -> result::Result<(), Self::Error>;
}

/// Side length of the default cubic box (nm).
pub const DEFAULT_BOX_SIZE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Reasons for a `System` to reject box vectors.
pub enum BoxError {
    /// A vector was not given in units of length.
    NotLength(Unit),
    /// A vector component is not a finite number.
    NonFinite,
    /// The diagonal element along this axis is zero or negative.
    NonPositive(Direction),
    /// The vectors are not in reduced form.
    NotReducedForm,
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BoxError::NotLength(unit) => {
                write!(f, "box vectors must be lengths, not '{}'", unit)
            },
            BoxError::NonFinite => write!(f, "box vectors must be finite"),
            BoxError::NonPositive(axis) => {
                write!(f, "box vector component along {} must be positive", axis)
            },
            BoxError::NotReducedForm => write!(f, "box vectors must be in reduced form"),
        }
    }
}

impl error::Error for BoxError {}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// A minimal simulation system: a set of particles in a periodic box.
pub struct System {
    /// Title of system.
    pub title: String,
    /// Particle masses (Da).
    masses: Vec<f64>,
    /// Default periodic box vectors, stored in nm.
    box_vectors: BoxVectors,
}

impl System {
    /// Construct an empty system in the default cubic box.
    pub fn new(title: &str) -> System {
        System {
            title: title.to_string(),
            masses: Vec::new(),
            box_vectors: BoxVectors::cubic(DEFAULT_BOX_SIZE, Unit::Nanometer),
        }
    }

    /// Add a particle of input mass (Da) and return its index.
    pub fn add_particle(&mut self, mass: f64) -> usize {
        self.masses.push(mass);
        self.masses.len() - 1
    }

    pub fn num_particles(&self) -> usize {
        self.masses.len()
    }

    /// The current default periodic box vectors (nm).
    pub fn default_periodic_box_vectors(&self) -> BoxVectors {
        self.box_vectors
    }

    /// The diagonal of the box (nm).
    pub fn box_size(&self) -> Coord {
        Coord::new(self.box_vectors.a.value().x,
                   self.box_vectors.b.value().y,
                   self.box_vectors.c.value().z)
    }
}

impl PeriodicSystem for System {
    type Error = BoxError;

    fn set_default_periodic_box_vectors(&mut self,
                                        a: &Quantity<Coord>,
                                        b: &Quantity<Coord>,
                                        c: &Quantity<Coord>)
                                        -> result::Result<(), BoxError> {
        let vectors = BoxVectors {
            a: to_nanometers(a)?,
            b: to_nanometers(b)?,
            c: to_nanometers(c)?,
        };

        if let Err(err) = check_reduced_form(&vectors) {
            warn!("system '{}' rejected box vectors: {}", self.title, err);
            return Err(err);
        }

        debug!("system '{}' box vectors set to {}, {}, {}",
               self.title, vectors.a, vectors.b, vectors.c);
        self.box_vectors = vectors;

        Ok(())
    }
}

fn to_nanometers(vector: &Quantity<Coord>) -> result::Result<Quantity<Coord>, BoxError> {
    if vector.dimension() != Dimension::Length {
        return Err(BoxError::NotLength(vector.unit()));
    }

    vector.in_unit(Unit::Nanometer).map_err(|_| BoxError::NotLength(vector.unit()))
}

/// Assert that box vectors are in reduced form, that is
/// a = (ax, 0, 0), b = (bx, by, 0) and c = (cx, cy, cz) with positive
/// diagonal elements and ax >= 2|bx|, ax >= 2|cx| and by >= 2|cy|.
fn check_reduced_form(vectors: &BoxVectors) -> result::Result<(), BoxError> {
    let (a, b, c) = (vectors.a.value(), vectors.b.value(), vectors.c.value());

    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(BoxError::NonFinite);
    }

    for &(axis, value) in [(Direction::X, a.x), (Direction::Y, b.y), (Direction::Z, c.z)].iter() {
        if value <= 0.0 {
            return Err(BoxError::NonPositive(axis));
        }
    }

    if a.y != 0.0 || a.z != 0.0 || b.z != 0.0 {
        return Err(BoxError::NotReducedForm);
    }

    if a.x < 2.0 * b.x.abs() || a.x < 2.0 * c.x.abs() || b.y < 2.0 * c.y.abs() {
        return Err(BoxError::NotReducedForm);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::get_box_vectors;

    fn nm(x: f64, y: f64, z: f64) -> Quantity<Coord> {
        Quantity::new(Coord::new(x, y, z), Unit::Nanometer)
    }

    #[test]
    fn new_system_has_the_default_box() {
        let system = System::new("empty");

        assert_eq!(Coord::new(2.0, 2.0, 2.0), system.box_size());

        let cube = get_box_vectors(&Quantity::new(DEFAULT_BOX_SIZE, Unit::Nanometer)).unwrap();
        assert_eq!(cube, system.default_periodic_box_vectors());
        assert_eq!(nm(2.0, 0.0, 0.0), system.default_periodic_box_vectors().a);
        assert_eq!(0, system.num_particles());
    }

    #[test]
    fn add_particles_to_system() {
        let mut system = System::new("particles");

        assert_eq!(0, system.add_particle(12.011));
        assert_eq!(1, system.add_particle(1.008));
        assert_eq!(2, system.num_particles());
    }

    #[test]
    fn set_triclinic_box_in_reduced_form() {
        let mut system = System::new("triclinic");
        let (a, b, c) = (nm(3.0, 0.0, 0.0), nm(1.0, 3.0, 0.0), nm(-1.5, 1.0, 3.0));

        system.set_default_periodic_box_vectors(&a, &b, &c).unwrap();

        let vectors = system.default_periodic_box_vectors();
        assert_eq!([a, b, c], vectors.to_array());
        assert_eq!(Coord::new(3.0, 3.0, 3.0), system.box_size());
    }

    #[test]
    fn box_vectors_are_stored_in_nanometers() {
        let mut system = System::new("angstrom");
        let to_angstrom = |v: Quantity<Coord>| v.in_unit(Unit::Angstrom).unwrap();

        system.set_default_periodic_box_vectors(
            &to_angstrom(nm(4.0, 0.0, 0.0)),
            &to_angstrom(nm(0.0, 5.0, 0.0)),
            &to_angstrom(nm(0.0, 0.0, 6.0))
        ).unwrap();

        let vectors = system.default_periodic_box_vectors();
        assert_eq!(Unit::Nanometer, vectors.b.unit());
        assert_eq!(Coord::new(4.0, 5.0, 6.0), system.box_size());
    }

    #[test]
    fn non_positive_diagonal_is_rejected() {
        let mut system = System::new("bad");

        let err = system.set_default_periodic_box_vectors(
            &nm(1.0, 0.0, 0.0), &nm(0.0, 0.0, 0.0), &nm(0.0, 0.0, 1.0)
        ).unwrap_err();

        assert_eq!(BoxError::NonPositive(Direction::Y), err);
    }

    #[test]
    fn vectors_not_in_reduced_form_are_rejected() {
        let mut system = System::new("bad");

        // a must lie along x
        assert_eq!(
            Err(BoxError::NotReducedForm),
            system.set_default_periodic_box_vectors(&nm(1.0, 0.1, 0.0), &nm(0.0, 1.0, 0.0), &nm(0.0, 0.0, 1.0))
        );

        // b is tilted too far along x
        assert_eq!(
            Err(BoxError::NotReducedForm),
            system.set_default_periodic_box_vectors(&nm(1.0, 0.0, 0.0), &nm(0.6, 1.0, 0.0), &nm(0.0, 0.0, 1.0))
        );

        // c is tilted too far along y
        assert_eq!(
            Err(BoxError::NotReducedForm),
            system.set_default_periodic_box_vectors(&nm(1.0, 0.0, 0.0), &nm(0.0, 1.0, 0.0), &nm(0.0, 0.6, 1.0))
        );
    }

    #[test]
    fn temperature_vectors_are_rejected() {
        let mut system = System::new("bad");
        let kelvin = Quantity::new(Coord::new(1.0, 0.0, 0.0), Unit::Kelvin);

        assert_eq!(
            Err(BoxError::NotLength(Unit::Kelvin)),
            system.set_default_periodic_box_vectors(&kelvin, &nm(0.0, 1.0, 0.0), &nm(0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn non_finite_vectors_are_rejected() {
        let mut system = System::new("bad");
        let nan = nm(::std::f64::NAN, 0.0, 0.0);

        assert_eq!(
            Err(BoxError::NonFinite),
            system.set_default_periodic_box_vectors(&nan, &nm(0.0, 1.0, 0.0), &nm(0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn rejected_vectors_leave_the_box_unchanged() {
        let mut system = System::new("bad");
        let before = system.default_periodic_box_vectors();

        assert!(system.set_default_periodic_box_vectors(
            &nm(-1.0, 0.0, 0.0), &nm(0.0, 1.0, 0.0), &nm(0.0, 0.0, 1.0)
        ).is_err());

        assert_eq!(before, system.default_periodic_box_vectors());
    }

    #[test]
    fn system_serializes_to_json() {
        let mut system = System::new("json");
        system.add_particle(39.948);

        let json = ::serde_json::to_string(&system).unwrap();
        let parsed: System = ::serde_json::from_str(&json).unwrap();

        assert_eq!("json", parsed.title);
        assert_eq!(1, parsed.num_particles());
        assert_eq!(system.default_periodic_box_vectors(), parsed.default_periodic_box_vectors());
    }
}
