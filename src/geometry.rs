//! Distances between particles and periodic box vectors.

use coord::{Coord, Direction};
use error::{RemdError, Result};
use quantity::Quantity;
use system::PeriodicSystem;
use units::{Dimension, Unit};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
/// The three edge vectors of a periodic simulation cell.
pub struct BoxVectors {
    pub a: Quantity<Coord>,
    pub b: Quantity<Coord>,
    pub c: Quantity<Coord>,
}

impl BoxVectors {
    /// Axis-aligned vectors of a cube with the input side length.
    pub(crate) fn cubic(side: f64, unit: Unit) -> BoxVectors {
        let edge = |axis| Quantity::new(Coord::along(axis, side), unit);

        BoxVectors {
            a: edge(Direction::X),
            b: edge(Direction::Y),
            c: edge(Direction::Z),
        }
    }

    /// The vectors in order as an array.
    pub fn to_array(&self) -> [Quantity<Coord>; 3] {
        [self.a, self.b, self.c]
    }

    /// Return the vectors with all of them expressed in the input unit.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the unit is not a length.
    pub fn in_unit(&self, unit: Unit) -> Result<BoxVectors> {
        Ok(BoxVectors {
            a: self.a.in_unit(unit)?,
            b: self.b.in_unit(unit)?,
            c: self.c.in_unit(unit)?,
        })
    }

    /// Volume of the cell in cubed units of the vector `a`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the vectors are not all lengths.
    pub fn volume(&self) -> Result<f64> {
        let unit = self.a.unit();
        let (a, b, c) = (self.a.value(), self.b.value_in_unit(unit)?, self.c.value_in_unit(unit)?);

        // Scalar triple product a . (b x c)
        let cross = Coord::new(
            b.y * c.z - b.z * c.y,
            b.z * c.x - b.x * c.z,
            b.x * c.y - b.y * c.x,
        );

        Ok((a.x * cross.x + a.y * cross.y + a.z * cross.z).abs())
    }
}

/// Calculate the distance between two particles from their positions.
///
/// The second position is converted into the unit of the first and the
/// result is returned in that unit.
///
/// # Errors
/// Returns `DimensionMismatch` if the positions are not both lengths.
///
/// # Examples
/// ```
/// # use remdkit::coord::Coord;
/// # use remdkit::quantity::Quantity;
/// # use remdkit::units::Unit;
/// use remdkit::distance;
///
/// let p1 = Quantity::new(Coord::new(0.0, 0.0, 0.0), Unit::Nanometer);
/// let p2 = Quantity::new(Coord::new(3.0, 4.0, 0.0), Unit::Angstrom);
///
/// let dist = distance(&p1, &p2).unwrap();
/// assert_eq!(Unit::Nanometer, dist.unit());
/// assert!((dist.value() - 0.5).abs() < 1e-12);
/// ```
pub fn distance(positions_1: &Quantity<Coord>, positions_2: &Quantity<Coord>) -> Result<Quantity<f64>> {
    positions_1.require_dimension(Dimension::Length)?;

    let unit = positions_1.unit();
    let p1 = positions_1.value();
    let p2 = positions_2.value_in_unit(unit)?;

    Ok(Quantity::new(p1.distance(p2), unit))
}

/// Construct the vectors of a cubic box with the input side length.
///
/// Vector `i` is zero in every component except component `i`, which is set
/// to the box size. The vectors keep the unit of the box size.
///
/// # Errors
/// Returns `DimensionMismatch` if the box size is not a length.
///
/// # Examples
/// ```
/// # use remdkit::coord::Coord;
/// # use remdkit::quantity::Quantity;
/// # use remdkit::units::Unit;
/// use remdkit::get_box_vectors;
///
/// let vectors = get_box_vectors(&Quantity::new(5.0, Unit::Nanometer)).unwrap();
///
/// assert_eq!(Quantity::new(Coord::new(5.0, 0.0, 0.0), Unit::Nanometer), vectors.a);
/// assert_eq!(Quantity::new(Coord::new(0.0, 5.0, 0.0), Unit::Nanometer), vectors.b);
/// assert_eq!(Quantity::new(Coord::new(0.0, 0.0, 5.0), Unit::Nanometer), vectors.c);
/// ```
pub fn get_box_vectors(box_size: &Quantity<f64>) -> Result<BoxVectors> {
    box_size.require_dimension(Dimension::Length)?;

    Ok(BoxVectors::cubic(box_size.value(), box_size.unit()))
}

/// Impose cubic box vectors of the input side length on a simulation system.
///
/// The system is returned to allow chaining.
///
/// # Errors
/// Returns `DimensionMismatch` if the box size is not a length and
/// `ExternalFailure` with the system's own error if it rejects the vectors.
pub fn set_box_vectors<'a, S>(system: &'a mut S, box_size: &Quantity<f64>) -> Result<&'a mut S>
        where S: PeriodicSystem {
    let vectors = get_box_vectors(box_size)?;

    system.set_default_periodic_box_vectors(&vectors.a, &vectors.b, &vectors.c)
        .map_err(|err| RemdError::ExternalFailure(Box::new(err)))?;

    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use system::System;

    use rand;
    use rand::Rng;
    use std::error::Error;
    use std::fmt;

    fn nm(x: f64, y: f64, z: f64) -> Quantity<Coord> {
        Quantity::new(Coord::new(x, y, z), Unit::Nanometer)
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        let p = nm(1.3, -2.7, 0.4);
        let dist = distance(&p, &p).unwrap();

        assert_eq!(0.0, dist.value());
        assert_eq!(Unit::Nanometer, dist.unit());
    }

    #[test]
    fn distance_between_two_points() {
        let p1 = nm(1.0, 1.0, 1.0);
        let p2 = nm(3.0, 3.0, 2.0);

        assert_eq!(Quantity::new(3.0, Unit::Nanometer), distance(&p1, &p2).unwrap());
    }

    #[test]
    fn distance_is_symmetric_for_random_points() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let p1 = nm(rng.gen_range(-10.0, 10.0), rng.gen_range(-10.0, 10.0), rng.gen_range(-10.0, 10.0));
            let p2 = nm(rng.gen_range(-10.0, 10.0), rng.gen_range(-10.0, 10.0), rng.gen_range(-10.0, 10.0));

            assert_eq!(distance(&p1, &p2).unwrap(), distance(&p2, &p1).unwrap());
        }
    }

    #[test]
    fn distance_is_in_the_unit_of_the_first_position() {
        let p1 = Quantity::new(Coord::new(0.0, 0.0, 0.0), Unit::Angstrom);
        let p2 = nm(0.3, 0.4, 0.0);

        let dist = distance(&p1, &p2).unwrap();
        assert_eq!(Unit::Angstrom, dist.unit());
        assert!((dist.value() - 5.0).abs() < 1e-12);

        let dist = distance(&p2, &p1).unwrap();
        assert_eq!(Unit::Nanometer, dist.unit());
        assert!((dist.value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn distance_with_mismatched_dimensions_is_an_error() {
        let length = nm(0.0, 0.0, 0.0);
        let temp = Quantity::new(Coord::new(1.0, 1.0, 1.0), Unit::Kelvin);

        match distance(&length, &temp) {
            Err(RemdError::DimensionMismatch { .. }) => (),
            other => panic!("expected a dimension mismatch, got {:?}", other),
        }

        match distance(&temp, &temp) {
            Err(RemdError::DimensionMismatch { expected: Dimension::Length, .. }) => (),
            other => panic!("expected a dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn box_vectors_are_axis_aligned() {
        let vectors = get_box_vectors(&Quantity::new(5.0, Unit::Nanometer)).unwrap();
        let expected = [nm(5.0, 0.0, 0.0), nm(0.0, 5.0, 0.0), nm(0.0, 0.0, 5.0)];

        assert_eq!(expected, vectors.to_array());
    }

    #[test]
    fn box_vectors_keep_the_unit_of_the_size() {
        let vectors = get_box_vectors(&Quantity::new(12.0, Unit::Angstrom)).unwrap();

        for (i, vector) in vectors.to_array().iter().enumerate() {
            assert_eq!(Unit::Angstrom, vector.unit());

            for (j, &axis) in Direction::ALL.iter().enumerate() {
                let expected = if i == j { 12.0 } else { 0.0 };
                assert_eq!(expected, vector.value()[axis]);
            }
        }
    }

    #[test]
    fn box_vectors_of_zero_size_are_zero() {
        let vectors = get_box_vectors(&Quantity::new(0.0, Unit::Nanometer)).unwrap();

        for vector in vectors.to_array().iter() {
            assert_eq!(Coord::ORIGO, vector.value());
        }
    }

    #[test]
    fn box_vectors_from_a_temperature_is_an_error() {
        assert!(get_box_vectors(&Quantity::new(5.0, Unit::Kelvin)).is_err());
    }

    #[test]
    fn box_vectors_volume_and_conversion() {
        let vectors = get_box_vectors(&Quantity::new(2.0, Unit::Nanometer)).unwrap();
        assert!((vectors.volume().unwrap() - 8.0).abs() < 1e-12);

        let in_angstrom = vectors.in_unit(Unit::Angstrom).unwrap();
        assert_eq!(nm(2.0, 0.0, 0.0).in_unit(Unit::Angstrom).unwrap(), in_angstrom.a);
        assert!((in_angstrom.volume().unwrap() - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn set_box_vectors_can_be_read_back() {
        let mut system = System::new("test");
        let box_size = Quantity::new(3.5, Unit::Nanometer);

        set_box_vectors(&mut system, &box_size).unwrap();

        let expected = get_box_vectors(&box_size).unwrap();
        assert_eq!(expected, system.default_periodic_box_vectors());
    }

    #[test]
    fn set_box_vectors_returns_the_system_for_chaining() {
        let mut system = System::new("test");

        let size = set_box_vectors(&mut system, &Quantity::new(4.0, Unit::Nanometer))
            .map(|system| system.box_size())
            .unwrap();

        assert_eq!(Coord::new(4.0, 4.0, 4.0), size);
    }

    #[derive(Debug)]
    struct Rejected;

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "rejected")
        }
    }

    impl Error for Rejected {}

    struct RejectingSystem;

    impl PeriodicSystem for RejectingSystem {
        type Error = Rejected;

        fn set_default_periodic_box_vectors(&mut self, _: &Quantity<Coord>, _: &Quantity<Coord>, _: &Quantity<Coord>)
                -> ::std::result::Result<(), Rejected> {
            Err(Rejected)
        }
    }

    #[test]
    fn set_box_vectors_propagates_system_errors() {
        let mut system = RejectingSystem;

        match set_box_vectors(&mut system, &Quantity::new(1.0, Unit::Nanometer)) {
            Err(err @ RemdError::ExternalFailure(_)) => {
                assert_eq!("rejected", err.source().unwrap().to_string());
            },
            Err(other) => panic!("expected an external failure, got {:?}", other),
            Ok(_) => panic!("expected an external failure"),
        }
    }

    #[test]
    fn set_box_vectors_with_zero_size_is_rejected_by_the_system() {
        let mut system = System::new("test");
        let before = system.default_periodic_box_vectors();

        match set_box_vectors(&mut system, &Quantity::new(0.0, Unit::Nanometer)) {
            Err(RemdError::ExternalFailure(_)) => (),
            Err(other) => panic!("expected an external failure, got {:?}", other),
            Ok(_) => panic!("expected an external failure"),
        }

        assert_eq!(before, system.default_periodic_box_vectors());
    }
}
