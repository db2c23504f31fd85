//! Numeric values tagged with a unit of measure.
//!
//! A `Quantity` pairs a magnitude with a `Unit`. The magnitude is either a
//! scalar (`f64`) or a carthesian vector (`Coord`). Values are converted
//! between units of the same dimension on request; any attempt to mix
//! dimensions returns a `DimensionMismatch` error.
//!
//! # Examples
//! ```
//! use remdkit::coord::Coord;
//! use remdkit::quantity::Quantity;
//! use remdkit::units::Unit;
//!
//! let position = Quantity::new(Coord::new(1.0, 0.0, 0.0), Unit::Nanometer);
//! let in_angstrom = position.in_unit(Unit::Angstrom).unwrap();
//!
//! assert_eq!(Coord::new(10.0, 0.0, 0.0), in_angstrom.value());
//! assert!(position.in_unit(Unit::Kelvin).is_err());
//! ```

use coord::Coord;
use error::{RemdError, Result};
use units::{Dimension, Unit};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Mul, Neg};
use std::str::FromStr;

/// Magnitudes which can be scaled when converting between units.
pub trait Magnitude: Copy {
    fn scaled(self, factor: f64) -> Self;
}

impl Magnitude for f64 {
    fn scaled(self, factor: f64) -> f64 {
        self * factor
    }
}

impl Magnitude for Coord {
    fn scaled(self, factor: f64) -> Coord {
        self.scale(factor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
/// A magnitude with a unit.
///
/// Equality compares the magnitude and unit as they are stored: `1 nm` is
/// not equal to `10 Å`. Convert one side with `in_unit` to compare across
/// units.
pub struct Quantity<T> {
    value: T,
    unit: Unit,
}

impl<T: Magnitude> Quantity<T> {
    /// Construct a quantity from a magnitude and unit.
    pub fn new(value: T, unit: Unit) -> Quantity<T> {
        Quantity { value, unit }
    }

    /// The bare magnitude, in the quantity's own unit.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// The bare magnitude converted into the target unit.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the target unit has another dimension.
    pub fn value_in_unit(&self, unit: Unit) -> Result<T> {
        let factor = self.unit.conversion_factor(unit)?;

        if factor == 1.0 {
            Ok(self.value)
        } else {
            Ok(self.value.scaled(factor))
        }
    }

    /// Return the quantity expressed in the target unit.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the target unit has another dimension.
    pub fn in_unit(&self, unit: Unit) -> Result<Quantity<T>> {
        self.value_in_unit(unit).map(|value| Quantity::new(value, unit))
    }

    /// Assert that the quantity measures the input dimension.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` otherwise.
    pub fn require_dimension(&self, dimension: Dimension) -> Result<()> {
        if self.dimension() == dimension {
            Ok(())
        } else {
            Err(RemdError::DimensionMismatch { expected: dimension, found: self.dimension() })
        }
    }
}

impl Quantity<Coord> {
    /// Euclidean length of the vector, in the same unit.
    pub fn norm(&self) -> Quantity<f64> {
        Quantity::new(self.value.norm(), self.unit)
    }

    /// Subtract another vector quantity, converting it into this quantity's unit.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the two quantities have different dimensions.
    pub fn checked_sub(&self, other: &Quantity<Coord>) -> Result<Quantity<Coord>> {
        let other = other.value_in_unit(self.unit)?;
        Ok(Quantity::new(self.value - other, self.unit))
    }
}

impl<T: Magnitude> Mul<f64> for Quantity<T> {
    type Output = Quantity<T>;

    fn mul(self, factor: f64) -> Quantity<T> {
        Quantity::new(self.value.scaled(factor), self.unit)
    }
}

impl<T: Magnitude> Neg for Quantity<T> {
    type Output = Quantity<T>;

    fn neg(self) -> Quantity<T> {
        self * -1.0
    }
}

impl<T: Magnitude + Display> Display for Quantity<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

/// Split an input like "300K" or "5.0 nm" into its number and unit.
fn split_number_and_unit(input: &str) -> Result<(&str, &str)> {
    let input = input.trim();
    let mut prev: Option<char> = None;

    // The unit starts at the first character that cannot be part of a number.
    // An 'e' or 'E' directly followed by a digit or sign is an exponent.
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut split_at = input.len();

    for (i, &(pos, c)) in chars.iter().enumerate() {
        let is_number_char = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+') && (prev.is_none() || prev == Some('e') || prev == Some('E')))
            || ((c == 'e' || c == 'E') && i > 0 && chars.get(i + 1)
                .map(|&(_, next)| next.is_ascii_digit() || next == '-' || next == '+')
                .unwrap_or(false));

        if !is_number_char {
            split_at = pos;
            break;
        }

        prev = Some(c);
    }

    let (number, unit) = input.split_at(split_at);
    let (number, unit) = (number.trim(), unit.trim());

    if number.is_empty() {
        return Err(RemdError::Parse(format!("no value found in '{}'", input)));
    }

    if unit.is_empty() {
        return Err(RemdError::Parse(format!("no unit found in '{}'", input)));
    }

    Ok((number, unit))
}

impl FromStr for Quantity<f64> {
    type Err = RemdError;

    /// Parse a scalar quantity such as "300 K", "300K" or "2.5nm".
    ///
    /// # Examples
    /// ```
    /// # use remdkit::quantity::Quantity;
    /// # use remdkit::units::Unit;
    /// # use std::str::FromStr;
    /// let temp = Quantity::<f64>::from_str("300K").unwrap();
    /// assert_eq!(Quantity::new(300.0, Unit::Kelvin), temp);
    ///
    /// assert!(Quantity::<f64>::from_str("300").is_err());
    /// ```
    fn from_str(input: &str) -> Result<Quantity<f64>> {
        let (number, unit) = split_number_and_unit(input)?;

        let value = number.parse::<f64>()
            .map_err(|err| RemdError::Parse(format!("'{}' is not a number: {}", number, err)))?;
        let unit = Unit::from_str(unit)?;

        Ok(Quantity::new(value, unit))
    }
}

impl FromStr for Quantity<Coord> {
    type Err = RemdError;

    /// Parse a vector quantity from three values followed by a unit,
    /// such as "1.0 2.0 3.0 nm".
    ///
    /// # Examples
    /// ```
    /// # use remdkit::coord::Coord;
    /// # use remdkit::quantity::Quantity;
    /// # use remdkit::units::Unit;
    /// # use std::str::FromStr;
    /// let position = Quantity::<Coord>::from_str("1 2 3 Å").unwrap();
    /// assert_eq!(Quantity::new(Coord::new(1.0, 2.0, 3.0), Unit::Angstrom), position);
    /// ```
    fn from_str(input: &str) -> Result<Quantity<Coord>> {
        let input = input.trim();

        let (values, unit) = input
            .rfind(|c: char| c.is_whitespace())
            .map(|i| input.split_at(i))
            .ok_or_else(|| RemdError::Parse(format!("no unit found in '{}'", input)))?;

        let value = Coord::from_str(values)?;
        let unit = Unit::from_str(unit)?;

        Ok(Quantity::new(value, unit))
    }
}
