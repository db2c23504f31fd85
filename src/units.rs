//! Units of measure and the physical dimensions they belong to.
//!
//! Every unit is a pure scale factor relative to the base unit of its
//! dimension: nanometers for lengths and kelvin for temperatures. Affine
//! temperature scales (Celsius, Fahrenheit) are not representable, since
//! temperature ladders take logarithms of the bare values.

use error::{RemdError, Result};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
/// Physical dimension of a quantity.
pub enum Dimension {
    Length,
    Temperature,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Dimension::Length => write!(f, "length"),
            Dimension::Temperature => write!(f, "temperature"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
/// Supported units of measure.
pub enum Unit {
    Meter,
    Micrometer,
    Nanometer,
    Angstrom,
    Picometer,
    Kelvin,
    Millikelvin,
}

impl Unit {
    /// The dimension which the unit measures.
    pub fn dimension(self) -> Dimension {
        use self::Unit::*;

        match self {
            Meter | Micrometer | Nanometer | Angstrom | Picometer => Dimension::Length,
            Kelvin | Millikelvin => Dimension::Temperature,
        }
    }

    /// Size of the unit expressed in the base unit of its dimension.
    fn base_factor(self) -> f64 {
        use self::Unit::*;

        match self {
            Meter => 1e9,
            Micrometer => 1e3,
            Nanometer => 1.0,
            Angstrom => 0.1,
            Picometer => 1e-3,
            Kelvin => 1.0,
            Millikelvin => 1e-3,
        }
    }

    /// The factor which converts a value in this unit into the target unit.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the units measure different dimensions.
    ///
    /// # Examples
    /// ```
    /// # use remdkit::units::Unit;
    /// let factor = Unit::Nanometer.conversion_factor(Unit::Angstrom).unwrap();
    /// assert_eq!(10.0, factor);
    ///
    /// assert!(Unit::Nanometer.conversion_factor(Unit::Kelvin).is_err());
    /// ```
    pub fn conversion_factor(self, target: Unit) -> Result<f64> {
        if self.dimension() != target.dimension() {
            return Err(RemdError::DimensionMismatch {
                expected: target.dimension(),
                found: self.dimension(),
            });
        }

        if self == target {
            Ok(1.0)
        } else {
            Ok(self.base_factor() / target.base_factor())
        }
    }

    /// The short symbol of the unit.
    pub fn symbol(self) -> &'static str {
        use self::Unit::*;

        match self {
            Meter => "m",
            Micrometer => "um",
            Nanometer => "nm",
            Angstrom => "Å",
            Picometer => "pm",
            Kelvin => "K",
            Millikelvin => "mK",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = RemdError;

    /// Parse a unit from its symbol or name.
    ///
    /// # Examples
    /// ```
    /// # use remdkit::units::Unit;
    /// # use std::str::FromStr;
    /// assert_eq!(Unit::Angstrom, Unit::from_str("Å").unwrap());
    /// assert_eq!(Unit::Angstrom, Unit::from_str("angstrom").unwrap());
    /// assert_eq!(Unit::Kelvin, Unit::from_str("K").unwrap());
    /// assert!(Unit::from_str("C").is_err());
    /// ```
    fn from_str(input: &str) -> Result<Unit> {
        use self::Unit::*;

        // Symbols are case sensitive ("m" vs "mK"), names are not.
        match input.trim() {
            "m" => return Ok(Meter),
            "um" | "µm" | "μm" => return Ok(Micrometer),
            "nm" => return Ok(Nanometer),
            "A" | "Å" => return Ok(Angstrom),
            "pm" => return Ok(Picometer),
            "K" => return Ok(Kelvin),
            "mK" => return Ok(Millikelvin),
            _ => (),
        }

        match input.trim().to_lowercase().as_str() {
            "meter" | "meters" => Ok(Meter),
            "micrometer" | "micrometers" => Ok(Micrometer),
            "nanometer" | "nanometers" => Ok(Nanometer),
            "angstrom" | "angstroms" => Ok(Angstrom),
            "picometer" | "picometers" => Ok(Picometer),
            "kelvin" => Ok(Kelvin),
            "millikelvin" => Ok(Millikelvin),
            _ => Err(RemdError::Parse(format!("'{}' is not a supported unit", input.trim()))),
        }
    }
}
