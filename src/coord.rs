//! Implement elementary coordinate operations.

use error::RemdError;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, Mul, Neg, Sub};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
/// A three-dimensional carthesian coordinate. The coordinate itself carries
/// no unit, see `Quantity` for that.
///
/// # Examples
/// ```
/// # use remdkit::coord::Coord;
/// let coord1 = Coord::new(1.0, 0.0, 1.0);
/// let coord2 = Coord::new(0.5, 0.5, 0.5);
///
/// assert_eq!(Coord::new(1.5, 0.5, 1.5), coord1 + coord2);
/// assert_eq!(Coord::new(0.5, -0.5, 0.5), coord1 - coord2);
/// ```
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    /// A coordinate at origo.
    pub const ORIGO: Self = Coord { x: 0.0, y: 0.0, z: 0.0 };

    /// Construct a new coordinate.
    pub fn new(x: f64, y: f64, z: f64) -> Coord {
        Coord { x, y, z }
    }

    /// Construct a coordinate which is zero everywhere except along the input axis.
    ///
    /// # Examples
    /// ```
    /// # use remdkit::coord::{Coord, Direction};
    /// assert_eq!(Coord::new(0.0, 2.5, 0.0), Coord::along(Direction::Y, 2.5));
    /// ```
    pub fn along(axis: Direction, value: f64) -> Coord {
        let mut coord = Coord::ORIGO;

        match axis {
            Direction::X => coord.x = value,
            Direction::Y => coord.y = value,
            Direction::Z => coord.z = value,
        }

        coord
    }

    /// Euclidean length of the coordinate as seen from origo.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Calculate the absolute distance between two coordinates.
    ///
    /// # Examples
    /// ```
    /// # use remdkit::coord::Coord;
    /// let coord1 = Coord::new(0.0, 1.0, 4.0);
    /// let coord2 = Coord::new(4.0, 4.0, 4.0);
    /// assert!((coord1.distance(coord2) - 5.0).abs() < 1e-9);
    /// ```
    pub fn distance(self, other: Coord) -> f64 {
        (self - other).norm()
    }

    /// Return the coordinate with every component multiplied by a factor.
    pub fn scale(self, factor: f64) -> Coord {
        self * factor
    }

    /// Whether all components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Coord {
    fn default() -> Coord {
        Coord::ORIGO
    }
}

impl Display for Coord {
    /// Components are written with 3 decimals unless another precision is given.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

impl FromStr for Coord {
    type Err = RemdError;

    /// Parse an input string slice for a coordinate.
    ///
    /// # Errors
    /// Raises an error if exactly three floating point values could not be parsed.
    ///
    /// # Examples
    /// ```
    /// # use remdkit::coord::Coord;
    /// # use std::str::FromStr;
    /// assert_eq!(Coord::new(0.1, 1.0, -2.0), Coord::from_str("0.1 1.0 -2.0").unwrap());
    /// assert!(Coord::from_str("0.1 1.1").is_err());
    /// assert!(Coord::from_str("a0.1 1.1 2.1").is_err());
    /// ```
    fn from_str(input: &str) -> Result<Coord, Self::Err> {
        let values = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>()
                    .map_err(|err| RemdError::Parse(format!("'{}' is not a number: {}", s, err)))
            })
            .collect::<Result<Vec<f64>, RemdError>>()?;

        match values.as_slice() {
            &[x, y, z] => Ok(Coord { x, y, z }),
            _ => Err(RemdError::Parse(
                format!("expected three values for a coordinate, found {}", values.len())
            )),
        }
    }
}

impl Index<Direction> for Coord {
    type Output = f64;

    fn index(&self, axis: Direction) -> &f64 {
        match axis {
            Direction::X => &self.x,
            Direction::Y => &self.y,
            Direction::Z => &self.z,
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Self::Output {
        Coord::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Self::Output {
        Coord::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Self::Output {
        Coord { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;

    fn mul(self, value: f64) -> Coord {
        Coord::new(self.x * value, self.y * value, self.z * value)
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Coord) -> bool {
        let atol = 1e-9;
        (self.x - other.x).abs() < atol
            && (self.y - other.y).abs() < atol
            && (self.z - other.z).abs() < atol
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
/// Carthesian axis.
pub enum Direction { X, Y, Z }

impl Direction {
    /// All axes in order.
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Direction::X => write!(f, "X"),
            Direction::Y => write!(f, "Y"),
            Direction::Z => write!(f, "Z"),
        }
    }
}
