//! Temperature ladders for replica exchange.

use error::{RemdError, Result};
use quantity::Quantity;
use units::Dimension;

/// Relative tolerance within which two bounds are considered equal.
const EQUAL_BOUNDS_RTOL: f64 = 1e-12;

/// Generate a list of temperatures with logarithmic spacing between two bounds.
///
/// The ladder contains `num_replicas` temperatures from `min_temp` to
/// `max_temp` (inclusive) with a constant ratio between consecutive values.
/// All temperatures are returned in the unit of `min_temp` and the first and
/// last values are exactly the input bounds.
///
/// A single replica is only accepted if both bounds are equal, in which case
/// the list holds only `min_temp`.
///
/// # Errors
/// Returns `DimensionMismatch` if a bound is not a temperature and
/// `InvalidArgument` if `num_replicas` is zero, a bound is not positive,
/// `min_temp > max_temp` or a single replica is requested for a range.
///
/// # Examples
/// ```
/// # use remdkit::quantity::Quantity;
/// # use remdkit::units::Unit;
/// use remdkit::get_temperature_list;
///
/// let min_temp = Quantity::new(200.0, Unit::Kelvin);
/// let max_temp = Quantity::new(400.0, Unit::Kelvin);
///
/// let temps = get_temperature_list(&min_temp, &max_temp, 3).unwrap();
///
/// assert_eq!(3, temps.len());
/// assert_eq!(min_temp, temps[0]);
/// assert!((temps[1].value() - 282.843).abs() < 1e-3);
/// assert_eq!(max_temp, temps[2]);
/// ```
pub fn get_temperature_list(min_temp: &Quantity<f64>,
                            max_temp: &Quantity<f64>,
                            num_replicas: usize)
                            -> Result<Vec<Quantity<f64>>> {
    min_temp.require_dimension(Dimension::Temperature)?;
    max_temp.require_dimension(Dimension::Temperature)?;

    let unit = min_temp.unit();
    let low = min_temp.value();
    let high = max_temp.value_in_unit(unit)?;

    if num_replicas == 0 {
        return Err(RemdError::invalid("the number of replicas must be at least 1"));
    }

    for &(name, value) in [("minimum", low), ("maximum", high)].iter() {
        if !value.is_finite() || value <= 0.0 {
            return Err(RemdError::invalid(
                format!("the {} temperature must be positive and finite, got {} {}", name, value, unit)
            ));
        }
    }

    if low > high {
        return Err(RemdError::invalid(
            format!("the minimum temperature ({} {}) is above the maximum ({} {})", low, unit, high, unit)
        ));
    }

    if num_replicas == 1 {
        return if (high - low) <= EQUAL_BOUNDS_RTOL * high {
            Ok(vec![Quantity::new(low, unit)])
        } else {
            Err(RemdError::invalid(
                "a single replica cannot span a temperature range: set the bounds equal or use more replicas"
            ))
        };
    }

    if low == high {
        return Ok(vec![Quantity::new(low, unit); num_replicas]);
    }

    let (log_low, log_high) = (low.log10(), high.log10());
    let step = (log_high - log_low) / (num_replicas - 1) as f64;
    let last = num_replicas - 1;

    let temperatures = (0..num_replicas)
        .map(|i| {
            let value = if i == 0 {
                low
            } else if i == last {
                high
            } else {
                // Rounding in log10/powf must not push a rung past the bounds
                10.0f64.powf(log_low + step * i as f64).max(low).min(high)
            };

            Quantity::new(value, unit)
        })
        .collect();

    Ok(temperatures)
}
