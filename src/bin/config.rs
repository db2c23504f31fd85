//! Configure and run the program.

use error::Result;
use output;

use remdkit::coord::Coord;
use remdkit::quantity::Quantity;
use remdkit::system::System;
use remdkit::{distance, get_temperature_list, set_box_vectors};

use std::io;

#[derive(Debug, StructOpt)]
#[structopt(name = "remdkit")]
/// Distances, periodic box vectors and temperature ladders for
/// replica-exchange molecular dynamics.
pub enum Command {
    #[structopt(name = "temperatures")]
    /// Generate a logarithmically spaced temperature ladder
    Temperatures {
        /// Lowest temperature, eg. '300K'
        min_temp: Quantity<f64>,
        /// Highest temperature, eg. '450K'
        max_temp: Quantity<f64>,
        /// Number of replicas
        num_replicas: usize,
        #[structopt(short = "j", long = "json")]
        /// Write the ladder as JSON
        json: bool,
    },

    #[structopt(name = "box")]
    /// Construct the vectors of a cubic periodic box
    PeriodicBox {
        /// Side length of the box, eg. '5nm'
        size: Quantity<f64>,
        #[structopt(short = "t", long = "title", default_value = "System")]
        /// Title of system
        title: String,
        #[structopt(short = "j", long = "json")]
        /// Write the complete system as JSON
        json: bool,
    },

    #[structopt(name = "distance",
                raw(setting = "::structopt::clap::AppSettings::AllowLeadingHyphen"))]
    /// Calculate the distance between two positions
    Distance {
        #[structopt(raw(allow_hyphen_values = "true"))]
        /// First position, eg. '0 0 0 nm'
        positions_1: Quantity<Coord>,
        #[structopt(raw(allow_hyphen_values = "true"))]
        /// Second position, eg. '-1 1 1 nm'
        positions_2: Quantity<Coord>,
    },
}

impl Command {
    /// Run the command and write its result to stdout.
    ///
    /// # Errors
    /// Returns an error if the values could not be computed or written.
    pub fn run(self) -> Result<()> {
        debug!("running {:?}", self);

        let stdout = io::stdout();
        let mut writer = stdout.lock();

        match self {
            Command::Temperatures { min_temp, max_temp, num_replicas, json } => {
                let temps = get_temperature_list(&min_temp, &max_temp, num_replicas)?;
                output::write_temperatures(&mut writer, &temps, json)
            },
            Command::PeriodicBox { size, title, json } => {
                let mut system = System::new(&title);
                set_box_vectors(&mut system, &size)?;
                output::write_box(&mut writer, &system, json)
            },
            Command::Distance { positions_1, positions_2 } => {
                let dist = distance(&positions_1, &positions_2)?;
                output::write_distance(&mut writer, &dist)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remdkit::units::Unit;
    use structopt::StructOpt;

    #[test]
    fn distance_accepts_positions_with_a_leading_minus() {
        let command = Command::from_iter_safe(&["remdkit", "distance", "-1 0 0 nm", "0 -2.5 0 nm"])
            .unwrap();

        match command {
            Command::Distance { positions_1, positions_2 } => {
                assert_eq!(Quantity::new(Coord::new(-1.0, 0.0, 0.0), Unit::Nanometer), positions_1);
                assert_eq!(Quantity::new(Coord::new(0.0, -2.5, 0.0), Unit::Nanometer), positions_2);
            },
            other => panic!("expected the distance command, got {:?}", other),
        }
    }

    #[test]
    fn distance_still_rejects_invalid_positions() {
        assert!(Command::from_iter_safe(&["remdkit", "distance", "-1 0 nm", "0 0 0 nm"]).is_err());
    }

    #[test]
    fn temperatures_are_parsed_with_units() {
        let command = Command::from_iter_safe(&["remdkit", "temperatures", "300K", "450K", "8", "--json"])
            .unwrap();

        match command {
            Command::Temperatures { min_temp, max_temp, num_replicas, json } => {
                assert_eq!(Quantity::new(300.0, Unit::Kelvin), min_temp);
                assert_eq!(Quantity::new(450.0, Unit::Kelvin), max_temp);
                assert_eq!(8, num_replicas);
                assert!(json);
            },
            other => panic!("expected the temperatures command, got {:?}", other),
        }
    }
}
