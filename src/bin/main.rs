//! Distances, periodic box vectors and temperature ladders for
//! replica-exchange molecular dynamics.
//!
//! # Usage
//! ```text
//! USAGE:
//!     remdkit <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     box             Construct the vectors of a cubic periodic box
//!     distance        Calculate the distance between two positions
//!     temperatures    Generate a logarithmically spaced temperature ladder
//! ```
//!
//! Quantities are given as a value followed by a unit, eg. `300K` or
//! `'5.0 nm'`. Positions are three values followed by a unit: `'1 2 3 Å'`.

extern crate colored;
#[macro_use]
extern crate log;
extern crate remdkit;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate structopt;

mod config;
mod error;
mod output;

use config::Command;
use structopt::StructOpt;

use std::io;
use std::io::Write;
use std::process;

fn main() {
    let command = Command::from_args();

    if let Err(err) = command.run() {
        let mut stderr = io::stderr();
        writeln!(&mut stderr, "{}", err).expect("could not write to stderr");
        process::exit(1);
    }
}
