//! Write results to an output stream.

use error::Result;

use remdkit::quantity::Quantity;
use remdkit::system::System;
use serde_json;

use std::io::Write;

#[derive(Serialize)]
/// A single rung of a temperature ladder.
struct Replica {
    index: usize,
    temperature: Quantity<f64>,
}

/// Write a temperature ladder, one replica per line or as a JSON array.
pub fn write_temperatures<W: Write>(writer: &mut W, temps: &[Quantity<f64>], json: bool) -> Result<()> {
    if json {
        let replicas = temps.iter()
            .enumerate()
            .map(|(index, &temperature)| Replica { index, temperature })
            .collect::<Vec<_>>();

        serde_json::to_writer_pretty(&mut *writer, &replicas)?;
        writeln!(writer, "")?;
    } else {
        writeln!(writer, "{:>7} {:>12}", "replica", "temperature")?;

        for (i, temp) in temps.iter().enumerate() {
            writeln!(writer, "{:>7} {:>12.3} {}", i, temp.value(), temp.unit())?;
        }
    }

    Ok(())
}

/// Write the box vectors of a system, or the full system as JSON.
pub fn write_box<W: Write>(writer: &mut W, system: &System, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, system)?;
        writeln!(writer, "")?;
    } else {
        let vectors = system.default_periodic_box_vectors();

        writeln!(writer, "Box vectors of '{}':", system.title)?;
        for (name, vector) in ["a", "b", "c"].iter().zip(vectors.to_array().iter()) {
            writeln!(writer, "  {} = {}", name, vector)?;
        }

        let volume = vectors.volume()?;
        writeln!(writer, "  volume = {:.3} {}^3", volume, vectors.a.unit())?;
    }

    Ok(())
}

/// Write a single distance.
pub fn write_distance<W: Write>(writer: &mut W, distance: &Quantity<f64>) -> Result<()> {
    writeln!(writer, "{:.6}", distance)?;
    Ok(())
}
