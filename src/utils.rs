//! Utility routines for storing channels into files.
use csv::WriterBuilder;
use ndarray::prelude::*;
use std::error::Error;
use std::io;

/// Writes a channel matrix as CSV into `writer`.
///
/// The header holds the labels of the columns; each following line
/// holds one row of the channel.
pub fn write_channel<W: io::Write>(writer: W, labels: &[String],
                                   channel: &ArrayView2<f64>)
        -> Result<(), Box<dyn Error>> {
    if labels.len() != channel.ncols() {
        return Err(format!("{} labels for {} columns", labels.len(),
                           channel.ncols()).into());
    }

    let mut writer = WriterBuilder::new()
                                   .has_headers(false)
                                   .from_writer(writer);
    writer.write_record(labels)?;
    for row in channel.outer_iter() {
        writer.write_record(row.iter().map(|p| p.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a channel matrix as CSV into the file `fname`.
pub fn save_channel(fname: &str, labels: &[String], channel: &ArrayView2<f64>)
        -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(fname)?;
    write_channel(file, labels, channel)
}
