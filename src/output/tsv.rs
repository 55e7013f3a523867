use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{errors::Result, forecast::Report};

const DELIMITER: u8 = b'\t';

/// Writes the report as tab separated values, one record per line.
pub fn write_report<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(report.header())?;
    for row in report.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
