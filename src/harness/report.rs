use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::ProfileRow;
use crate::cs::randomized::Algorithm;
use crate::error::{Error, Result};

/// Writes profile rows as CSV: the item length, then the best time in
/// microseconds of each algorithm.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReport<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("writing profile to {}", path.display());
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvReport<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        let mut header = vec!["len"];
        header.extend(Algorithm::ALL.iter().map(|a| a.name()));
        self.writer.write_record(&header)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &ProfileRow) -> Result<()> {
        let mut record = vec![row.item_len.to_string()];
        record.extend(row.timings.iter().map(|t| t.best_micros().to_string()));
        self.writer.write_record(&record)?;
        Ok(())
    }

    /// Header followed by every row.
    pub fn write_profile(&mut self, rows: &[ProfileRow]) -> Result<()> {
        self.write_header()?;
        for row in rows {
            self.write_row(row)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}
