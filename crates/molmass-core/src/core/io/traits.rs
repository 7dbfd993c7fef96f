use crate::core::elements::record::ElementRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing an element dataset format.
///
/// Implementors handle format-specific parsing and serialization; the path-based
/// helpers take care of opening files with buffering.
pub trait DatasetFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads the full record sequence from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid record sequence for this format.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ElementRecord>, Self::Error>;

    /// Writes the record sequence, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(records: &[ElementRecord], writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ElementRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Creates (or truncates) the file at `path` and writes the records to it.
    fn write_to_path<P: AsRef<Path>>(
        records: &[ElementRecord],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
