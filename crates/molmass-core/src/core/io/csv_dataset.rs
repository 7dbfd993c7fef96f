use super::error::DatasetError;
use super::traits::DatasetFile;
use crate::core::elements::record::ElementRecord;
use std::io::{BufRead, Write};

/// Comma-separated records with a header row naming each field.
pub struct CsvDataset;

impl DatasetFile for CsvDataset {
    type Error = DatasetError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ElementRecord>, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for result in csv_reader.deserialize::<ElementRecord>() {
            records.push(result?);
        }
        Ok(records)
    }

    fn write_to(records: &[ElementRecord], writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
