use super::error::DatasetError;
use super::traits::DatasetFile;
use crate::core::elements::record::ElementRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufRead, Write};

const INDENT: &[u8] = b"    ";

/// JSON array of record objects, indented by four spaces.
pub struct JsonDataset;

impl DatasetFile for JsonDataset {
    type Error = DatasetError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ElementRecord>, Self::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_to(records: &[ElementRecord], writer: &mut impl Write) -> Result<(), Self::Error> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut *writer, formatter);
        records.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
