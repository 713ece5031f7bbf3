//! CSV writer.
//!
//! Layout: a leading index column with an empty header, then the eleven
//! table columns. Null cells are written as empty fields.

use std::io;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::write_atomic;
use crate::error::Result;
use crate::types::ResultTable;

/// Render the table as CSV text.
pub fn to_csv_string(table: &ResultTable) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .from_writer(&mut buffer);

        let header = std::iter::once("").chain(table.columns().iter().copied());
        writer.write_record(header)?;

        for (index, row) in table.iter() {
            let index = index.to_string();
            let values = row.values().map(|value| value.unwrap_or_default());
            writer.write_record(std::iter::once(index.as_str()).chain(values))?;
        }
        writer.flush()?;
    }

    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the table as a CSV file.
pub fn write_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let content = to_csv_string(table)?;
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Contacts, SconsRow};
    use pretty_assertions::assert_eq;

    fn row(name: &str, telefono: Option<&str>) -> SconsRow {
        SconsRow {
            denominazione: name.to_string(),
            tipologia: Some("Archivio di Stato".to_string()),
            paese: "IT".to_string(),
            provincia: "RM".to_string(),
            comune: "Roma".to_string(),
            cap: "00100".to_string(),
            via: Some("Via Roma 1".to_string()),
            contacts: Contacts {
                telefono: telefono.map(String::from),
                ..Contacts::default()
            },
        }
    }

    #[test]
    fn test_empty_table_header_only() {
        let csv = to_csv_string(&ResultTable::default()).unwrap();
        assert_eq!(
            csv,
            ",denominazione,tipologia,paese,provincia,comune,cap,via,telefono,fax,sitoweb,mail\n"
        );
    }

    #[test]
    fn test_rows_indexed_and_nulls_empty() {
        let table = ResultTable::from(vec![
            row("Archivio & Biblioteca", Some("0612345")),
            row("Archivio comunale", None),
        ]);
        let csv = to_csv_string(&table).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "0,Archivio & Biblioteca,Archivio di Stato,IT,RM,Roma,00100,Via Roma 1,0612345,,,"
        );
        assert_eq!(
            lines[2],
            "1,Archivio comunale,Archivio di Stato,IT,RM,Roma,00100,Via Roma 1,,,,"
        );
    }

    #[test]
    fn test_fields_with_commas_quoted() {
        let table = ResultTable::from(vec![row("Archivio, sezione \"B\"", None)]);
        let csv = to_csv_string(&table).unwrap();
        assert!(csv.contains("0,\"Archivio, sezione \"\"B\"\"\",Archivio di Stato"));
    }
}
