//! Whole-document traversal: filter records by type and collect rows.

use std::fs;
use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::config::{NamespaceMap, SUPPORTED_RECORD_TYPE};
use crate::error::Result;
use crate::extract::parse_scons;
use crate::types::{ResultTable, SconsRow};
use crate::xml::{find_children, require_attribute, require_child};

/// Parse a SIUSA export and build the result table.
///
/// Records whose header `type` is not [`SUPPORTED_RECORD_TYPE`] are skipped.
/// The first malformed record of the supported type aborts the run.
///
/// # Arguments
/// * `xml` - Full XML document
/// * `namespaces` - Map used to resolve every qualified lookup
///
/// # Returns
/// One row per matching record, in document order
///
/// # Examples
/// ```
/// use siusa2table::{extract_table, NamespaceMap};
///
/// let xml = r#"<icar-import:icar-import xmlns:icar-import="http://www.san.beniculturali.it/icar-import">
///     <icar-import:listRecords/>
/// </icar-import:icar-import>"#;
/// let table = extract_table(xml, &NamespaceMap::siusa()).unwrap();
/// assert!(table.is_empty());
/// ```
pub fn extract_table(xml: &str, namespaces: &NamespaceMap) -> Result<ResultTable> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let list_records = require_child(doc.root_element(), namespaces, "icar-import:listRecords")?;

    let mut rows: Vec<SconsRow> = Vec::new();
    let mut skipped = 0usize;

    for record in find_children(list_records, namespaces, "icar-import:record")? {
        let header = require_child(record, namespaces, "icar-import:recordHeader")?;
        let record_type = require_attribute(header, "type")?;

        if record_type != SUPPORTED_RECORD_TYPE {
            tracing::debug!(record_type, "Skipping record of unsupported type");
            skipped += 1;
            continue;
        }

        let body = require_child(record, namespaces, "icar-import:recordBody")?;
        let scons = require_child(body, namespaces, "scons:scons")?;
        rows.push(parse_scons(scons, namespaces)?);
    }

    tracing::info!(rows = rows.len(), skipped, "Extracted result table");
    Ok(ResultTable::from(rows))
}

/// Read a SIUSA export from disk and build the result table.
pub fn extract_table_from_path(path: &Path, namespaces: &NamespaceMap) -> Result<ResultTable> {
    let xml = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Read input document");
    extract_table(&xml, namespaces)
}
