//! siusa2table - Convert SIUSA archival registry exports to tables.
//!
//! SIUSA (Sistema Informativo Unificato per le Soprintendenze Archivistiche)
//! publishes its registry as an ICAR import XML document. This crate reads
//! that document, picks the `scons` (conservation body) records and flattens
//! each into a row with a fixed set of eleven columns, ready to be written as
//! a spreadsheet and a CSV file.
//!
//! # Example
//!
//! ```
//! use siusa2table::{extract_table, NamespaceMap};
//!
//! let xml = r#"<icar-import:icar-import
//!     xmlns:icar-import="http://www.san.beniculturali.it/icar-import"
//!     xmlns:scons="http://www.san.beniculturali.it/scons2">
//!   <icar-import:listRecords>
//!     <icar-import:record>
//!       <icar-import:recordHeader type="scons"/>
//!       <icar-import:recordBody>
//!         <scons:scons>
//!           <scons:denominazione>Archivio &amp;amp; Biblioteca</scons:denominazione>
//!           <scons:tipologia>Archivio di Stato</scons:tipologia>
//!           <scons:localizzazioni><scons:localizzazione>
//!             <scons:indirizzo paese="IT" provincia="RM" comune="Roma" cap="00100">Via Roma 1</scons:indirizzo>
//!           </scons:localizzazione></scons:localizzazioni>
//!         </scons:scons>
//!       </icar-import:recordBody>
//!     </icar-import:record>
//!   </icar-import:listRecords>
//! </icar-import:icar-import>"#;
//!
//! let table = extract_table(xml, &NamespaceMap::siusa()).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.rows()[0].denominazione, "Archivio & Biblioteca");
//! assert_eq!(table.rows()[0].contacts.telefono, None);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace map, supported record type and column constants
//! - [`types`]: Rows and the result table
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace-aware XML utilities
//! - [`extract`]: Field extraction for one `scons` record
//! - [`collector`]: Document traversal and record filtering
//! - [`output`]: CSV and XLSX serialization
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod types;
pub mod xml;

// Re-export main functions
pub use collector::{extract_table, extract_table_from_path};
pub use extract::parse_scons;
pub use output::{write_csv, write_outputs, write_xlsx};

// Re-export commonly used items
pub use config::{NamespaceMap, COLUMNS, SUPPORTED_RECORD_TYPE};
pub use error::{Result, Siusa2TableError};
pub use types::{ContactKind, Contacts, ResultTable, SconsRow};
