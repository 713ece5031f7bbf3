//! Error types for the converter.
//!
//! Parse failures and structural mismatches abort the whole run. Skipped
//! record types and absent contact entries are not errors and never show up
//! here.

use thiserror::Error;

/// Main error type for the siusa2table library.
#[derive(Debug, Error)]
pub enum Siusa2TableError {
    /// Input is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Missing required attribute on an element.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    /// Required element is present but carries no text.
    #[error("Element <{element}> has no text content")]
    MissingText { element: String },

    /// Qualified name uses a prefix the namespace map does not declare.
    #[error("Unknown namespace prefix: '{0}'")]
    UnknownPrefix(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet serialization error.
    #[error("XLSX serialization failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl Siusa2TableError {
    /// Build a missing-element error for a qualified name under `context`.
    pub fn missing_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Whether the input parsed but does not have the expected shape.
    #[must_use]
    pub fn is_structural_mismatch(&self) -> bool {
        matches!(
            self,
            Self::MissingElement { .. } | Self::MissingAttribute { .. } | Self::MissingText { .. }
        )
    }
}

/// Result type alias for siusa2table operations.
pub type Result<T> = std::result::Result<T, Siusa2TableError>;
