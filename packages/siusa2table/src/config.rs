//! Configuration constants and the namespace map for SIUSA exports.

use std::collections::BTreeMap;

use crate::error::{Result, Siusa2TableError};

/// Record header type whose bodies are converted to rows; records of any
/// other type are skipped.
pub const SUPPORTED_RECORD_TYPE: &str = "scons";

/// Column names of the result table, in output order.
pub const COLUMNS: [&str; 11] = [
    "denominazione",
    "tipologia",
    "paese",
    "provincia",
    "comune",
    "cap",
    "via",
    "telefono",
    "fax",
    "sitoweb",
    "mail",
];

/// Namespaces declared by SIUSA/ICAR import documents.
///
/// Only `icar-import` and `scons` are dereferenced during extraction; the
/// rest are kept so qualified names from any part of the export resolve.
pub const SIUSA_NAMESPACES: [(&str, &str); 10] = [
    ("icar-import", "http://www.san.beniculturali.it/icar-import"),
    ("xlink", "http://www.w3.org/1999/xlink"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("mets", "http://www.loc.gov/METS/"),
    ("metsrights", "http://cosimo.stanford.edu/sdr/metsrights/"),
    ("mix", "http://www.loc.gov/mix/v20"),
    ("xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("ead", "http://ead3.archivists.org/schema/"),
    ("eac", "urn:isbn:1-931666-33-4"),
    ("scons", "http://www.san.beniculturali.it/scons2"),
];

/// Immutable mapping from short prefix to namespace URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: BTreeMap<String, String>,
}

impl NamespaceMap {
    /// Build a map from `(prefix, uri)` pairs.
    pub fn from_pairs<I, P, U>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(prefix, uri)| (prefix.into(), uri.into()))
                .collect(),
        }
    }

    /// The namespace set of SIUSA exports.
    #[must_use]
    pub fn siusa() -> Self {
        Self::from_pairs(SIUSA_NAMESPACES)
    }

    /// Look up the URI bound to `prefix`.
    ///
    /// # Examples
    /// ```
    /// use siusa2table::config::NamespaceMap;
    ///
    /// let ns = NamespaceMap::siusa();
    /// assert_eq!(ns.uri("scons").unwrap(), "http://www.san.beniculturali.it/scons2");
    /// assert!(ns.uri("nope").is_err());
    /// ```
    pub fn uri(&self, prefix: &str) -> Result<&str> {
        self.entries
            .get(prefix)
            .map(String::as_str)
            .ok_or_else(|| Siusa2TableError::UnknownPrefix(prefix.to_string()))
    }

    /// Resolve a qualified name (`prefix:local` or bare `local`) to a
    /// `(namespace, local)` pair. Bare names have no namespace.
    pub fn resolve<'a>(&'a self, qname: &'a str) -> Result<(Option<&'a str>, &'a str)> {
        match qname.split_once(':') {
            Some((prefix, local)) => Ok((Some(self.uri(prefix)?), local)),
            None => Ok((None, qname)),
        }
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no prefixes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NamespaceMap {
    fn default() -> Self {
        Self::siusa()
    }
}
