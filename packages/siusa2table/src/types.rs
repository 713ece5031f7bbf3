//! Core data types: extracted rows and the result table.

use serde::{Deserialize, Serialize};

use crate::config::COLUMNS;

/// Typed contact entries found under a `localizzazione`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Phone number.
    Telefono,
    /// Fax number.
    Fax,
    /// Website.
    Sitoweb,
    /// Email address.
    Mail,
}

impl ContactKind {
    /// All recognized kinds, in column order.
    pub const ALL: [ContactKind; 4] = [Self::Telefono, Self::Fax, Self::Sitoweb, Self::Mail];

    /// Value of the `tipo` attribute for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telefono => "telefono",
            Self::Fax => "fax",
            Self::Sitoweb => "sitoweb",
            Self::Mail => "mail",
        }
    }
}

/// Contact entries of one `localizzazione`, one optional value per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub sitoweb: Option<String>,
    pub mail: Option<String>,
}

impl Contacts {
    /// Store the value for `kind`.
    pub fn set(&mut self, kind: ContactKind, value: Option<String>) {
        match kind {
            ContactKind::Telefono => self.telefono = value,
            ContactKind::Fax => self.fax = value,
            ContactKind::Sitoweb => self.sitoweb = value,
            ContactKind::Mail => self.mail = value,
        }
    }
}

/// One conservation body (`scons` record) flattened to a table row.
///
/// Absent values are `None` and serialize as `null`; every row carries all
/// eleven columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SconsRow {
    /// Display name, HTML entities decoded.
    pub denominazione: String,
    /// Category of the institution.
    pub tipologia: Option<String>,
    pub paese: String,
    pub provincia: String,
    pub comune: String,
    pub cap: String,
    /// Street address.
    pub via: Option<String>,
    #[serde(flatten)]
    pub contacts: Contacts,
}

impl SconsRow {
    /// Cell values in [`COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [Option<&str>; 11] {
        [
            Some(self.denominazione.as_str()),
            self.tipologia.as_deref(),
            Some(self.paese.as_str()),
            Some(self.provincia.as_str()),
            Some(self.comune.as_str()),
            Some(self.cap.as_str()),
            self.via.as_deref(),
            self.contacts.telefono.as_deref(),
            self.contacts.fax.as_deref(),
            self.contacts.sitoweb.as_deref(),
            self.contacts.mail.as_deref(),
        ]
    }
}

/// Ordered rows sharing the fixed column set, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    rows: Vec<SconsRow>,
}

impl ResultTable {
    /// Column names shared by every row.
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// Rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[SconsRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows paired with their zero-based index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SconsRow)> {
        self.rows.iter().enumerate()
    }
}

impl From<Vec<SconsRow>> for ResultTable {
    fn from(rows: Vec<SconsRow>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_row() -> SconsRow {
        SconsRow {
            denominazione: "Archivio & Biblioteca".to_string(),
            tipologia: Some("Archivio di Stato".to_string()),
            paese: "IT".to_string(),
            provincia: "RM".to_string(),
            comune: "Roma".to_string(),
            cap: "00100".to_string(),
            via: Some("Via Roma 1".to_string()),
            contacts: Contacts {
                telefono: Some("0612345".to_string()),
                ..Contacts::default()
            },
        }
    }

    #[test]
    fn test_contact_kinds_match_tipo_columns() {
        let tipi: Vec<_> = ContactKind::ALL.iter().map(ContactKind::as_str).collect();
        assert_eq!(tipi, COLUMNS[7..].to_vec());
    }

    #[test]
    fn test_contacts_set() {
        let mut contacts = Contacts::default();
        contacts.set(ContactKind::Mail, Some("info@example.it".to_string()));
        assert_eq!(contacts.mail.as_deref(), Some("info@example.it"));
        assert_eq!(contacts.fax, None);
    }

    #[test]
    fn test_row_values_follow_columns() {
        let row = sample_row();
        let values = row.values();
        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[0], Some("Archivio & Biblioteca"));
        assert_eq!(values[7], Some("0612345"));
        assert_eq!(values[8], None);
    }

    #[test]
    fn test_row_serializes_all_columns() {
        let value = serde_json::to_value(sample_row()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        let mut expected = COLUMNS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);

        assert_eq!(object["fax"], serde_json::Value::Null);
        assert_eq!(object["telefono"], "0612345");
    }

    #[test]
    fn test_table_iter_indexes() {
        let table = ResultTable::from(vec![sample_row(), sample_row()]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        let indexes: Vec<_> = table.iter().map(|(i, _)| i).collect();
        assert_eq!(indexes, vec![0, 1]);
        assert_eq!(table.columns(), COLUMNS.as_slice());
    }
}
