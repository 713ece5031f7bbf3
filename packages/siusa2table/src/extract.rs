//! Field extraction for a single `scons` record body.

use roxmltree::Node;

use crate::config::NamespaceMap;
use crate::error::{Result, Siusa2TableError};
use crate::types::{ContactKind, Contacts, SconsRow};
use crate::xml::{find_child_with_attribute, get_text, require_attribute, require_child, require_path};

/// Path from the `scons` element to the location block.
const LOCALIZZAZIONE_PATH: &str = "scons:localizzazioni/scons:localizzazione";

/// Extract one row from a `scons:scons` element.
///
/// The name is HTML-entity decoded. The four address attributes are required;
/// contact entries are optional and the first entry of each `tipo` wins.
///
/// # Errors
/// Returns a structural mismatch when the name, category, location block,
/// address or any address attribute is missing.
pub fn parse_scons(scons: Node<'_, '_>, namespaces: &NamespaceMap) -> Result<SconsRow> {
    let denominazione_node = require_child(scons, namespaces, "scons:denominazione")?;
    let denominazione = get_text(denominazione_node)
        .map(unescape_html)
        .ok_or_else(|| Siusa2TableError::MissingText {
            element: "denominazione".to_string(),
        })?;

    let tipologia = get_text(require_child(scons, namespaces, "scons:tipologia")?).map(String::from);

    let localizzazione = require_path(scons, namespaces, LOCALIZZAZIONE_PATH)?;
    let indirizzo = require_child(localizzazione, namespaces, "scons:indirizzo")?;

    let row = SconsRow {
        denominazione,
        tipologia,
        paese: require_attribute(indirizzo, "paese")?.to_string(),
        provincia: require_attribute(indirizzo, "provincia")?.to_string(),
        comune: require_attribute(indirizzo, "comune")?.to_string(),
        cap: require_attribute(indirizzo, "cap")?.to_string(),
        via: get_text(indirizzo).map(String::from),
        contacts: parse_contacts(localizzazione, namespaces)?,
    };

    tracing::trace!(denominazione = %row.denominazione, "Extracted scons record");
    Ok(row)
}

/// Look up each contact kind independently under a `localizzazione`.
fn parse_contacts(localizzazione: Node<'_, '_>, namespaces: &NamespaceMap) -> Result<Contacts> {
    let mut contacts = Contacts::default();
    for kind in ContactKind::ALL {
        let value = find_child_with_attribute(
            localizzazione,
            namespaces,
            "scons:contatto",
            "tipo",
            kind.as_str(),
        )?
        .and_then(get_text)
        .map(String::from);
        contacts.set(kind, value);
    }
    Ok(contacts)
}

/// Decode HTML character references the way an HTML5 parser decodes text.
///
/// Legacy named references without a semicolon (`&amp`, `&eacute`) are
/// decoded, and numeric references in 0x80-0x9F map through windows-1252.
/// SIUSA stores display names HTML-escaped inside the XML text.
fn unescape_html(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}
