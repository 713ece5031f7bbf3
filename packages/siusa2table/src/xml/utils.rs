//! Namespace-aware helpers for navigating roxmltree DOM trees.
//!
//! Names are given in qualified form (`scons:indirizzo`) and resolved through
//! an explicit [`NamespaceMap`]. Paths are slash-separated qualified names
//! (`scons:localizzazioni/scons:localizzazione`).

use roxmltree::Node;

use crate::config::NamespaceMap;
use crate::error::{Result, Siusa2TableError};

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use siusa2table::xml::get_tag_name;
///
/// let xml = r#"<s:scons xmlns:s="http://www.san.beniculturali.it/scons2"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "scons");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given namespace and local name.
pub fn has_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == namespace && get_tag_name(node) == local
}

/// Find the first child element matching a qualified name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `namespaces` - Map used to resolve the prefix
/// * `qname` - Qualified tag name (e.g., "scons:tipologia")
///
/// # Returns
/// First matching child element in document order, `None` if there is none,
/// or an error if the prefix is not declared.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use siusa2table::config::NamespaceMap;
/// use siusa2table::xml::find_child;
///
/// let xml = r#"<s:scons xmlns:s="http://www.san.beniculturali.it/scons2">
///     <s:tipologia>Archivio</s:tipologia>
/// </s:scons>"#;
/// let doc = Document::parse(xml).unwrap();
/// let ns = NamespaceMap::siusa();
///
/// assert!(find_child(doc.root_element(), &ns, "scons:tipologia").unwrap().is_some());
/// assert!(find_child(doc.root_element(), &ns, "scons:missing").unwrap().is_none());
/// ```
pub fn find_child<'a, 'input>(
    node: Node<'a, 'input>,
    namespaces: &NamespaceMap,
    qname: &str,
) -> Result<Option<Node<'a, 'input>>> {
    let (namespace, local) = namespaces.resolve(qname)?;
    Ok(node
        .children()
        .find(|child| has_name(*child, namespace, local)))
}

/// Find all child elements matching a qualified name, in document order.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    namespaces: &NamespaceMap,
    qname: &str,
) -> Result<Vec<Node<'a, 'input>>> {
    let (namespace, local) = namespaces.resolve(qname)?;
    Ok(node
        .children()
        .filter(|child| has_name(*child, namespace, local))
        .collect())
}

/// Find the first child element matching a qualified name whose attribute
/// `attr` equals `value`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use siusa2table::config::NamespaceMap;
/// use siusa2table::xml::find_child_with_attribute;
///
/// let xml = r#"<s:loc xmlns:s="http://www.san.beniculturali.it/scons2">
///     <s:contatto tipo="fax">06 1</s:contatto>
///     <s:contatto tipo="mail">a@b.it</s:contatto>
/// </s:loc>"#;
/// let doc = Document::parse(xml).unwrap();
/// let ns = NamespaceMap::siusa();
///
/// let mail = find_child_with_attribute(doc.root_element(), &ns, "scons:contatto", "tipo", "mail")
///     .unwrap()
///     .unwrap();
/// assert_eq!(mail.text(), Some("a@b.it"));
/// ```
pub fn find_child_with_attribute<'a, 'input>(
    node: Node<'a, 'input>,
    namespaces: &NamespaceMap,
    qname: &str,
    attr: &str,
    value: &str,
) -> Result<Option<Node<'a, 'input>>> {
    let (namespace, local) = namespaces.resolve(qname)?;
    Ok(node.children().find(|child| {
        has_name(*child, namespace, local) && child.attribute(attr) == Some(value)
    }))
}

/// Like [`find_child`], but a missing element is a structural mismatch.
pub fn require_child<'a, 'input>(
    node: Node<'a, 'input>,
    namespaces: &NamespaceMap,
    qname: &str,
) -> Result<Node<'a, 'input>> {
    find_child(node, namespaces, qname)?
        .ok_or_else(|| Siusa2TableError::missing_element(qname, context_name(node)))
}

/// Follow a `/`-separated path of qualified names, taking the first match
/// at each step. The first missing step is a structural mismatch reported
/// against its parent.
pub fn require_path<'a, 'input>(
    node: Node<'a, 'input>,
    namespaces: &NamespaceMap,
    path: &str,
) -> Result<Node<'a, 'input>> {
    let mut current = node;
    for part in path.split('/') {
        current = require_child(current, namespaces, part)?;
    }
    Ok(current)
}

/// Get a required attribute value from a node.
pub fn require_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| Siusa2TableError::MissingAttribute {
            attribute: name.to_string(),
            element: get_tag_name(node).to_string(),
        })
}

/// Get the leading text of an element, untrimmed.
///
/// Empty elements have no text and yield `None`.
pub fn get_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text()
}

/// Name used as error context for a node; the document root has no tag.
fn context_name(node: Node<'_, '_>) -> String {
    if node.is_element() {
        get_tag_name(node).to_string()
    } else {
        "document".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const SCONS_NS: &str = "http://www.san.beniculturali.it/scons2";

    fn ns() -> NamespaceMap {
        NamespaceMap::siusa()
    }

    #[test]
    fn test_has_name_checks_namespace() {
        let xml = r#"<root xmlns:s="http://www.san.beniculturali.it/scons2"><s:a/><a/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let children: Vec<_> = doc.root_element().children().filter(|n| n.is_element()).collect();

        assert!(has_name(children[0], Some(SCONS_NS), "a"));
        assert!(!has_name(children[0], None, "a"));
        assert!(has_name(children[1], None, "a"));
    }

    #[test]
    fn test_find_child_ignores_other_namespace() {
        let xml = r#"<root xmlns:x="urn:other" xmlns:s="http://www.san.beniculturali.it/scons2">
            <x:tipologia>wrong</x:tipologia>
            <s:tipologia>right</s:tipologia>
        </root>"#;
        let doc = Document::parse(xml).unwrap();
        let found = find_child(doc.root_element(), &ns(), "scons:tipologia")
            .unwrap()
            .unwrap();
        assert_eq!(get_text(found), Some("right"));
    }

    #[test]
    fn test_find_child_default_namespace() {
        let xml = r#"<scons xmlns="http://www.san.beniculturali.it/scons2"><tipologia>t</tipologia></scons>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(find_child(doc.root_element(), &ns(), "scons:tipologia")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_find_child_unknown_prefix() {
        let xml = r#"<root/>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(matches!(
            find_child(doc.root_element(), &ns(), "nope:x"),
            Err(Siusa2TableError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_find_children_in_order() {
        let xml = r#"<s:r xmlns:s="http://www.san.beniculturali.it/scons2">
            <s:item>1</s:item><s:other/><s:item>2</s:item>
        </s:r>"#;
        let doc = Document::parse(xml).unwrap();
        let items = find_children(doc.root_element(), &ns(), "scons:item").unwrap();
        let texts: Vec<_> = items.into_iter().filter_map(get_text).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_require_path_reports_parent() {
        let xml = r#"<s:scons xmlns:s="http://www.san.beniculturali.it/scons2"><s:localizzazioni/></s:scons>"#;
        let doc = Document::parse(xml).unwrap();
        let err = require_path(
            doc.root_element(),
            &ns(),
            "scons:localizzazioni/scons:localizzazione",
        )
        .unwrap_err();

        match err {
            Siusa2TableError::MissingElement { element, context } => {
                assert_eq!(element, "scons:localizzazione");
                assert_eq!(context, "localizzazioni");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_child_with_attribute_first_match_wins() {
        let xml = r#"<s:l xmlns:s="http://www.san.beniculturali.it/scons2">
            <s:contatto tipo="telefono">first</s:contatto>
            <s:contatto tipo="telefono">second</s:contatto>
        </s:l>"#;
        let doc = Document::parse(xml).unwrap();
        let found = find_child_with_attribute(
            doc.root_element(),
            &ns(),
            "scons:contatto",
            "tipo",
            "telefono",
        )
        .unwrap();
        assert_eq!(found.and_then(get_text), Some("first"));

        let missing =
            find_child_with_attribute(doc.root_element(), &ns(), "scons:contatto", "tipo", "fax")
                .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_require_attribute() {
        let xml = r#"<indirizzo paese="IT"/>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(require_attribute(root, "paese").unwrap(), "IT");
        let err = require_attribute(root, "cap").unwrap_err();
        assert_eq!(err.to_string(), "Missing required attribute 'cap' on <indirizzo>");
    }

    #[test]
    fn test_get_text_untrimmed_and_empty() {
        let xml = r#"<root><a>  spaced  </a><b/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let mut children = doc.root_element().children().filter(|n| n.is_element());

        assert_eq!(children.next().and_then(get_text), Some("  spaced  "));
        assert_eq!(children.next().and_then(get_text), None);
    }
}
