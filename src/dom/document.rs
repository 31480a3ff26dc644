// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;

/// An element with its lowercased tag name and attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: HashMap<String, String>,
}

impl Element {
    pub(crate) fn new(tag_name: impl Into<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
        }
    }

    /// Tag name (lowercase, as html5ever reports it)
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

}

/// Parsed HTML document, flattened to elements in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub(crate) fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// All elements in document order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get elements by tag name, in document order
    pub fn get_elements_by_tag_name<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements
            .iter()
            .filter(move |e| e.tag_name().eq_ignore_ascii_case(tag))
    }

    /// Get all scripts
    pub fn scripts(&self) -> impl Iterator<Item = &Element> {
        self.get_elements_by_tag_name("script")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_document_creation() {
        let doc = Document::default();
        assert!(doc.elements().is_empty());
        assert_eq!(doc.scripts().count(), 0);
    }

    #[test]
    fn test_element_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("src".to_string(), "/app.js".to_string());
        attrs.insert("async".to_string(), String::new());
        let elem = Element::new("script", attrs);

        assert_eq!(elem.tag_name(), "script");
        assert_eq!(elem.get_attribute("src"), Some("/app.js"));
        assert_eq!(elem.get_attribute("async"), Some(""));
        assert_eq!(elem.get_attribute("integrity"), None);
    }

    #[test]
    fn test_tag_lookup_order() {
        let doc = parse_html(
            "<html><head><script src='a.js'></script></head>\
             <body><p>x</p><script src='b.js'></script></body></html>",
        )
        .unwrap();

        let srcs: Vec<_> = doc
            .scripts()
            .filter_map(|s| s.get_attribute("src"))
            .collect();
        assert_eq!(srcs, vec!["a.js", "b.js"]);
        assert_eq!(doc.get_elements_by_tag_name("P").count(), 1);
    }
}
