//! In-memory design document of the editor
//!
//! The canvas renders whatever was last loaded here. Loading replaces the
//! whole design; a rejected payload leaves the current one in place.

use design_sync_core::{Error, Result};
use serde_json::{Map, Value};

/// Active design document
#[derive(Debug, Clone, Default)]
pub struct EditorDocument {
    root: Option<Map<String, Value>>,
    /// Monotonic counter bumped on every successful load
    revision: u64,
}

/// What the canvas shows about the loaded document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub page_count: usize,
    pub element_count: usize,
}

impl EditorDocument {
    /// Replace the active design with `document`.
    pub fn load_json(&mut self, document: Value) -> Result<()> {
        match document {
            Value::Object(root) => {
                self.root = Some(root);
                self.revision += 1;
                Ok(())
            }
            other => Err(Error::InvalidDocument(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn summary(&self) -> Option<DocumentSummary> {
        let root = self.root.as_ref()?;
        let pages = root
            .get("pages")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Some(DocumentSummary {
            width: root.get("width").and_then(Value::as_f64),
            height: root.get("height").and_then(Value::as_f64),
            page_count: pages.len(),
            element_count: pages.iter().map(count_elements).sum(),
        })
    }
}

/// Count nested `children` of a page or group
fn count_elements(node: &Value) -> usize {
    node.get("children")
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .map(|child| 1 + count_elements(child))
                .sum()
        })
        .unwrap_or(0)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_replaces_document() {
        let mut document = EditorDocument::default();
        assert!(document.is_empty());

        document.load_json(json!({ "width": 1080, "pages": [] })).unwrap();
        document.load_json(json!({ "width": 1920, "pages": [] })).unwrap();

        assert_eq!(document.revision(), 2);
        assert_eq!(document.summary().unwrap().width, Some(1920.0));
    }

    #[test]
    fn test_rejected_payload_keeps_current_design() {
        let mut document = EditorDocument::default();
        document.load_json(json!({ "pages": [] })).unwrap();

        let result = document.load_json(json!(["not", "a", "design"]));

        assert!(matches!(result, Err(Error::InvalidDocument(_))));
        assert_eq!(document.revision(), 1);
        assert!(!document.is_empty());
        assert_eq!(document.summary().unwrap().page_count, 0);
    }

    #[test]
    fn test_summary_counts_nested_elements() {
        let mut document = EditorDocument::default();
        document
            .load_json(json!({
                "width": 1080,
                "height": 1080,
                "pages": [
                    { "id": "p1", "children": [
                        { "type": "text" },
                        { "type": "group", "children": [{ "type": "image" }, { "type": "text" }] }
                    ]},
                    { "id": "p2", "children": [] }
                ]
            }))
            .unwrap();

        let summary = document.summary().unwrap();
        assert_eq!(summary.page_count, 2);
        assert_eq!(summary.element_count, 4);
        assert_eq!(summary.width, Some(1080.0));
    }

    #[test]
    fn test_summary_without_pages() {
        let mut document = EditorDocument::default();
        assert!(document.summary().is_none());

        document.load_json(json!({})).unwrap();
        let summary = document.summary().unwrap();
        assert_eq!(summary.page_count, 0);
        assert_eq!(summary.height, None);
    }
}
