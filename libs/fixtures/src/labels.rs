//! Resource labels.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::CheckError;

/// Key under which resources store their labels.
pub const LABELS_KEY: &str = "labels";

/// Anything that carries a string-to-string label map.
pub trait HasLabels {
    /// Looks up a single label.
    fn label(&self, key: &str) -> Option<&str>;

    /// All labels, sorted by key.
    fn label_pairs(&self) -> Vec<(String, String)>;
}

impl HasLabels for BTreeMap<String, String> {
    fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn label_pairs(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl HasLabels for HashMap<String, String> {
    fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn label_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        pairs.sort();
        pairs
    }
}

/// Collects the `labels` object of a resource's attributes.
///
/// A missing `labels` key yields an empty map; non-string values are skipped.
pub fn resource_labels(data: &Map<String, Value>) -> BTreeMap<String, String> {
    data.get(LABELS_KEY)
        .and_then(Value::as_object)
        .map(|labels| {
            labels
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Checks that `resource` has label `key` set to `value`.
pub fn check_has_label<L: HasLabels + ?Sized>(
    resource: &L,
    key: &str,
    value: &str,
) -> Result<(), CheckError> {
    match resource.label(key) {
        None => Err(CheckError::LabelMissing {
            key: key.to_string(),
            expected: value.to_string(),
            labels: resource.label_pairs(),
        }),
        Some(actual) if actual != value => Err(CheckError::LabelMismatch {
            key: key.to_string(),
            expected: value.to_string(),
            actual: actual.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_resource_labels() {
        let data = object(json!({
            "name": "pool",
            "labels": { "env": "test", "team": "infra", "count": 3 }
        }));
        let labels = resource_labels(&data);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("env").map(String::as_str), Some("test"));
        assert_eq!(labels.get("team").map(String::as_str), Some("infra"));
    }

    #[test]
    fn test_resource_labels_missing() {
        let data = object(json!({ "name": "pool" }));
        assert!(resource_labels(&data).is_empty());
    }

    #[test]
    fn test_check_has_label() {
        let mut labels = HashMap::new();
        labels.insert("foobar".to_string(), "bazz".to_string());

        assert!(check_has_label(&labels, "foobar", "bazz").is_ok());

        let err = check_has_label(&labels, "foobar", "baz").unwrap_err();
        assert_eq!(
            err,
            CheckError::LabelMismatch {
                key: "foobar".to_string(),
                expected: "baz".to_string(),
                actual: "bazz".to_string(),
            }
        );

        let err = check_has_label(&labels, "missing", "x").unwrap_err();
        assert!(matches!(err, CheckError::LabelMissing { ref labels, .. } if labels.len() == 1));
    }
}
