use std::collections::BTreeMap;

use serde_json::Value;

use crate::application::AppError;

/// Account name to account ID pairs.
///
/// Backed by an ordered map, so iteration is always by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountMapping {
    accounts: BTreeMap<String, String>,
}

impl AccountMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account, returning the previous ID for that name if any
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) -> Option<String> {
        self.accounts.insert(name.into(), id.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.accounts.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.accounts
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    /// Parse a JSON object of `name -> id`.
    ///
    /// IDs may be strings or numbers; numbers are kept as their JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AppError::Configuration(format!("not valid JSON: {}", e)))?;

        let Value::Object(entries) = value else {
            return Err(AppError::Configuration(
                "expected an object of account name to account ID".to_string(),
            ));
        };

        let mut mapping = Self::new();
        for (name, raw) in entries {
            let id = match raw {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(AppError::Configuration(format!(
                        "account '{}' has an invalid ID: {}",
                        name, other
                    )));
                }
            };
            mapping.insert(name, id);
        }

        Ok(mapping)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AccountMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, id) in iter {
            mapping.insert(name, id);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_by_name() {
        let mapping: AccountMapping = [("zed", "3"), ("alice", "1"), ("mike", "2")]
            .into_iter()
            .collect();

        let names: Vec<&str> = mapping.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alice", "mike", "zed"]);
    }

    #[test]
    fn test_from_json_accepts_numeric_ids() {
        let mapping =
            AccountMapping::from_json_str(r#"{"qa": "475063612724", "ops": 123456789012}"#)
                .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("qa"), Some("475063612724"));
        assert_eq!(mapping.get("ops"), Some("123456789012"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let result = AccountMapping::from_json_str(r#"["qa"]"#);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_id_type() {
        let result = AccountMapping::from_json_str(r#"{"qa": true}"#);
        assert!(matches!(result, Err(AppError::Configuration(msg)) if msg.contains("qa")));

        let result = AccountMapping::from_json_str(r#"{"qa": null}"#);
        assert!(matches!(result, Err(AppError::Configuration(_))));

        let result = AccountMapping::from_json_str(r#"{"qa": ["1"]}"#);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_from_json_keeps_any_number_as_text() {
        let mapping = AccountMapping::from_json_str(r#"{"neg": -5, "frac": 1.5}"#).unwrap();

        assert_eq!(mapping.get("neg"), Some("-5"));
        assert_eq!(mapping.get("frac"), Some("1.5"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = AccountMapping::from_json_str("{not json");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_empty_object_is_empty_mapping() {
        let mapping = AccountMapping::from_json_str("{}").unwrap();
        assert!(mapping.is_empty());
    }
}
