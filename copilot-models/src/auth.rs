//! Credential store view and bearer-token selection.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Skip;
use crate::truthy::is_truthy;

/// Parsed `auth.json`: provider id -> credential record. Read-only.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: Map<String, Value>,
}

impl CredentialStore {
    /// Wraps a parsed document. A root that is not an object holds no records.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => Self::default(),
        }
    }

    /// Record for `provider_id`, or `None` if absent or not an object.
    pub fn record(&self, provider_id: &str) -> Option<CredentialRecord> {
        let raw = self.entries.get(provider_id)?;
        if !raw.is_object() {
            return None;
        }
        serde_json::from_value(raw.clone()).ok()
    }
}

/// One provider's stored tokens. Other fields (`type`, `expires`, ...) are ignored.
///
/// Values stay untyped so that a non-string token is seen and rejected at selection time
/// instead of failing the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialRecord {
    #[serde(default)]
    pub access: Option<Value>,
    #[serde(default)]
    pub refresh: Option<Value>,
}

impl CredentialRecord {
    /// Bearer token: the first truthy of `access`, `refresh`, which must be a non-empty string.
    ///
    /// A truthy non-string `access` is selected and then rejected; `refresh` is not consulted.
    pub fn bearer_token(&self) -> Result<&str, Skip> {
        let selected = [self.access.as_ref(), self.refresh.as_ref()]
            .into_iter()
            .flatten()
            .find(|v| is_truthy(v))
            .ok_or(Skip::NoUsableToken)?;
        match selected {
            Value::String(s) if !s.is_empty() => Ok(s),
            _ => Err(Skip::NoUsableToken),
        }
    }
}

/// Looks up `provider_id` in `store` and selects its bearer token.
pub fn select_token(store: &CredentialStore, provider_id: &str) -> Result<String, Skip> {
    let record = store.record(provider_id).ok_or(Skip::NoProviderRecord)?;
    record.bearer_token().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(v: Value) -> CredentialStore {
        CredentialStore::from_value(v)
    }

    #[test]
    fn prefers_access_over_refresh() {
        let s = store(json!({"github-copilot": {"access": "gho_a", "refresh": "ghr_r"}}));
        assert_eq!(select_token(&s, "github-copilot").unwrap(), "gho_a");
    }

    #[test]
    fn falls_back_to_refresh() {
        let s = store(json!({"github-copilot": {"refresh": "ghr_r"}}));
        assert_eq!(select_token(&s, "github-copilot").unwrap(), "ghr_r");
    }

    #[test]
    fn empty_access_falls_back_to_refresh() {
        let s = store(json!({"github-copilot": {"access": "", "refresh": "ghr_r"}}));
        assert_eq!(select_token(&s, "github-copilot").unwrap(), "ghr_r");
    }

    #[test]
    fn missing_provider_is_no_record() {
        let s = store(json!({"anthropic": {"access": "sk"}}));
        assert_eq!(select_token(&s, "github-copilot"), Err(Skip::NoProviderRecord));
    }

    #[test]
    fn non_object_root_or_record_is_no_record() {
        assert_eq!(
            select_token(&store(json!(["github-copilot"])), "github-copilot"),
            Err(Skip::NoProviderRecord)
        );
        assert_eq!(
            select_token(&store(json!({"github-copilot": "gho_a"})), "github-copilot"),
            Err(Skip::NoProviderRecord)
        );
    }

    #[test]
    fn neither_token_is_no_usable_token() {
        for record in [
            json!({}),
            json!({"type": "oauth"}),
            json!({"access": null, "refresh": null}),
            json!({"access": "", "refresh": ""}),
            json!({"access": false, "refresh": 0}),
        ] {
            let s = store(json!({ "github-copilot": record }));
            assert_eq!(
                select_token(&s, "github-copilot"),
                Err(Skip::NoUsableToken),
                "record: {}",
                record
            );
        }
    }

    #[test]
    fn truthy_non_string_access_is_rejected() {
        let s = store(json!({"github-copilot": {"access": 42, "refresh": "ghr_r"}}));
        assert_eq!(select_token(&s, "github-copilot"), Err(Skip::NoUsableToken));
    }

    #[test]
    fn any_non_empty_string_is_accepted() {
        let s = store(json!({"github-copilot": {"access": " "}}));
        assert_eq!(select_token(&s, "github-copilot").unwrap(), " ");
    }
}
