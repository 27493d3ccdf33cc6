//! Write the allow-list into `provider.<id>.whitelist`, creating intermediate objects.

use serde_json::{Map, Value};

use crate::error::Skip;
use crate::truthy::is_truthy;

/// Key of the provider table in the host configuration.
pub const PROVIDER_KEY: &str = "provider";

/// Leaf written under the provider entry.
pub const WHITELIST_KEY: &str = "whitelist";

/// Sets `config.provider[provider_id].whitelist = models`.
///
/// Missing or falsy (`null`, `false`, `0`, `""`) `provider` and provider entries are created
/// as empty objects; other fields of the provider entry are left as they are. If an existing
/// level is truthy but not an object the config is left untouched and `ConfigShape` is returned. Shapes are checked before
/// anything is written.
pub fn apply_whitelist(config: &mut Value, provider_id: &str, models: &[String]) -> Result<(), Skip> {
    if models.is_empty() {
        return Err(Skip::NoEntitlement);
    }
    let root = config
        .as_object_mut()
        .ok_or_else(|| Skip::ConfigShape("config is not an object".to_string()))?;
    check_slot(root.get(PROVIDER_KEY), PROVIDER_KEY)?;
    if let Some(Value::Object(providers)) = root.get(PROVIDER_KEY) {
        check_slot(providers.get(provider_id), provider_id)?;
    }

    let shape = |key: &str| Skip::ConfigShape(format!("`{}` is not an object", key));
    let providers = upsert_object(root, PROVIDER_KEY).ok_or_else(|| shape(PROVIDER_KEY))?;
    let entry = upsert_object(providers, provider_id).ok_or_else(|| shape(provider_id))?;
    entry.insert(
        WHITELIST_KEY.to_string(),
        Value::Array(models.iter().cloned().map(Value::String).collect()),
    );
    Ok(())
}

/// An absent, falsy or object slot can hold an object; anything else cannot.
fn check_slot(slot: Option<&Value>, key: &str) -> Result<(), Skip> {
    match slot {
        None | Some(Value::Object(_)) => Ok(()),
        Some(v) if !is_truthy(v) => Ok(()),
        Some(other) => Err(Skip::ConfigShape(format!(
            "`{}` is {}, expected an object",
            key,
            kind(other)
        ))),
    }
}

/// Get-or-create `map[key]` as an object; a falsy slot is replaced.
fn upsert_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !is_truthy(slot) {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
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
