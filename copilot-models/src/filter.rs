//! Entitlement filter: picker-enabled chat models only.

use crate::catalog::ModelDescriptor;
use crate::error::Skip;

/// Capability type a model must report to be allowed.
pub const CHAT_CAPABILITY: &str = "chat";

/// Whether `model` is both shown in the model picker and a chat model.
pub fn is_entitled(model: &ModelDescriptor) -> bool {
    model.model_picker_enabled == Some(true) && model.capability_type() == Some(CHAT_CAPABILITY)
}

/// Ids of entitled models, in catalog order. Never returns an empty list.
pub fn entitled_models(catalog: &[ModelDescriptor]) -> Result<Vec<String>, Skip> {
    let ids: Vec<String> = catalog
        .iter()
        .filter(|m| is_entitled(m))
        .map(|m| m.id.clone())
        .collect();
    if ids.is_empty() {
        return Err(Skip::NoEntitlement);
    }
    Ok(ids)
}
