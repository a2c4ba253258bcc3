// src/domain/slug/mod.rs
pub mod format;
pub mod policy;

pub use format::format_slug;
pub use policy::{SlugDecision, SlugRecord, WriteOperation, decide, derive};

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::num::FpCategory;
use utoipa::ToSchema;

/// Names of the record fields a slug field reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SlugField {
    pub name: String,
    pub source_field: String,
    pub lock_field: String,
    pub external_id_field: String,
}

impl Default for SlugField {
    fn default() -> Self {
        Self::derived_from("title")
    }
}

impl SlugField {
    pub fn derived_from(source_field: impl Into<String>) -> Self {
        Self {
            name: "slug".into(),
            source_field: source_field.into(),
            lock_field: "slugLock".into(),
            external_id_field: "customId".into(),
        }
    }

    /// Pull the slug-relevant fields out of an in-progress record.
    ///
    /// A missing or non-boolean lock flag counts as locked, since the field
    /// defaults to `true`. Numeric external ids are accepted and rendered in
    /// decimal, except zero, which counts as no id at all.
    #[must_use]
    pub fn read_record(
        &self,
        data: &Map<String, Value>,
        value: &Value,
        operation: WriteOperation,
    ) -> SlugRecord {
        let external_id = match data.get(&self.external_id_field) {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) if !is_zero(id) => Some(id.to_string()),
            _ => None,
        };

        SlugRecord {
            source_text: data
                .get(&self.source_field)
                .and_then(Value::as_str)
                .map(str::to_owned),
            slug_lock: data
                .get(&self.lock_field)
                .and_then(Value::as_bool)
                .unwrap_or(true),
            external_id,
            slug: value.as_str().map(str::to_owned),
            operation,
        }
    }
}

fn is_zero(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|n| n.classify() == FpCategory::Zero)
}
