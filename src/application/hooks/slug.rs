// src/application/hooks/slug.rs
use super::{BeforeChangeHook, FieldHookArgs};
use crate::application::ApplicationResult;
use crate::domain::slug::{SlugDecision, SlugField, decide};
use serde_json::Value;

/// `beforeChange` hook for a collection's slug field.
#[derive(Debug, Clone)]
pub struct SlugFieldHook {
    field: SlugField,
}

impl SlugFieldHook {
    pub const fn new(field: SlugField) -> Self {
        Self { field }
    }
}

impl BeforeChangeHook for SlugFieldHook {
    fn before_change(&self, args: FieldHookArgs<'_>) -> ApplicationResult<Value> {
        let record = self
            .field
            .read_record(args.data, args.value, args.operation);

        // the incoming value is returned verbatim, even when it is not a string
        Ok(match decide(&record) {
            SlugDecision::Keep => args.value.clone(),
            SlugDecision::Replace(slug) => {
                tracing::debug!(
                    source_field = %self.field.source_field,
                    operation = ?args.operation,
                    slug = %slug,
                    "derived slug"
                );
                Value::String(slug)
            }
        })
    }
}
