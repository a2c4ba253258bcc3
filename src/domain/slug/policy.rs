// src/domain/slug/policy.rs
use super::format::format_slug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which write path triggered the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WriteOperation {
    Create,
    Update,
}

/// The fields of a record-in-progress that the slug policy looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRecord {
    pub source_text: Option<String>,
    pub slug_lock: bool,
    pub external_id: Option<String>,
    pub slug: Option<String>,
    pub operation: WriteOperation,
}

impl SlugRecord {
    /// A locked record with nothing filled in, matching the field defaults.
    #[must_use]
    pub const fn new(operation: WriteOperation) -> Self {
        Self {
            source_text: None,
            slug_lock: true,
            external_id: None,
            slug: None,
            operation,
        }
    }

    #[must_use]
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn with_lock(mut self, locked: bool) -> Self {
        self.slug_lock = locked;
        self
    }

    #[must_use]
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugDecision {
    /// Leave whatever the record currently holds.
    Keep,
    Replace(String),
}

/// Decide what to do with the slug of `record`.
///
/// Locked records and records without a usable source text are never
/// touched. Creates always get a freshly derived slug. Updates only backfill
/// when the existing slug does not already carry the external id suffix (or,
/// without a suffix, when it is empty), so manual edits survive.
///
/// The suffix check is a substring match: `my-post-123-old` is treated as
/// already carrying `-123`.
#[must_use]
pub fn decide(record: &SlugRecord) -> SlugDecision {
    if record.slug_lock {
        return SlugDecision::Keep;
    }

    let Some(source) = record.source_text.as_deref().filter(|text| !text.is_empty()) else {
        return SlugDecision::Keep;
    };

    let suffix = record
        .external_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(|id| format!("-{id}"))
        .unwrap_or_default();

    match record.operation {
        WriteOperation::Create => SlugDecision::Replace(format!("{}{suffix}", format_slug(source))),
        WriteOperation::Update => {
            let existing = record.slug.as_deref().unwrap_or_default();
            let already_derived = if suffix.is_empty() {
                !existing.is_empty()
            } else {
                existing.contains(&suffix)
            };

            if already_derived {
                SlugDecision::Keep
            } else {
                SlugDecision::Replace(format!("{}{suffix}", format_slug(source)))
            }
        }
    }
}

/// The slug value to persist for `record`.
#[must_use]
pub fn derive(record: &SlugRecord) -> Option<String> {
    match decide(record) {
        SlugDecision::Keep => record.slug.clone(),
        SlugDecision::Replace(slug) => Some(slug),
    }
}
