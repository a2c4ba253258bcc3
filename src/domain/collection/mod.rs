// src/domain/collection/mod.rs
pub mod blocks;
pub mod catalog;

pub use blocks::Block;
pub use catalog::CollectionCatalog;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::UploadConfig;
use crate::domain::slug::SlugField;
use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Checkbox,
    RichText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldConfig {
    pub name: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub required: bool,
    pub index: bool,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

impl FieldConfig {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            required: false,
            index: false,
            hidden: false,
            default_value: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn checkbox(name: impl Into<String>, default_value: bool) -> Self {
        Self {
            default_value: Some(default_value),
            ..Self::new(name, FieldKind::Checkbox)
        }
    }

    pub fn rich_text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::RichText)
    }

    /// Admin-facing label; the field name is shown when unset.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CollectionConfig {
    pub slug: String,
    pub fields: Vec<FieldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug_field: Option<SlugField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadConfig>,
}

impl CollectionConfig {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            fields: Vec::new(),
            slug_field: None,
            upload: None,
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.fields.push(field);
        self
    }

    /// Add the `slug` text field and its hidden lock checkbox, derived from
    /// `source_field`.
    #[must_use]
    pub fn with_slug_field(mut self, source_field: &str) -> Self {
        let slug = SlugField::derived_from(source_field);
        self.fields.push(FieldConfig::text(slug.name.clone()).indexed());
        self.fields
            .push(FieldConfig::checkbox(slug.lock_field.clone(), true).hidden());
        self.slug_field = Some(slug);
        self
    }

    #[must_use]
    pub fn with_upload(mut self, upload: UploadConfig) -> Self {
        self.upload = Some(upload);
        self
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}

/// Reject collections without a slug and duplicate slugs.
pub fn validate_collections(collections: &[CollectionConfig]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for (index, collection) in collections.iter().enumerate() {
        if collection.slug.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "collection at index {index} is missing a slug"
            )));
        }
        if !seen.insert(collection.slug.as_str()) {
            return Err(DomainError::Conflict(format!(
                "duplicate collection slug: {}",
                collection.slug
            )));
        }
    }
    Ok(())
}
