// src/domain/collection/blocks.rs
use super::FieldConfig;
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A rich-text block type available to editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Block {
    pub slug: String,
    pub singular: String,
    pub plural: String,
    pub fields: Vec<FieldConfig>,
}

impl Block {
    /// Third-party embeds (YouTube, Instagram, ...) pasted by URL.
    #[must_use]
    pub fn embed() -> Self {
        Self {
            slug: "embed".into(),
            singular: "Embed".into(),
            plural: "Embeds".into(),
            fields: vec![FieldConfig::text("url").required()],
        }
    }

    /// A video pasted by URL and rendered with the site's own player.
    #[must_use]
    pub fn video() -> Self {
        Self {
            slug: "video".into(),
            singular: "Video".into(),
            plural: "Videos".into(),
            fields: vec![FieldConfig::text("url").labelled("Video URL").required()],
        }
    }

    /// Check that every required field carries a non-blank string.
    pub fn validate(&self, data: &Map<String, Value>) -> DomainResult<()> {
        for field in self.fields.iter().filter(|field| field.required) {
            match data.get(&field.name).and_then(Value::as_str) {
                Some(value) if !value.trim().is_empty() => {}
                _ => {
                    return Err(DomainError::Validation(format!(
                        "{} block requires field `{}`",
                        self.slug, field.name
                    )));
                }
            }
        }
        Ok(())
    }
}
