// src/domain/collection/catalog.rs
use super::{Block, CollectionConfig, FieldConfig, validate_collections};
use crate::domain::errors::DomainResult;
use crate::domain::media::UploadConfig;
use serde::Serialize;
use utoipa::ToSchema;

pub const MEDIA_COLLECTION: &str = "media";

/// The validated set of collections and rich-text blocks the host is
/// configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CollectionCatalog {
    collections: Vec<CollectionConfig>,
    blocks: Vec<Block>,
}

impl CollectionCatalog {
    pub fn new(collections: Vec<CollectionConfig>, blocks: Vec<Block>) -> DomainResult<Self> {
        validate_collections(&collections)?;
        Ok(Self {
            collections,
            blocks,
        })
    }

    /// Pages, posts, media, categories, users and tags.
    pub fn editorial() -> DomainResult<Self> {
        let titled = |slug: &str| {
            CollectionConfig::new(slug)
                .field(FieldConfig::text("title").required())
                .with_slug_field("title")
        };

        let collections = vec![
            titled("pages"),
            titled("posts").field(FieldConfig::rich_text("content")),
            CollectionConfig::new(MEDIA_COLLECTION)
                .field(FieldConfig::text("alt"))
                .field(FieldConfig::rich_text("caption"))
                .with_upload(UploadConfig::editorial()),
            titled("categories"),
            CollectionConfig::new("users").field(FieldConfig::text("name")),
            titled("tags"),
        ];

        Self::new(collections, vec![Block::embed(), Block::video()])
    }

    pub fn collections(&self) -> &[CollectionConfig] {
        &self.collections
    }

    pub fn collection(&self, slug: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    pub fn block(&self, slug: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.slug == slug)
    }

    /// Collections that carry a slug field, in declaration order.
    pub fn slugged(&self) -> impl Iterator<Item = &CollectionConfig> {
        self.collections.iter().filter(|c| c.slug_field.is_some())
    }
}
