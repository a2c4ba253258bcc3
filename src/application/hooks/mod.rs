// src/application/hooks/mod.rs
pub mod media;
pub mod slug;

pub use media::MediaUrlHook;
pub use slug::SlugFieldHook;

use crate::application::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::collection::{CollectionCatalog, catalog::MEDIA_COLLECTION};
use crate::domain::media::MediaUrlBuilder;
use crate::domain::slug::WriteOperation;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Arguments handed to a field hook right before a record is persisted.
#[derive(Debug, Clone, Copy)]
pub struct FieldHookArgs<'a> {
    pub data: &'a Map<String, Value>,
    pub value: &'a Value,
    pub operation: WriteOperation,
}

/// Computes the value to persist for one field.
pub trait BeforeChangeHook: Send + Sync {
    fn before_change(&self, args: FieldHookArgs<'_>) -> ApplicationResult<Value>;
}

/// Adjusts a document after it has been read back from storage.
pub trait AfterReadHook: Send + Sync {
    fn after_read(&self, doc: Value) -> ApplicationResult<Value>;
}

#[derive(Default, Clone)]
pub struct HookRegistry {
    before_change: HashMap<String, HashMap<String, Arc<dyn BeforeChangeHook>>>,
    after_read: HashMap<String, Arc<dyn AfterReadHook>>,
}

impl HookRegistry {
    /// Wire the slug hook onto every slugged collection and the URL rewriter
    /// onto `media`.
    pub fn for_catalog(
        catalog: &CollectionCatalog,
        media_urls: MediaUrlBuilder,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut registry = Self::default();

        for collection in catalog.slugged() {
            if let Some(field) = &collection.slug_field {
                registry.register_before_change(
                    &collection.slug,
                    &field.name,
                    Arc::new(SlugFieldHook::new(field.clone())),
                );
            }
        }

        if catalog.collection(MEDIA_COLLECTION).is_some() {
            registry.register_after_read(
                MEDIA_COLLECTION,
                Arc::new(MediaUrlHook::new(media_urls, clock)),
            );
        }

        registry
    }

    pub fn register_before_change(
        &mut self,
        collection: &str,
        field: &str,
        hook: Arc<dyn BeforeChangeHook>,
    ) {
        self.before_change
            .entry(collection.to_string())
            .or_default()
            .insert(field.to_string(), hook);
    }

    pub fn register_after_read(&mut self, collection: &str, hook: Arc<dyn AfterReadHook>) {
        self.after_read.insert(collection.to_string(), hook);
    }

    pub fn before_change(&self, collection: &str, field: &str) -> Option<&Arc<dyn BeforeChangeHook>> {
        self.before_change
            .get(collection)
            .and_then(|fields| fields.get(field))
    }

    pub fn after_read(&self, collection: &str) -> Option<&Arc<dyn AfterReadHook>> {
        self.after_read.get(collection)
    }
}
