// src/application/services.rs
use crate::application::{
    ApplicationResult,
    dto::{BeforeChangeRequest, JobAccessDto, JobAccessRequest},
    error::ApplicationError,
    hooks::{FieldHookArgs, HookRegistry},
};
use crate::domain::collection::CollectionCatalog;
use crate::domain::jobs::JobAccessPolicy;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Runs the hooks registered for the catalog's collections.
#[derive(Clone)]
pub struct HookService {
    catalog: Arc<CollectionCatalog>,
    registry: Arc<HookRegistry>,
}

impl HookService {
    pub const fn new(catalog: Arc<CollectionCatalog>, registry: Arc<HookRegistry>) -> Self {
        Self { catalog, registry }
    }

    fn ensure_collection(&self, collection: &str) -> ApplicationResult<()> {
        if self.catalog.collection(collection).is_none() {
            return Err(ApplicationError::not_found(format!(
                "unknown collection: {collection}"
            )));
        }
        Ok(())
    }

    pub fn before_change(
        &self,
        collection: &str,
        field: &str,
        request: &BeforeChangeRequest,
    ) -> ApplicationResult<Value> {
        self.ensure_collection(collection)?;

        let hook = self.registry.before_change(collection, field).ok_or_else(|| {
            ApplicationError::not_found(format!(
                "no beforeChange hook for {collection}.{field}"
            ))
        })?;

        tracing::debug!(collection, field, operation = ?request.operation, "running beforeChange hook");

        hook.before_change(FieldHookArgs {
            data: &request.data,
            value: &request.value,
            operation: request.operation,
        })
    }

    /// Collections without an `afterRead` hook get the document back as-is.
    pub fn after_read(&self, collection: &str, doc: Value) -> ApplicationResult<Value> {
        self.ensure_collection(collection)?;

        match self.registry.after_read(collection) {
            Some(hook) => {
                tracing::debug!(collection, "running afterRead hook");
                hook.after_read(doc)
            }
            None => Ok(doc),
        }
    }

    pub fn validate_block(&self, block: &str, data: &Map<String, Value>) -> ApplicationResult<()> {
        let block = self
            .catalog
            .block(block)
            .ok_or_else(|| ApplicationError::not_found(format!("unknown block: {block}")))?;
        block.validate(data)?;
        Ok(())
    }
}

pub struct ApplicationServices {
    pub hooks: HookService,
    catalog: Arc<CollectionCatalog>,
    job_access: JobAccessPolicy,
}

impl ApplicationServices {
    pub fn new(
        catalog: Arc<CollectionCatalog>,
        registry: Arc<HookRegistry>,
        job_access: JobAccessPolicy,
    ) -> Self {
        Self {
            hooks: HookService::new(Arc::clone(&catalog), registry),
            catalog,
            job_access,
        }
    }

    pub fn catalog(&self) -> &CollectionCatalog {
        &self.catalog
    }

    pub fn job_access(&self, request: &JobAccessRequest, bearer_token: Option<&str>) -> JobAccessDto {
        let allowed = self.job_access.can_run(request.has_user, bearer_token);
        if !allowed {
            tracing::warn!("job run rejected");
        }
        JobAccessDto { allowed }
    }
}
