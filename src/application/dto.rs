// src/application/dto.rs
use crate::domain::slug::WriteOperation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Payload the host sends when a field's `beforeChange` hook fires.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BeforeChangeRequest {
    /// The whole record being written.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
    /// Current value of the hooked field.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
    pub operation: WriteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BeforeChangeResponse {
    #[schema(value_type = Object)]
    pub value: Value,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobAccessRequest {
    /// Whether the forwarded request carried a signed-in user.
    #[serde(default)]
    pub has_user: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobAccessDto {
    pub allowed: bool,
}
