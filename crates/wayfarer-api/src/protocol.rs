// Wire protocol types for the action-discriminated backend.
//
// Reads go out as `GET {endpoint}?action=...&param=...`; writes as
// `POST {endpoint}?action=...` with a JSON body. These types cover the
// envelopes the backend shares across actions; entity payloads live in
// wayfarer-core.

use serde::{Deserialize, Serialize};

/// CRUD operation discriminator for the generic `crud` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudOp {
    Create,
    Update,
    Delete,
}

/// Body of the generic `crud` action.
///
/// `create`/`update` carry `data`; `delete` carries only `id`.
#[derive(Debug, Serialize)]
pub struct CrudRequest<'a, T: Serialize> {
    pub table: &'a str,
    pub op: CrudOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
}

impl<'a, T: Serialize> CrudRequest<'a, T> {
    pub fn create(table: &'a str, data: &'a T) -> Self {
        Self { table, op: CrudOp::Create, data: Some(data), id: None }
    }

    pub fn update(table: &'a str, data: &'a T) -> Self {
        Self { table, op: CrudOp::Update, data: Some(data), id: None }
    }
}

impl<'a> CrudRequest<'a, ()> {
    pub fn delete(table: &'a str, id: &'a str) -> Self {
        Self { table, op: CrudOp::Delete, data: None, id: Some(id) }
    }
}

/// Response envelope for the generic `crud` action.
///
/// `id` is present only on successful `create`.
#[derive(Debug, Deserialize)]
pub struct CrudResponse {
    #[serde(default)]
    pub success: bool,
    pub id: Option<String>,
    pub error: Option<String>,
}

/// Plain success/failure acknowledgement shared by the domain-specific
/// write actions (`create_booking`, `add_subscriber`, `save_plan`,
/// `update_settings`).
#[derive(Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

/// Response to `check_ai_usage`.
#[derive(Debug, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub allowed: bool,
}

/// Response to `upload_file`.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: Option<String>,
    pub error: Option<String>,
}
