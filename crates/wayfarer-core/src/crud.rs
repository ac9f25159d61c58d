// ── Generic CRUD actions ──
//
// One factory per entity type: create, update, and delete against the
// backend's generic `crud` action, each mirrored into the local
// collection only after the backend confirms success. A failed call
// leaves local state untouched and returns `false`; nothing raises
// past this layer.

use serde::Serialize;
use tracing::warn;

use wayfarer_api::{ApiClient, CrudRequest, CrudResponse};

use crate::model::Record;
use crate::store::EntityCollection;

/// Confirm-then-mutate CRUD actions for one entity type.
///
/// Borrowed from the [`Hub`](crate::Hub) per call; holds the backend
/// table identifier (via [`Record::TABLE`]) and the local collection to
/// mirror confirmed mutations into.
pub struct CrudHandle<'a, T: Record + Serialize> {
    client: &'a ApiClient,
    collection: &'a EntityCollection<T>,
}

impl<'a, T: Record + Serialize> CrudHandle<'a, T> {
    pub(crate) fn new(client: &'a ApiClient, collection: &'a EntityCollection<T>) -> Self {
        Self { client, collection }
    }

    /// Create a record. The input's id is ignored by the backend; on
    /// success the record is appended locally carrying the
    /// backend-assigned id.
    pub async fn add(&self, mut item: T) -> bool {
        let result: Result<CrudResponse, _> = self
            .client
            .post("crud", &CrudRequest::create(T::TABLE, &item))
            .await;

        match result {
            Ok(res) if res.success => {
                if let Some(id) = res.id {
                    item.set_id(id);
                }
                self.collection.push(item);
                true
            }
            Ok(res) => rejected(T::TABLE, "create", res.error.as_deref()),
            Err(e) => failed(T::TABLE, "create", &e),
        }
    }

    /// Update a record by id. On success the matching local record is
    /// replaced in place, preserving collection order.
    pub async fn update(&self, item: T) -> bool {
        let result: Result<CrudResponse, _> = self
            .client
            .post("crud", &CrudRequest::update(T::TABLE, &item))
            .await;

        match result {
            Ok(res) if res.success => {
                self.collection.replace(item);
                true
            }
            Ok(res) => rejected(T::TABLE, "update", res.error.as_deref()),
            Err(e) => failed(T::TABLE, "update", &e),
        }
    }

    /// Delete a record by id. On success the matching local record is
    /// filtered out.
    pub async fn remove(&self, id: &str) -> bool {
        let result: Result<CrudResponse, _> = self
            .client
            .post("crud", &CrudRequest::delete(T::TABLE, id))
            .await;

        match result {
            Ok(res) if res.success => {
                self.collection.remove(id);
                true
            }
            Ok(res) => rejected(T::TABLE, "delete", res.error.as_deref()),
            Err(e) => failed(T::TABLE, "delete", &e),
        }
    }
}

fn rejected(table: &str, op: &str, error: Option<&str>) -> bool {
    warn!(table, op, error = error.unwrap_or("unconfirmed"), "crud rejected by backend");
    false
}

fn failed(table: &str, op: &str, error: &wayfarer_api::Error) -> bool {
    warn!(table, op, error = %error, "crud call failed");
    false
}
