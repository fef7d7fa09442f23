//! Polygon endpoints of the registry service.
//!
//! The service owns polygon records: it assigns `id` and `createdAt` on
//! creation and is the sole source of truth for the persisted list. The
//! client never updates a polygon after creation; the API exposes no
//! update route for them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geojson::Geometry;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::ApiClient;

/// A persisted polygon record as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonRecord {
    /// Server-assigned identifier, immutable.
    pub id: i64,
    /// User-supplied display name.
    pub name: String,
    /// Boundary as a geographic GeoJSON polygon.
    pub geometry: Geometry,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePolygon {
    pub name: String,
    pub geometry: Geometry,
}

/// Access to the remote polygon store.
///
/// The map editor is written against this trait so tests can drive it
/// with an in-memory fake instead of a live service.
#[async_trait]
pub trait PolygonStore: Send + Sync {
    /// Fetches the full polygon list.
    async fn list(&self) -> Result<Vec<PolygonRecord>, ApiError>;

    /// Creates a polygon; the service assigns id and timestamp.
    async fn create(&self, polygon: CreatePolygon) -> Result<PolygonRecord, ApiError>;

    /// Deletes a polygon by id.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// [`PolygonStore`] implementation over the live HTTP API.
#[derive(Debug, Clone)]
pub struct HttpPolygonStore {
    client: ApiClient,
}

impl HttpPolygonStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PolygonStore for HttpPolygonStore {
    async fn list(&self) -> Result<Vec<PolygonRecord>, ApiError> {
        self.client.get_json("/polygons").await
    }

    async fn create(&self, polygon: CreatePolygon) -> Result<PolygonRecord, ApiError> {
        self.client.post_json("/polygons", &polygon).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/polygons/{id}")).await
    }
}
