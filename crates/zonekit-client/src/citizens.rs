//! Citizen record endpoints of the registry service.
//!
//! Plain CRUD over `/citizens`. Unlike polygons, citizen records are
//! updatable in place.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::ApiClient;

/// A citizen record as stored by the service.
///
/// `birth_date` stays a string on this side of the boundary; the service
/// returns it as an ISO-8601 timestamp and the table layer only ever
/// formats it for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citizen {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub fin: String,
    pub serial_no: String,
    pub birth_date: String,
}

/// Citizen fields without the server-assigned id, for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCitizen {
    pub name: String,
    pub surname: String,
    pub fin: String,
    pub serial_no: String,
    pub birth_date: String,
}

/// Access to the remote citizen store.
#[async_trait]
pub trait CitizenStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Citizen>, ApiError>;
    async fn get(&self, id: i64) -> Result<Citizen, ApiError>;
    async fn create(&self, citizen: NewCitizen) -> Result<Citizen, ApiError>;
    async fn update(&self, id: i64, citizen: Citizen) -> Result<Citizen, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// [`CitizenStore`] implementation over the live HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCitizenStore {
    client: ApiClient,
}

impl HttpCitizenStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CitizenStore for HttpCitizenStore {
    async fn list(&self) -> Result<Vec<Citizen>, ApiError> {
        self.client.get_json("/citizens").await
    }

    async fn get(&self, id: i64) -> Result<Citizen, ApiError> {
        self.client.get_json(&format!("/citizens/{id}")).await
    }

    async fn create(&self, citizen: NewCitizen) -> Result<Citizen, ApiError> {
        self.client.post_json("/citizens", &citizen).await
    }

    async fn update(&self, id: i64, citizen: Citizen) -> Result<Citizen, ApiError> {
        self.client.put_json(&format!("/citizens/{id}"), &citizen).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/citizens/{id}")).await
    }
}
