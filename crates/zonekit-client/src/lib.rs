//! # ZoneKit Client
//!
//! Typed HTTP client for the registry service backing the admin
//! application. Two endpoint families:
//!
//! - `/polygons`: list/create/delete of zone boundary records
//!   ([`polygons`])
//! - `/citizens`: CRUD over citizen records ([`citizens`])
//!
//! Store access is behind the [`PolygonStore`] and [`CitizenStore`]
//! traits; the `Http*` implementations share one [`ApiClient`] built
//! from an [`ApiConfig`]. Errors carry endpoint context and are logged
//! at the client boundary. Nothing here retries; retry policy belongs
//! to the caller.

pub mod citizens;
pub mod config;
pub mod error;
pub mod http;
pub mod polygons;

pub use citizens::{Citizen, CitizenStore, HttpCitizenStore, NewCitizen};
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use polygons::{CreatePolygon, HttpPolygonStore, PolygonRecord, PolygonStore};
