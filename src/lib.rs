// Neighborhood Match - Core Library
// Exposes the query service for the API server, the CLI client, and tests

pub mod config;
pub mod envelope;
pub mod error;
pub mod model;
pub mod preferences;
pub mod query;
pub mod seed;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "client")]
pub mod client;

// Re-export commonly used types
pub use config::{ConfigError, LatencyProfile, ServerConfig};
pub use envelope::ApiResponse;
pub use error::ApiError;
pub use model::{Demographics, NeighborhoodRecord, ScoreBand};
pub use preferences::{SearchPreferences, SearchRequest};
pub use query::{QueryError, QueryService, SearchResult};
pub use store::{NeighborhoodStore, StoreError};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};

#[cfg(feature = "client")]
pub use client::{ClientError, HealthStatus, NeighborhoodClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
