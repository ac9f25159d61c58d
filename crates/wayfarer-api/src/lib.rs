// wayfarer-api: Async Rust client for the Wayfarer content backend.
//
// One endpoint, action-discriminated requests, bearer-token auth.
// Higher layers (wayfarer-core) absorb these errors into booleans
// and sentinels; this crate always reports the concrete reason.

pub mod client;
pub mod error;
pub mod protocol;
pub mod token;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use protocol::{Ack, CrudOp, CrudRequest, CrudResponse, UploadResponse, UsageResponse};
pub use token::{MemoryTokenStore, TokenStore};
pub use transport::TransportConfig;
