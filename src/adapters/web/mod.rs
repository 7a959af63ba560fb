//! HTTP surface. axum router over the recommendation port.

pub mod error;
pub mod handlers;
pub mod server;
pub mod uploads;

pub use error::{ApiError, ApiResult};
pub use handlers::AppState;
pub use server::{create_router, serve};
pub use uploads::{StoredUpload, UploadStore};
