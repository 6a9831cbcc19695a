//! Shared API types

mod error;
mod json;
mod path;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use path::Path;
