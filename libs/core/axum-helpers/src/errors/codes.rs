//! Error codes attached to every logged error response.
//!
//! The code never reaches the client body. It is recorded as the
//! `error_code` field on the log event so dashboards can group failures.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
//! assert_eq!(ErrorCode::Conflict.code(), 1008);
//! ```

use serde::Serialize;
use strum::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed validation
    ValidationError,

    /// Referenced resource does not exist
    NotFound,

    /// Request conflicts with existing state (duplicate key)
    Conflict,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency (database) is not reachable
    ServiceUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Integer code for logs and metrics.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::Conflict => 1008,
            Self::InternalError => 5000,
            Self::ServiceUnavailable => 5003,
        }
    }
}
