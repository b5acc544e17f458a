//
//  roblox-cloud
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Cloud and Legacy APIs
//!
//! This module provides the pieces shared by every endpoint family: the
//! unified error type, the status code classifier, cursor pagination and
//! the JSON decoding helpers.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ResponseCode`] - The closed set of documented Open Cloud failure codes
//! - [`classify`] - Maps an HTTP status to `None` (200) or an [`ApiError`]
//! - Pagination types (re-exported from [`pagination`] submodule)
//! - Decoding helpers (re-exported from [`decode`] submodule)
//!
//! # Example
//!
//! ```rust
//! use roblox_cloud::api::common::{classify, ApiError, ResponseCode};
//!
//! assert!(classify(200, "").is_none());
//!
//! match classify(404, "{}") {
//!     Some(ApiError::Status { code: ResponseCode::NotFound, .. }) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

mod decode;
mod pagination;

pub use decode::*;
pub use pagination::*;

/// Unified error type for all Roblox API operations.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `NoApiKey` | Client construction with an empty key |
/// | `NoUserId`, `NoGroupId`, `NoRoleId` | Empty identifier argument |
/// | `NoUsername`, `NoGroupname` | Empty lookup key |
/// | `InvalidUsername`, `InvalidGroupname` | Legacy lookup did not match the key |
/// | `UserHasNoRole` | A membership search found nothing |
/// | `Status` | Non-200 response with a documented code |
/// | `Http` | Non-200 response with any other code |
/// | `Network` | Connection, TLS or body read failures |
/// | `Decode` | Unexpected JSON shape |
/// | `InvalidUrl` | An endpoint could not be parsed |
/// | `InvalidHeader` | A caller header is malformed |
/// | `MissingData` | A 200 response carried an empty result set |
///
/// Validation variants are always returned before any request is sent.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client was created without an API key.
    #[error("no api key provided")]
    NoApiKey,

    #[error("no user id provided")]
    NoUserId,

    #[error("no username provided")]
    NoUsername,

    #[error("invalid username provided")]
    InvalidUsername,

    /// No membership (or legacy role entry) links the user to the group.
    #[error("this user has no role")]
    UserHasNoRole,

    #[error("no group id provided")]
    NoGroupId,

    #[error("no group name provided")]
    NoGroupname,

    #[error("invalid group name provided")]
    InvalidGroupname,

    #[error("no role id provided")]
    NoRoleId,

    /// A documented failure code.
    ///
    /// `body` is the raw response text, kept for diagnostics only.
    #[error("http error {status}: {}: {body}", code.description())]
    Status {
        /// Numeric HTTP status
        status: u16,
        /// Classified kind
        code: ResponseCode,
        /// Raw response body
        body: String,
    },

    /// Any non-200 status outside the documented table.
    #[error("http error {status}: {body}")]
    Http {
        /// Numeric HTTP status
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A network-level error occurred during the request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The endpoint answered 200 but returned no entries.
    ///
    /// # Parameters
    ///
    /// - `0` - What was expected in the response
    #[error("response contained no {0}")]
    MissingData(&'static str),
}

impl ApiError {
    /// Returns the HTTP status carried by transport errors.
    ///
    /// # Returns
    ///
    /// - `Some(status)` for [`ApiError::Status`] and [`ApiError::Http`]
    /// - `None` for validation, network and decode errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body carried by transport errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Checks if the error is an input validation failure.
    ///
    /// Validation failures are detected locally and never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoApiKey
                | Self::NoUserId
                | Self::NoUsername
                | Self::InvalidUsername
                | Self::NoGroupId
                | Self::NoGroupname
                | Self::InvalidGroupname
                | Self::NoRoleId
        )
    }
}

/// Documented Open Cloud failure codes.
///
/// See <https://create.roblox.com/docs/cloud/reference/errors>.
///
/// | Code | Variant | Description |
/// |------|---------|-------------|
/// | 400 | `InvalidArgument` | invalid argument passed |
/// | 403 | `PermissionDenied` | missing permission scopes |
/// | 404 | `NotFound` | resource not found |
/// | 409 | `Aborted` | operation aborted |
/// | 429 | `RateLimited` | too many requests |
/// | 499 | `ClientCancelled` | system terminated request |
/// | 500 | `Internal` | the service replied with internal server error |
/// | 503 | `Unavailable` | the service is currently unavailable |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    InvalidArgument,
    PermissionDenied,
    NotFound,
    Aborted,
    RateLimited,
    ClientCancelled,
    Internal,
    Unavailable,
}

impl ResponseCode {
    /// Looks up a status code in the documented table.
    ///
    /// # Returns
    ///
    /// `None` for 200 and for every code outside the table.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::InvalidArgument),
            403 => Some(Self::PermissionDenied),
            404 => Some(Self::NotFound),
            409 => Some(Self::Aborted),
            429 => Some(Self::RateLimited),
            499 => Some(Self::ClientCancelled),
            500 => Some(Self::Internal),
            503 => Some(Self::Unavailable),
            _ => None,
        }
    }

    /// The numeric status this code is returned with.
    pub fn status(self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::PermissionDenied => 403,
            Self::NotFound => 404,
            Self::Aborted => 409,
            Self::RateLimited => 429,
            Self::ClientCancelled => 499,
            Self::Internal => 500,
            Self::Unavailable => 503,
        }
    }

    /// Fixed human-readable description used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument passed",
            Self::PermissionDenied => "missing permission scopes",
            Self::NotFound => "resource not found",
            Self::Aborted => "operation aborted",
            Self::RateLimited => "too many requests",
            Self::ClientCancelled => "system terminated request",
            Self::Internal => "the service replied with internal server error",
            Self::Unavailable => "the service is currently unavailable",
        }
    }
}

/// Classifies an HTTP response by status code alone.
///
/// Success is exactly 200. Every other code yields an error carrying the
/// numeric status and the raw body; the body is never inspected.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw response body
///
/// # Returns
///
/// - `None` - The response is a success
/// - `Some(ApiError::Status)` - A documented failure code
/// - `Some(ApiError::Http)` - Any other non-200 code
pub fn classify(status: u16, body: &str) -> Option<ApiError> {
    if status == 200 {
        return None;
    }

    Some(match ResponseCode::from_status(status) {
        Some(code) => ApiError::Status {
            status,
            code,
            body: body.to_string(),
        },
        None => ApiError::Http {
            status,
            body: body.to_string(),
        },
    })
}
