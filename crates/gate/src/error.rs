// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use std::fmt;

/// Error codes for the roomgate HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    Configuration,
    Internal,
}

impl GateError {
    pub fn http_status(&self) -> u16 {
        match self {
            // Missing server config is the operator's problem, not the caller's.
            Self::Configuration => 500,
            Self::Internal => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }

    /// Plain-text error response carrying `message` as the body.
    pub fn to_http_response(
        &self,
        message: impl Into<String>,
    ) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(CONTENT_TYPE, "text/plain; charset=utf-8")], message.into())
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure while issuing a participant token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// A required LiveKit variable is unset. Carries the variable name.
    Configuration(&'static str),
    /// Identity or room name was empty.
    InvalidInput(String),
    /// Claims could not be serialized.
    Encode(String),
}

impl IssueError {
    pub fn code(&self) -> GateError {
        match self {
            Self::Configuration(_) => GateError::Configuration,
            Self::InvalidInput(_) | Self::Encode(_) => GateError::Internal,
        }
    }
}

impl fmt::Display for IssueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(var) => write!(f, "{var} is not defined"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Encode(msg) => write!(f, "failed to encode token: {msg}"),
        }
    }
}

impl std::error::Error for IssueError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
