//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid configuration, reported before any document is fetched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Thread count must be at least 1")]
    ZeroThreads,

    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,

    #[error("User-Agent must not be empty")]
    EmptyUserAgent,
}

/// Why a census task produced no stats for its document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskFailure {
    /// The counting code panicked. The message is the panic payload when it is a string.
    #[error("census task for document {index} panicked: {message}")]
    Panicked { index: usize, message: String },

    /// The task was cancelled or could not be joined.
    #[error("census task for document {index} did not complete")]
    Aborted { index: usize },
}

impl TaskFailure {
    pub fn index(&self) -> usize {
        match self {
            TaskFailure::Panicked { index, .. } | TaskFailure::Aborted { index } => *index,
        }
    }
}

/// Types of errors that can occur while fetching or counting a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Body larger than MAX_RESPONSE_BODY_SIZE, counted as empty
    ResponseBodyTooLarge,
    // Census task errors
    CensusTaskPanicked,
    CensusTaskAborted,
}

/// Types of warnings that can occur during a run.
///
/// Warnings don't stop a document from being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    InvalidUrl,    // Input line skipped by URL validation
    EmptyDocument, // Fetched body was empty (counts are all zero)
}

/// Types of informational metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    NonSuccessStatus,   // Body of a non-2xx response was counted anyway
    WorkerLimitClamped, // Requested threads exceeded available parallelism
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ResponseBodyTooLarge => "Response body too large",
            ErrorType::CensusTaskPanicked => "Census task panicked",
            ErrorType::CensusTaskAborted => "Census task aborted",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::InvalidUrl => "Invalid URL skipped",
            WarningType::EmptyDocument => "Empty document",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::NonSuccessStatus => "Non-success HTTP status",
            InfoType::WorkerLimitClamped => "Worker limit clamped",
        }
    }
}
