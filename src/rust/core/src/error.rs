// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Error types for the strength-test core.
//!
//! The simulation, geometry and texture paths never fail; they clamp and
//! default. Errors only appear where configuration is loaded from outside.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StrengthTestError {
    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, StrengthTestError>`.
pub type Result<T> = std::result::Result<T, StrengthTestError>;

impl From<StrengthTestError> for JsValue {
    fn from(err: StrengthTestError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
