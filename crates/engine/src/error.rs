//! The module contains the errors the engine can return.
//!
//! The ranking pipeline itself never fails. Errors only come from the edges:
//!
//! - [`InvalidAmount`] when a swap amount is malformed or below the minimum.
//! - [`SameCurrency`] when a swap is requested between a currency and itself.
//! - [`InvalidPolicy`] when a filter policy cannot be built from its settings.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`SameCurrency`]: EngineError::SameCurrency
//!  [`InvalidPolicy`]: EngineError::InvalidPolicy
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Cannot swap the same currency: {0}")]
    SameCurrency(String),
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}
