//! Build errors for builders in this module.

use thiserror::Error;

/// Errors that can occur when building counter banks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("No buttons requested. Call .buttons(n) with n > 0 before .build()")]
    NoButtons,
}
