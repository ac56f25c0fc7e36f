//! Error types for agenda-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Event store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
