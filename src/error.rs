use std::io;

use thiserror::Error;

use crate::window::WindowId;

/// Returned by the strict registry lookups. The registry mutators never
/// produce it; they ignore unknown ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no window with id {0}")]
    UnknownWindow(WindowId),
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("unknown app `{0}`")]
    UnknownApp(String),
    #[error("cannot open log file: {0}")]
    Log(String),
}
