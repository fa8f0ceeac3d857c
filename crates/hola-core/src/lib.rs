//! Core state and settings for the Hola Mundo demo

pub mod config;
pub mod dialog;
pub mod error;
pub mod state;

// Re-export main types for convenience
pub use config::*;
pub use dialog::*;
pub use error::*;
pub use state::*;
