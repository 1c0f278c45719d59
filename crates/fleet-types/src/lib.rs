//! Core types for fleet management

mod error;
mod kind;

pub use error::*;
pub use kind::*;
