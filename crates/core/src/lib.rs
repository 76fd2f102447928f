//! Core types and helpers for stardex
//!
//! Domain types shared by the storage, service and HTTP crates, plus the
//! pure pieces of the catalog: page arithmetic, number formatting and
//! search query sanitization.

mod analytics;
pub mod constants;
pub mod env_config;
mod error;
mod format;
mod item;
mod pagination;
mod sanitize;

pub use analytics::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use format::*;
pub use item::*;
pub use pagination::*;
pub use sanitize::*;
