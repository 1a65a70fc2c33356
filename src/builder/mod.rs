//! Builder API for configuring calculator engines.
//!
//! The builder validates an [`EngineConfig`](crate::EngineConfig) before
//! handing it to the engine, so a built engine always has a usable
//! display cap, precision and error marker.

pub mod engine;
pub mod error;

pub use engine::{validate, EngineBuilder, MAX_PRECISION};
pub use error::BuildError;
