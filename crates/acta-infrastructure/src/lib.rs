//! Infrastructure adapters for ACTA.
//!
//! Implementations of the core port traits: in-memory catalogue and session
//! store, analytics sinks, the TOML catalogue loader and the configuration
//! service.

pub mod analytics_sink;
pub mod config_service;
pub mod dto;
pub mod memory_catalogue;
pub mod memory_session_repository;
pub mod toml_catalogue;

pub use crate::analytics_sink::{InMemoryAnalyticsSink, JsonlAnalyticsSink, TracingAnalyticsSink};
pub use crate::config_service::ConfigService;
pub use crate::memory_catalogue::InMemoryCatalogue;
pub use crate::memory_session_repository::InMemorySessionRepository;
pub use crate::toml_catalogue::{Catalogue, load_catalogue, parse_catalogue};
