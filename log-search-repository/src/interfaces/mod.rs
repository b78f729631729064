//! Interface definitions for the search engine transport.
//!
//! This module defines the abstract `SearchEngineTransport` trait that allows
//! for dependency injection and swappable search backend implementations.

mod search_engine_transport;

pub use search_engine_transport::SearchEngineTransport;
