//! Use cases

/// Request dispatcher
pub mod request_service;

pub use request_service::{RequestService, RequestServiceBuilder};
