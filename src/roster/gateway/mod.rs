//! # Remote Gateway
//!
//! This module defines the client abstraction over the backend's four
//! endpoints. The [`RecordGateway`] trait allows the application to work
//! with different transports.
//!
//! ## Design Rationale
//!
//! The gateway is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryGateway` (no network needed)
//! - Keep reconciliation logic **decoupled** from transport details
//!
//! ## Implementations
//!
//! - [`http::HttpGateway`]: Production HTTP client over a configured base
//!   endpoint. JSON bodies in both directions, non-2xx statuses mapped to
//!   `RosterError::Remote`.
//!
//! - [`memory::InMemoryGateway`]: In-memory backend for testing. Assigns ids
//!   on create the way a server would and can be switched into a failing
//!   mode to exercise error paths.
//!
//! ## Failure Contract
//!
//! Every operation is a single attempt. Failures propagate to the caller
//! untouched: no retries, no caching, no client-side timeout. The gateway
//! never holds state beyond its configuration.

use crate::error::Result;
use crate::model::Student;

pub mod http;
pub mod memory;

/// Abstract interface over the backend's record endpoints.
pub trait RecordGateway {
    /// Fetch the full record collection
    fn fetch_all(&self) -> Result<Vec<Student>>;

    /// Create a record; the server assigns the id
    fn create(&mut self, student: &Student) -> Result<Student>;

    /// Replace the record with the given id
    fn update(&mut self, id: &str, student: &Student) -> Result<Student>;

    /// Delete the record with the given id
    fn remove(&mut self, id: &str) -> Result<()>;
}
