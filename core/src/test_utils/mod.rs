//! Shared test helpers: wire-record fixtures and an in-memory backend.
//!
//! Mocks are hand-rolled so tests can queue exact server responses and
//! inspect exactly what was sent.

pub mod fixtures;
pub mod mocks;
