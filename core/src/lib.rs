//! TerraWatch social core
//!
//! Client-side core of the TerraWatch land-management dashboard. Merges
//! photo, video, text and activity records from the REST backend into a
//! single normalized, chronologically ordered social feed, with one-level
//! comment threads and like toggling.
//!
//! Uses hexagonal (ports & adapters) architecture: the backend API is a
//! port trait (`SocialApi`) with a reqwest adapter and in-memory mocks.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;
