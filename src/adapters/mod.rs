//! Infrastructure adapters. Implement outbound ports, expose the inbound one.
//!
//! Oracle HTTP client, image handling, web surface. Map errors to DomainError.

pub mod imaging;
pub mod oracle;
pub mod web;
