//! Shared test utilities used across the Borůvka crates.
//!
//! - [`tracing`] captures spans and events for instrumentation assertions.
//! - [`env`] scopes environment variable overrides to a test.
//! - [`ci`] reads the property-test run profile from the environment.

pub mod ci;
pub mod env;
pub mod tracing;
