//! Envoy Log Viewer (elv)
//!
//! Interactive terminal viewer for Envoy JSON access logs.
//!
//! The pure core (parsing, filtering, state transitions, rendering into a
//! buffer) is separated from the impure shell (input sources, terminal,
//! logging setup) so that every transition and frame can be tested without a
//! real terminal.

pub mod annotate;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

// Startup glue between sources, parser and view state
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
