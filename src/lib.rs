//! clipkeep binary support: command line, configuration loading, tracing and
//! dependency wiring.

pub mod bootstrap;
pub mod cli;
