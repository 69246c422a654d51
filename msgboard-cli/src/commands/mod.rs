//! Command implementations for the msgboard CLI

pub mod serve;

pub use serve::run_serve;
