// Application layer - shared error type for the exporter and its readers

pub mod error;

pub use error::*;
