pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod io;

pub use application::AppError;
pub use domain::*;
