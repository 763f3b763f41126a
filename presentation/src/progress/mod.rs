//! Progress reporters implementing the application progress port

pub mod reporter;

pub use reporter::ConsoleProgress;
