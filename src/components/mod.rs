//! Reusable UI components

pub mod header;

pub use header::Header;
