//! Shared helpers.

pub mod minify;
