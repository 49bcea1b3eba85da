//! Auxiliary build outputs: sitemap and JSON data exports.

pub mod data;
pub mod sitemap;
