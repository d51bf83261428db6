//! HTTP route handlers

pub mod qa;
pub mod words;
