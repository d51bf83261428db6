//! Business logic services

pub mod content;
pub mod word_api;
