//! Error and data types shared across the codec.

pub mod error;
pub mod models;
