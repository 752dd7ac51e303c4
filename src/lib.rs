// src/lib.rs

//! prospector: professional-profile search and normalization library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
