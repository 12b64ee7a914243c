// src/lib.rs

//! Kyuko: school portal cancelled-class checker

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
