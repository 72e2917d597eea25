// src/lib.rs

//! OEIS Tracker Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
