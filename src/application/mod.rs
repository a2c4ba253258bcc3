// src/application/mod.rs
pub mod dto;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
