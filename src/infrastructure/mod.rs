// src/infrastructure/mod.rs
pub mod time;
