// src/presentation/http/controllers/mod.rs
pub mod blocks;
pub mod collections;
pub mod hooks;
pub mod jobs;
