// src/domain/mod.rs
pub mod collection;
pub mod errors;
pub mod jobs;
pub mod media;
pub mod slug;
