// src/tools/mod.rs
pub mod research;
pub mod asset;
pub mod trending;
