// src/lib.rs

pub mod api;
pub mod config;
pub mod llm;
pub mod phrases;
pub mod state;
pub mod store;
