// src/llm/mod.rs

pub mod groq;

pub use groq::GroqClient;
