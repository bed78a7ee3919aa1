// Role search and employer lookup over the in-memory Record Store.
// No LLM calls here; everything is deterministic for a fixed seed.

pub mod contacts;
pub mod employer;
pub mod handlers;
pub mod matcher;
pub mod similarity;
