// Conversation starters: LLM-generated when a credential is configured,
// deterministic local templates otherwise. Never fails the request.

pub mod generator;
pub mod handlers;
pub mod prompts;
