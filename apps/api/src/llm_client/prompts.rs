// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that mentions a real employer or person.
pub const GROUNDING_INSTRUCTION: &str = "Use only the given info; avoid inventing facts.";
