// Prompt constants for conversation-starter generation.

/// Starter prompt template. Replace `{employer}`, `{role}` and
/// `{grounding_instruction}` before sending.
pub const STARTERS_PROMPT_TEMPLATE: &str = "Given employer '{employer}' and role '{role}', \
    write 3 short, specific conversation starters for a student at a career fair. \
    {grounding_instruction} Keep each under 18 words.";
