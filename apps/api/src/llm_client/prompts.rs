// Shared prompt fragments for generation calls.
// Each feature that calls the generator keeps its own prompts.rs alongside it.

/// Appended to every prompt whose response is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only \
    (no markdown, no code blocks, no text outside the JSON object).";
