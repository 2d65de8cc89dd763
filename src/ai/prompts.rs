pub const MARKER: &str = "**Amazing Prompt:**";

pub const PROMPT_TEMPLATE: &str = r#"
As an expert image prompt engineer, your task is to take a simple idea and transform it into a highly detailed, creative, and effective prompt for a state-of-the-art AI image generator.

**Instructions:**
- Expand the simple idea into a complex, descriptive prompt.
- Include specific details about lighting, style, camera angle, and mood.
- The final output should be a single, continuous sentence.
- Start the final prompt with the phrase "**Amazing Prompt:**"

**Simple Idea:** {idea}
"#;

pub const NEGATIVE_PROMPTS: &[&str] = &[
    "blurry, malformed, deformed, bad anatomy, ugly, low quality, cartoon, simple, out of frame, watermark, text",
];

pub fn build_instruction(idea: &str) -> String {
    PROMPT_TEMPLATE.replace("{idea}", idea)
}

/// Text after the last marker, trimmed. Falls back to the whole trimmed text.
pub fn extract_prompt(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.rfind(MARKER) {
        Some(idx) => trimmed[idx + MARKER.len()..].trim(),
        None => trimmed,
    }
}
