use super::Mode;

/// Embeds the user's text into the instruction for the requested direction.
pub fn build_prompt(text: &str, mode: Mode) -> String {
    match mode {
        Mode::ToSlang => format!(
            "Translate this normal English into hockey slang. Be creative and use multiple slang terms where appropriate. Make it sound like a hockey player talking:\n\n\"{}\"",
            text
        ),
        Mode::ToEnglish => format!(
            "Translate this hockey slang into normal English. Explain what the slang means clearly:\n\n\"{}\"",
            text
        ),
    }
}
