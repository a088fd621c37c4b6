//! Opening prompt for the role-play conversation.

const OPENING_TEMPLATE: &str = "I would like you to be my conversation partner so that I can \
practice my {level} {language} language skills in a {context} context. Try to sustain \
role-playing as my conversation partner for the duration of the conversation. Please respond \
using {level} level {language} so that I can practice listening and reading. When you are \
ready, please ask me a question to begin the conversation";

/// Formats the instruction that bootstraps a practice conversation. The three
/// inputs are interpolated verbatim; nothing is validated or escaped.
pub fn conversation_opening(language: &str, level: &str, context: &str) -> String {
    OPENING_TEMPLATE
        .replace("{language}", language)
        .replace("{level}", level)
        .replace("{context}", context)
}
