use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// API Key for the chat completion provider
    #[arg(long, env = "CHAT_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gpt-3.5-turbo, gpt-4o)
    #[arg(long, env = "CHAT_MODEL")] // No default, rely on adapter default if None
    pub chat_model: Option<String>,

    /// Base URL for the chat completion API (e.g., https://api.openai.com/v1)
    #[arg(long, env = "CHAT_BASE_URL")] // No default, rely on adapter default if None
    pub chat_base_url: Option<String>,

    // --- Translation LLM Provider Args (Optional) ---
    /// API Key for the translation provider. Defaults to CHAT_API_KEY if not set.
    #[arg(long, env = "TRANSLATE_API_KEY")]
    pub translate_api_key: Option<String>,

    /// Model name for translation. Defaults to CHAT_MODEL if not set.
    #[arg(long, env = "TRANSLATE_MODEL")]
    pub translate_model: Option<String>,

    // --- Conversation Args ---
    /// Number of most recent history messages sent to the provider per turn. 0 sends the full history.
    #[arg(long, env = "HISTORY_LIMIT", default_value = "50")]
    pub history_limit: usize,

    // --- General App Args ---
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:3000")]
    pub server_addr: String,

    /// Directory containing the HTML pages served at the site root.
    #[arg(long, env = "PAGES_DIR", default_value = "templates")]
    pub pages_dir: String,

    /// Directory containing the assets served under /static.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,
}
