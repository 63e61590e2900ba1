//! Session configuration

/// Prompt shown before each command in interactive mode
pub const DEFAULT_PROMPT: &str = "YT> ";

/// Configuration for an interactive or scripted session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for PLAY_RANDOM (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Prompt written before reading each command (empty = no prompt)
    pub prompt: String,

    /// Echo every command line back to the output
    pub echo: bool,
}

impl SessionConfig {
    /// Create the default interactive configuration
    pub fn new() -> Self {
        Self {
            seed: None,
            prompt: DEFAULT_PROMPT.to_string(),
            echo: false,
        }
    }

    /// Use a fixed seed for random playback
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Echo commands as they are read
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
