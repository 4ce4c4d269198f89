use std::time::Duration;

/// Upper bound on a single completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sampling parameters for one workflow's completion call.
/// # Default Values
/// - `temperature`: 0.7
/// - `max_tokens`: 1000
/// - `timeout`: 60 seconds
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    /// Amount of randomness injected into the response. Ranges from 0.0 to 1.0
    pub temperature: f64,
    /// Ceiling on generated tokens.
    pub max_tokens: u32,
    /// How long to wait for the model before giving up.
    pub timeout: Duration,
}

impl CompletionParams {
    pub const BLUEPRINT: Self = Self::new(0.7, 2000);
    pub const INSIGHTS: Self = Self::new(0.7, 800);
    pub const CHAT: Self = Self::new(0.7, 500);
    pub const DESCRIPTION: Self = Self::new(0.8, 150);

    #[must_use]
    pub const fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the temperature for sampling
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the output token ceiling
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the call timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self::new(0.7, 1000)
    }
}
