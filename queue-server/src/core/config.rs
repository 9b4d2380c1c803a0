//! Server configuration

/// Runtime configuration, loaded from the environment
///
/// The two skip costs exist because the original product priced the
/// same operation differently per flow (cooking game vs. queue status
/// screen). Both are configuration, not constants baked into the core.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub environment: String,
    /// Coins charged per skipped queue position in the cooking-game flow
    pub game_skip_cost: i64,
    /// Coins charged per skipped queue position from the queue screen
    pub queue_skip_cost: i64,
    /// Load demo menu/orders/users at startup
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            game_skip_cost: std::env::var("GAME_SKIP_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            queue_skip_cost: std::env::var("QUEUE_SKIP_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
