use tourwise_core::loyalty::LoyaltyPolicy;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Loyalty scoring weights, caps, thresholds, and tier bonuses.
    pub loyalty: LoyaltyPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Loyalty policy knobs (all optional, see [`LoyaltyPolicy`] defaults):
    /// `LOYALTY_FREQUENCY_POINTS`, `LOYALTY_FREQUENCY_CAP`,
    /// `LOYALTY_COMPLETION_POINTS`, `LOYALTY_SPEND_DIVISOR`,
    /// `LOYALTY_SPEND_CAP`, `LOYALTY_SILVER_THRESHOLD`,
    /// `LOYALTY_GOLD_THRESHOLD`, `LOYALTY_PLATINUM_THRESHOLD`,
    /// `LOYALTY_BRONZE_BONUS`, `LOYALTY_SILVER_BONUS`,
    /// `LOYALTY_GOLD_BONUS`, `LOYALTY_PLATINUM_BONUS`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let loyalty = loyalty_policy_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            loyalty,
        }
    }
}

/// Build the loyalty policy from env overrides on top of the defaults.
///
/// Tier thresholds and bonus percentages are business policy inputs, not
/// derived values, so they are tunable without touching the algorithm.
fn loyalty_policy_from_env() -> LoyaltyPolicy {
    let mut policy = LoyaltyPolicy::default();

    let mut load = |var: &str, slot: &mut f64| {
        if let Ok(raw) = std::env::var(var) {
            *slot = raw
                .parse()
                .unwrap_or_else(|_| panic!("{var} must be a valid number"));
        }
    };

    load("LOYALTY_FREQUENCY_POINTS", &mut policy.frequency_points);
    load("LOYALTY_FREQUENCY_CAP", &mut policy.frequency_cap);
    load("LOYALTY_COMPLETION_POINTS", &mut policy.completion_points);
    load("LOYALTY_SPEND_DIVISOR", &mut policy.spend_divisor);
    load("LOYALTY_SPEND_CAP", &mut policy.spend_cap);
    load("LOYALTY_SILVER_THRESHOLD", &mut policy.silver_threshold);
    load("LOYALTY_GOLD_THRESHOLD", &mut policy.gold_threshold);
    load("LOYALTY_PLATINUM_THRESHOLD", &mut policy.platinum_threshold);
    load("LOYALTY_BRONZE_BONUS", &mut policy.bronze_bonus);
    load("LOYALTY_SILVER_BONUS", &mut policy.silver_bonus);
    load("LOYALTY_GOLD_BONUS", &mut policy.gold_bonus);
    load("LOYALTY_PLATINUM_BONUS", &mut policy.platinum_bonus);

    policy
}
