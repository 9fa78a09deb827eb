use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub scheduling: SchedulingConfig,
    pub session: SessionConfig,
    pub backend: BackendConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub max_rows: i32,
    pub max_columns: i32,
    pub default_seat_type_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Minimum idle minutes between two showtimes in the same room.
    pub min_gap_minutes: i64,
    /// Trailer/ad allowance a screening may add on top of the runtime.
    pub buffer_minutes: i64,
    /// How far in the future a showtime must start.
    pub min_lead_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    pub interval_seconds: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_rows: 20,
            max_columns: 20,
            default_seat_type_id: 1,
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            min_gap_minutes: 15,
            buffer_minutes: 30,
            min_lead_minutes: 60,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_minutes: 5 }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 15,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            scheduling: SchedulingConfig::default(),
            session: SessionConfig::default(),
            backend: BackendConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the environment over the defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let layout = LayoutConfig::default();
        let scheduling = SchedulingConfig::default();
        let session = SessionConfig::default();
        let backend = BackendConfig::default();
        let refresh = RefreshConfig::default();

        Self {
            layout: LayoutConfig {
                max_rows: env_parse("MAX_ROWS", layout.max_rows),
                max_columns: env_parse("MAX_COLUMNS", layout.max_columns),
                default_seat_type_id: env_parse(
                    "DEFAULT_SEAT_TYPE_ID",
                    layout.default_seat_type_id,
                ),
            },
            scheduling: SchedulingConfig {
                min_gap_minutes: env_parse("MIN_GAP_MINUTES", scheduling.min_gap_minutes),
                buffer_minutes: env_parse("SHOWTIME_BUFFER_MINUTES", scheduling.buffer_minutes),
                min_lead_minutes: env_parse("MIN_LEAD_MINUTES", scheduling.min_lead_minutes),
            },
            session: SessionConfig {
                ttl_minutes: env_parse("SESSION_TTL_MINUTES", session.ttl_minutes),
            },
            backend: BackendConfig {
                base_url: env::var("BACKEND_BASE_URL").unwrap_or(backend.base_url),
                timeout_seconds: env_parse("BACKEND_TIMEOUT_SECONDS", backend.timeout_seconds),
            },
            refresh: RefreshConfig {
                interval_seconds: env_parse("REFRESH_INTERVAL_SECONDS", refresh.interval_seconds),
            },
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{} must be a valid number", key)),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.layout.max_rows, 20);
        assert_eq!(config.layout.max_columns, 20);
        assert_eq!(config.scheduling.min_gap_minutes, 15);
        assert_eq!(config.scheduling.buffer_minutes, 30);
        assert_eq!(config.scheduling.min_lead_minutes, 60);
        assert_eq!(config.session.ttl_minutes, 5);
        assert_eq!(config.refresh.interval_seconds, 15);
        assert_eq!(config.backend.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn env_parse_reads_override() {
        env::set_var("SCREENING_TEST_ENV_PARSE", "42");
        assert_eq!(env_parse("SCREENING_TEST_ENV_PARSE", 7i64), 42);
        env::remove_var("SCREENING_TEST_ENV_PARSE");
    }

    #[test]
    fn env_parse_falls_back_when_unset() {
        assert_eq!(env_parse("SCREENING_TEST_UNSET_VAR", 7i64), 7);
    }
}
