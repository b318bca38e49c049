use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub read_latency_ms: u64,
    pub write_latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub demo_password: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,  // cookie only sent over https
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: usize, // in bytes
}

impl StoreConfig {
    pub fn read_latency(&self) -> Duration {
        Duration::from_millis(self.read_latency_ms)
    }

    pub fn write_latency(&self) -> Duration {
        Duration::from_millis(self.write_latency_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // e.g. APP__SERVER__PORT=8080
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
impl Config {
    /// Zero latency and the cheapest bcrypt cost so tests stay fast.
    pub fn for_tests() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
            store: StoreConfig {
                read_latency_ms: 0,
                write_latency_ms: 0,
            },
            auth: AuthConfig {
                demo_password: "1234".into(),
                bcrypt_cost: 4,
            },
            session: SessionConfig {
                cookie_name: "session".into(),
                secure: false,
            },
            http: HttpConfig {
                max_body_size: 64 * 1024,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_file() {
        let config = Config::load().unwrap();
        assert_eq!(config.auth.demo_password, "1234");
        assert_eq!(config.store.read_latency(), Duration::from_millis(300));
        assert_eq!(config.store.write_latency(), Duration::from_millis(500));
        assert_eq!(config.session.cookie_name, "session");
        assert!(!config.session.secure);
    }
}
