use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Management API endpoint the console talks to
    pub base_url: String,

    // Management interface
    pub web_host: String,
    pub web_port: Option<u16>,

    // Identity of the running instance
    pub instance_name: String,
    pub hostname: String,
}

impl Config {
    /// Load configuration for the status console.
    /// Panics with a clear message if required vars are missing.
    pub fn console_from_env() -> Self {
        Self {
            base_url: required_env("SFTPWATCH_BASE_URL"),
            web_host: String::new(),
            web_port: None,
            instance_name: String::new(),
            hostname: String::new(),
        }
    }

    /// Load configuration for the management interface.
    /// The interface stays down when WEB_PORT is unset.
    pub fn server_from_env() -> Self {
        let hostname = env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        Self {
            base_url: String::new(),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .ok()
                .map(|p| p.parse().expect("WEB_PORT must be a number")),
            instance_name: env::var("INSTANCE_NAME").unwrap_or_else(|_| hostname.clone()),
            hostname,
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
