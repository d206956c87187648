use std::env;

pub const DEFAULT_CORS_ORIGIN_REGEX: &str = r"https://.*\.vercel\.app";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin_regex: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin_regex: env::var("CORS_ALLOWED_ORIGIN_REGEX")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN_REGEX.to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin_regex: DEFAULT_CORS_ORIGIN_REGEX.to_string(),
            rust_log: "error".to_string(),
        }
    }
}
