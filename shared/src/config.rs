pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub data_dir: String,
}

impl Config {
    const DEFAULT_DATA_DIR: &str = "./data";

    pub fn from_env() -> Self {
        let host = std::env::var("ROSTER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = std::env::var("ROSTER_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);
        Self {
            host,
            http_port,
            data_dir: std::env::var("ROSTER_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
        }
    }
}
