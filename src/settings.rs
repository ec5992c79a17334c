use std::env;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_PREDICT_URL: &str = "http://0.0.0.0:8000/predict/";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub predict_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            predict_url: env::var("PREDICT_URL")
                .unwrap_or_else(|_| DEFAULT_PREDICT_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-global env vars are not raced by the
    // parallel test runner.
    #[test]
    fn env_overrides_and_defaults() {
        env::remove_var("BIND_ADDR");
        env::remove_var("PREDICT_URL");
        let settings = Settings::from_env();
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(settings.predict_url, DEFAULT_PREDICT_URL);

        env::set_var("BIND_ADDR", "0.0.0.0:9999");
        env::set_var("PREDICT_URL", "http://predict.internal:8000/predict/");
        let settings = Settings::from_env();
        assert_eq!(settings.bind_addr, "0.0.0.0:9999");
        assert_eq!(
            settings.predict_url,
            "http://predict.internal:8000/predict/"
        );

        env::remove_var("BIND_ADDR");
        env::remove_var("PREDICT_URL");
    }
}
