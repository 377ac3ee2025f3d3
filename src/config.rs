// ./src/config.rs

use std::env;

/// Where the server listens when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Environment variable that overrides the bind address.
pub const BIND_ENV_VAR: &str = "ECHOFORM_BIND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_owned(),
        }
    }
}

/// Defaults first, then the environment override. The handler core never
/// sees any of this; it only shapes where the listener binds.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(v) = env::var(BIND_ENV_VAR) {
        settings.bind_addr = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_is_local() {
        assert_eq!(Settings::default().bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn environment_overrides_the_default() {
        env::set_var(BIND_ENV_VAR, "0.0.0.0:8080");
        let settings = load_settings();
        env::remove_var(BIND_ENV_VAR);

        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    }
}
