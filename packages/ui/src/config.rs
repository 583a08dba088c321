use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_value(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Site settings. The wasm bundle has no process environment, so values are
/// captured from the build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub mode: AppMode,
    pub submit_delay: Duration,
    pub toast_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::Production,
            submit_delay: Duration::from_millis(2000),
            toast_ttl: Duration::from_millis(5000),
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "APP_MODE" => option_env!("APP_MODE"),
            "SITE_SUBMIT_DELAY_MS" => option_env!("SITE_SUBMIT_DELAY_MS"),
            "SITE_TOAST_TTL_MS" => option_env!("SITE_TOAST_TTL_MS"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            mode: AppMode::from_value(lookup("APP_MODE")),
            submit_delay: millis(lookup("SITE_SUBMIT_DELAY_MS")).unwrap_or(defaults.submit_delay),
            toast_ttl: millis(lookup("SITE_TOAST_TTL_MS")).unwrap_or(defaults.toast_ttl),
        }
    }
}

fn millis(value: Option<&str>) -> Option<Duration> {
    value?.trim().parse::<u64>().ok().map(Duration::from_millis)
}
