//! API configuration resolved at build time.
//!
//! The browser has no process environment, so the base address is baked in
//! from `ECOMMERCE_API` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the `ECOMMERCE_API` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("ECOMMERCE_API"))
    }

    /// Build config from a raw base address.
    ///
    /// Blank or absent values fall back to [`DEFAULT_API_BASE_URL`]; trailing
    /// slashes are dropped so paths can be joined with a single `/`.
    pub fn from_value(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_owned();
        Self { base_url }
    }

    /// Join `path` onto the base address.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
