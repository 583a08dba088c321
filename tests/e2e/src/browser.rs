use anyhow::{anyhow, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;

/// A headless Chrome tab pointed at one running site.
pub struct SiteTab {
    _browser: Browser,
    tab: Arc<Tab>,
    base_url: String,
}

impl SiteTab {
    pub fn open(base_url: &str) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|err| anyhow!("chrome launch options: {err}"))?;
        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;

        Ok(Self {
            _browser: browser,
            tab,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Load `path` relative to the site root and wait for navigation.
    pub fn visit(&self, path: &str) -> Result<&Self> {
        self.tab.navigate_to(&format!("{}{path}", self.base_url))?;
        self.tab.wait_until_navigated()?;
        Ok(self)
    }

    pub fn reload(&self) -> Result<&Self> {
        self.tab.reload(false, None)?;
        self.tab.wait_until_navigated()?;
        Ok(self)
    }

    /// Inner text of the first match, waiting for the wasm app to render it.
    pub fn text(&self, selector: &str) -> Result<String> {
        Ok(self.tab.wait_for_element(selector)?.get_inner_text()?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        self.tab.wait_for_element(selector)?.click()?;
        Ok(())
    }

    /// Evaluate a JS expression that yields a string or null.
    pub fn js_string(&self, expression: &str) -> Result<Option<String>> {
        let result = self.tab.evaluate(expression, false)?;
        match result.value {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(Value::Null) | None => Ok(None),
            Some(other) => Err(anyhow!("`{expression}` returned {other}")),
        }
    }
}
