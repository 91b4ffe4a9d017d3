use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::selector::Selector;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    /// Waits until at least one element matches.
    pub fn wait_for(&self, selector: &Selector) -> Result<()> {
        self.wait_until(selector, |page| Ok(page.count(selector)? > 0))
    }

    pub fn count(&self, selector: &Selector) -> Result<usize> {
        let count = self.eval(&selector.to_count_query())?;
        Ok(count.as_u64().unwrap_or(0) as usize)
    }

    pub fn text(&self, selector: &Selector) -> Result<String> {
        self.wait_for(selector)?;
        self.string_property(selector, "innerText")
    }

    pub fn value(&self, selector: &Selector) -> Result<String> {
        self.wait_for(selector)?;
        self.string_property(selector, "value")
    }

    pub fn is_disabled(&self, selector: &Selector) -> Result<bool> {
        self.wait_for(selector)?;
        let value = self.eval(&format!("!!({})?.disabled", selector.to_query()))?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub fn has_class(&self, selector: &Selector, class: &str) -> Result<bool> {
        self.wait_for(selector)?;
        let value = self.eval(&format!(
            "!!({})?.classList.contains({class:?})",
            selector.to_query()
        ))?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub fn click(&self, selector: &Selector) -> Result<()> {
        match selector {
            Selector::Css(css) => {
                let element = self.tab.wait_for_element(css)?;
                element.click()?;
            }
            Selector::CssWithText { .. } => {
                self.wait_for(selector)?;
                self.eval(&format!("({}).click()", selector.to_query()))?;
            }
        }
        Ok(())
    }

    /// Selects local files in a file input, firing its `change` event.
    pub fn set_files(&self, selector: &Selector, paths: &[&str]) -> Result<()> {
        let element = self.tab.wait_for_element(selector.css_part())?;
        element.set_input_files(paths)?;
        Ok(())
    }

    /// Polls `condition` until it holds or the default timeout runs out.
    pub fn wait_until<F>(&self, selector: &Selector, mut condition: F) -> Result<()>
    where
        F: FnMut(&Self) -> Result<bool>,
    {
        let deadline = Instant::now() + DEFAULT_TIMEOUT;
        loop {
            if condition(self)? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                anyhow::bail!("timed out after {DEFAULT_TIMEOUT:?} waiting on {selector}");
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn string_property(&self, selector: &Selector, property: &str) -> Result<String> {
        let value = self.eval(&format!("({})?.{property} ?? null", selector.to_query()))?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    fn eval(&self, expression: &str) -> Result<Value> {
        let object = self.tab.evaluate(expression, false)?;
        Ok(object.value.unwrap_or(Value::Null))
    }
}
