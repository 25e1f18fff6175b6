//! Browser lifecycle management using Chrome DevTools Protocol

use crate::console::{self, ConsoleEntry};
use crate::locator::Locator;
use headless_chrome::{Browser, LaunchOptions, Tab};
use shopcheck_core::{CheckError, Result};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How often polling waits re-evaluate their condition
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// One browser process plus one tab, used for the entire verification run.
/// The console-error observer is attached at launch, before any navigation.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Console errors captured since launch, ordered, bounded
    console_errors: Arc<Mutex<Vec<ConsoleEntry>>>,
}

impl BrowserSession {
    /// Launch a new browser instance and attach the console observer
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| CheckError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| CheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| CheckError::Browser(format!("Failed to create tab: {}", e)))?;

        // Observer goes on before the first navigation so load-time errors
        // are not missed.
        let console_errors = Arc::new(Mutex::new(Vec::new()));
        console::attach(&tab, Arc::clone(&console_errors))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            console_errors,
        })
    }

    /// Navigate to a URL and wait for the navigation to commit
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| CheckError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| CheckError::Browser(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Wait until the page's network activity quiesces
    ///
    /// CDP has no single "network idle" signal, so this treats the page as
    /// idle once `document.readyState` is complete and the resource-timing
    /// entry count stays unchanged for a full quiet window. Bounded by
    /// `timeout`; callers decide whether expiry is fatal.
    pub async fn wait_for_idle(&self, timeout: Duration, quiet_period: Duration) -> Result<()> {
        debug!(
            "Waiting for network idle (timeout: {:?}, quiet: {:?})",
            timeout, quiet_period
        );

        let deadline = Instant::now() + timeout;
        let mut last_count: i64 = -1;
        let mut stable_since: Option<Instant> = None;

        loop {
            let ready = self
                .evaluate_script("document.readyState")
                .await?
                .as_str()
                .map(|s| s == "complete")
                .unwrap_or(false);

            let count = self
                .evaluate_script("performance.getEntriesByType('resource').length")
                .await?
                .as_i64()
                .unwrap_or(0);

            if ready && count == last_count {
                let since = stable_since.get_or_insert_with(Instant::now);
                if since.elapsed() >= quiet_period {
                    debug!("Network idle after {} resource entries", count);
                    return Ok(());
                }
            } else {
                stable_since = None;
                last_count = count;
            }

            if Instant::now() >= deadline {
                return Err(CheckError::Browser(format!(
                    "Network did not go idle within {:?}",
                    timeout
                )));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Click the element described by `locator`, waiting for it to become
    /// visible within `timeout`
    pub async fn click(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        debug!("Clicking {} (timeout: {:?})", locator, timeout);

        let script = locator.click_script();
        let deadline = Instant::now() + timeout;

        loop {
            let clicked = self
                .evaluate_script(&script)
                .await?
                .as_bool()
                .unwrap_or(false);

            if clicked {
                info!("Clicked {}", locator);
                return Ok(());
            }

            if Instant::now() >= deadline {
                return Err(CheckError::ElementNotFound(locator.to_string()));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Check once whether the element described by `locator` is visible
    pub async fn is_visible(&self, locator: &Locator) -> Result<bool> {
        let visible = self
            .evaluate_script(&locator.visible_probe())
            .await?
            .as_bool()
            .unwrap_or(false);

        debug!("{} visible: {}", locator, visible);
        Ok(visible)
    }

    /// Wait until any of `locators` becomes visible, returning the index of
    /// the first one that does
    pub async fn wait_any_visible(&self, locators: &[Locator], timeout: Duration) -> Result<usize> {
        debug!("Waiting for any of {} locators (timeout: {:?})", locators.len(), timeout);

        let deadline = Instant::now() + timeout;

        loop {
            for (index, locator) in locators.iter().enumerate() {
                if self.is_visible(locator).await? {
                    return Ok(index);
                }
            }

            if Instant::now() >= deadline {
                let described: Vec<String> = locators.iter().map(|l| l.to_string()).collect();
                return Err(CheckError::AssertionTimeout(format!(
                    "none of [{}] became visible within {:?}",
                    described.join(", "),
                    timeout
                )));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Execute JavaScript in the page context
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| CheckError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Full rendered page markup, for failure diagnosis
    pub async fn page_content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(|e| CheckError::Browser(format!("Failed to get page content: {}", e)))
    }

    /// Snapshot of console errors captured so far
    pub fn console_errors(&self) -> Vec<ConsoleEntry> {
        self.console_errors
            .lock()
            .map(|buf| buf.clone())
            .unwrap_or_default()
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped here and the process is cleaned up
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
