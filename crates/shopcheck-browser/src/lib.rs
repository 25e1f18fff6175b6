//! Browser automation for shopcheck storefront verification
//!
//! This crate drives a headless Chrome/Chromium instance over the Chrome
//! DevTools Protocol (CDP) for one-shot UI verification runs.
//!
//! # Features
//!
//! - **Session Management**: launch one browser plus one tab, closed exactly
//!   once per run
//! - **Locators**: lazily-evaluated element queries by CSS selector, role and
//!   accessible name, exact text, or button text
//! - **Console Capture**: severity-error console messages collected from the
//!   moment the session is created
//! - **Screenshot Capture**: full-page PNG evidence written to a fixed path
//!
//! # Example
//!
//! ```no_run
//! use shopcheck_browser::{BrowserConfig, BrowserSession, Locator};
//! use shopcheck_browser::screenshot::capture_screenshot;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch(BrowserConfig::default()).await?;
//!     session.navigate("http://localhost:3000").await?;
//!
//!     let grid = Locator::css("div.grid");
//!     if session.is_visible(&grid).await? {
//!         capture_screenshot(&session, Path::new("grid.png")).await?;
//!     }
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! Chrome or Chromium installed; headless operation needs no further setup.

pub mod browser;
pub mod console;
pub mod locator;
pub mod screenshot;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession};
pub use console::ConsoleEntry;
pub use locator::Locator;
pub use screenshot::capture_screenshot;
