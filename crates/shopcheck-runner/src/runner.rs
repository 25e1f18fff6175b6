//! The verification run sequence

use crate::report::RunReport;
use shopcheck_browser::{capture_screenshot, BrowserConfig, BrowserSession, Locator};
use shopcheck_core::{Result, RunConfig};
use tracing::{error, info, warn};

/// Fatality policy for a network-idle wait, named per call site
///
/// The wait right after the initial navigation is best-effort; the wait
/// after the language switch is required. Keeping the policy explicit at
/// each call site stops it being an accident of error-handling placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePolicy {
    /// Log the failure and continue
    BestEffort,
    /// Propagate the failure and fail the run
    Required,
}

impl IdlePolicy {
    /// Apply the policy to a wait result
    pub fn absorb(self, result: Result<()>, context: &str) -> Result<()> {
        match (self, result) {
            (_, Ok(())) => Ok(()),
            (Self::BestEffort, Err(e)) => {
                warn!("Idle wait failed ({}): {}", context, e);
                Ok(())
            }
            (Self::Required, Err(e)) => Err(e),
        }
    }
}

/// Execute one verification run
///
/// Launch failure is returned directly (no screenshot is possible). Every
/// later outcome, pass or fail, comes back as a [`RunReport`]; a fatal step
/// failure sets `success: false`, records the error, and writes the failure
/// screenshot. The browser session is closed exactly once on every path.
pub async fn run(config: &RunConfig) -> Result<RunReport> {
    let session = BrowserSession::launch(BrowserConfig {
        headless: config.headless,
        window_width: config.window_width,
        window_height: config.window_height,
    })
    .await?;

    let mut report = RunReport::new();
    let outcome = verify_storefront(&session, config, &mut report).await;
    report.console_errors = session.console_errors();

    match outcome {
        Ok(()) => match capture_screenshot(&session, &config.success_screenshot).await {
            Ok(_) => {
                report.success = true;
                report.screenshot = Some(config.success_screenshot.clone());
                info!("Storefront verification successful");
            }
            Err(e) => {
                error!("Verification passed but screenshot capture failed: {}", e);
                report.error = Some(e.to_string());
            }
        },
        Err(e) => {
            error!("Verification failed: {}", e);
            match capture_screenshot(&session, &config.failure_screenshot).await {
                Ok(_) => report.screenshot = Some(config.failure_screenshot.clone()),
                Err(shot_err) => warn!("Failed to capture failure screenshot: {}", shot_err),
            }
            report.error = Some(e.to_string());
        }
    }

    session.close().await?;
    Ok(report)
}

/// The fixed interaction sequence against the storefront
async fn verify_storefront(
    session: &BrowserSession,
    config: &RunConfig,
    report: &mut RunReport,
) -> Result<()> {
    // Navigate to the storefront; only the idle wait is best-effort here,
    // a failed navigation itself is fatal.
    info!("Navigating to the store page at {}", config.base_url);
    if let Err(e) = session.navigate(&config.base_url).await {
        report.record_failed("navigate", &e.to_string());
        return Err(e);
    }
    IdlePolicy::BestEffort.absorb(
        session
            .wait_for_idle(config.idle_timeout(), config.idle_quiet())
            .await,
        "initial load",
    )?;
    report.record_passed("navigate");

    // Report console errors captured since launch
    let console_errors = session.console_errors();
    if console_errors.is_empty() {
        info!("No console errors so far");
    } else {
        println!("Console errors found:");
        for entry in &console_errors {
            println!("{}", entry.text);
        }
    }

    // Switch the UI language to English via the globe menu
    info!("Changing language to English");
    let globe = Locator::css("button:has(svg.lucide-globe)");
    let english = Locator::role("menuitem", "English");
    let switch = async {
        session.click(&globe, config.locator_timeout()).await?;
        session.click(&english, config.locator_timeout()).await?;
        IdlePolicy::Required.absorb(
            session
                .wait_for_idle(config.idle_timeout(), config.idle_quiet())
                .await,
            "after language switch",
        )
    }
    .await;
    if let Err(e) = switch {
        report.record_failed("language_switch", &e.to_string());
        return Err(e);
    }
    report.record_passed("language_switch");
    info!("Language changed to English");

    // Either the product grid or its empty state must become visible
    let grid = Locator::css("div.grid");
    let empty_state = Locator::exact_text("No products found");
    match session
        .wait_any_visible(&[grid, empty_state], config.assert_timeout())
        .await
    {
        Ok(0) => info!("Product grid is visible"),
        Ok(_) => info!("Empty state is visible"),
        Err(e) => {
            // Full markup dump for diagnosis before failing the run
            println!("Could not find product grid or empty state. Printing page content:");
            match session.page_content().await {
                Ok(content) => println!("{}", content),
                Err(dump_err) => warn!("Failed to dump page content: {}", dump_err),
            }
            report.record_failed("product_grid", &e.to_string());
            return Err(e);
        }
    }
    report.record_passed("product_grid");

    // Cart interaction is optional; an absent button is not a failure
    let add_to_cart = Locator::button_text("Add to Cart");
    if session.is_visible(&add_to_cart).await? {
        if let Err(e) = session.click(&add_to_cart, config.locator_timeout()).await {
            report.record_failed("add_to_cart", &e.to_string());
            return Err(e);
        }
        info!("Added a product to the cart");
        report.record_passed("add_to_cart");
    } else {
        info!("No 'Add to Cart' button found, skipping cart interaction");
        report.record_skipped("add_to_cart", "no visible 'Add to Cart' button");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcheck_core::CheckError;

    #[test]
    fn test_best_effort_swallows_failures() {
        let result = IdlePolicy::BestEffort.absorb(
            Err(CheckError::Browser("network did not go idle".to_string())),
            "initial load",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_required_propagates_failures() {
        let result = IdlePolicy::Required.absorb(
            Err(CheckError::Browser("network did not go idle".to_string())),
            "after language switch",
        );
        assert!(matches!(result, Err(CheckError::Browser(_))));
    }

    #[test]
    fn test_both_policies_pass_through_success() {
        assert!(IdlePolicy::BestEffort.absorb(Ok(()), "a").is_ok());
        assert!(IdlePolicy::Required.absorb(Ok(()), "b").is_ok());
    }
}
