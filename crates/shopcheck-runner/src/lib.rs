//! Verification run sequence for the shopcheck storefront checks
//!
//! One run is a fixed linear sequence against a locally served storefront:
//!
//! 1. Launch a headless browser (fatal on failure, no screenshot possible)
//! 2. Navigate to the base URL; best-effort network-idle wait
//! 3. Report console errors captured since launch
//! 4. Switch the UI language to English via the globe menu (required)
//! 5. Assert the product grid or the "No products found" empty state
//! 6. Click the first visible "Add to Cart" button, skipping if absent
//!
//! On success a screenshot goes to the configured success path; on any fatal
//! failure after launch a screenshot goes to the failure path and the run
//! report carries the error. The browser session is closed exactly once on
//! every path.

mod report;
mod runner;

pub use report::{RunReport, StepOutcome, StepStatus};
pub use runner::{run, IdlePolicy};
