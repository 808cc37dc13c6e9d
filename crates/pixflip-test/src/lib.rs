//! pixflip-test - Regression test framework for pixflip
//!
//! Supports two modes, selected by the `REGTEST_MODE` environment variable:
//!
//! - **Compare** (default): written images are read back and checked
//! - **Display**: images are written for visual inspection only
//!
//! # Usage
//!
//! ```ignore
//! use pixflip_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("mirror");
//! rp.compare_values(4.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixflip-test is at crates/pixflip-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
