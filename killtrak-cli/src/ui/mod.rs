//! Terminal output for KillTrak.
//!
//! # Module Structure
//!
//! - `dashboard` - boxed stats view redrawn every tick
//! - `headless` - one status line per tick
//! - `prompt` - resolution question at first start
//! - `summary` - lines printed when the tracker stops

pub mod dashboard;
pub mod headless;
pub mod prompt;
pub mod summary;

pub use dashboard::DashboardPresenter;
pub use headless::LinePresenter;
pub use prompt::ask_resolution;
pub use summary::session_summary;
