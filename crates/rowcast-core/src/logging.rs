//! Logging facilities for rowcast.
//!
//! rowcast uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("rowcast_core=debug,rowcast=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/subscription target.
    pub const SIGNAL: &str = "rowcast_core::signal";
    /// Observable list mutations.
    pub const LIST: &str = "rowcast_core::list";
    /// Configuration loading.
    pub const CONFIG: &str = "rowcast_core::config";
    /// View-side change handling.
    pub const PRESENTER: &str = "rowcast::presenter";
}
