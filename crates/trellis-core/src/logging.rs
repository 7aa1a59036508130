//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Emission sites use per-subsystem targets so traces can be filtered with
//! `tracing` directives, e.g. `RUST_LOG=trellis_core::signal=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "trellis_core::property";
    /// Control/view layer target.
    pub const VIEW: &str = "trellis_view";
}
