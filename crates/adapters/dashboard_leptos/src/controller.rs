//! Browser-independent state behind the dashboard widgets.
//!
//! Each widget keeps its logic in a plain struct so it can be unit-tested
//! natively; the Leptos components only hold these in signals and translate
//! outcomes into DOM side effects (alerts, reloads, console logging).

pub mod form;
pub mod server_toggle;
pub mod tree;
