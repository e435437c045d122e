//! Platform-free logic for the Linkscout results page.
//!
//! Everything here runs on any target and is exercised by native unit
//! tests; the wasm shell in `apps/web-shell` supplies the DOM view
//! binding, the event-stream transport, and the browser history stack.

pub mod controller;
pub mod history;
pub mod query;
pub mod session;
pub mod stream;
pub mod view;
