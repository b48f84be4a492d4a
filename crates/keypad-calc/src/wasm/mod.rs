//! DOM front end for the calculator
//!
//! [`DomView`] renders snapshots into a page; [`MockDom`] stands in for the
//! browser in tests. The real wasm-bindgen entry point lives behind the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod view;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, ACTIVE_CLASS, DISPLAY_ID, ERROR_CLASS};
pub use driver::WasmDriver;
pub use view::DomView;
