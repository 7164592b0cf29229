//! Soneto: named-selector registry and dispatch for browser-automation tests.
//!
//! Soneto lets a test refer to UI locators (XPath expressions or script
//! snippets) by short human-readable names loaded from external YAML
//! documents, instead of repeating raw locator strings inline. Every verb it
//! exposes is a one-line pass-through to an underlying automation driver,
//! substituting each name for its looked-up value.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ YAML selector│    │ SelectorRegistry │    │ SonetoDriver     │
//! │ documents    │───►│ (merged mapping) │───►│ (host framework) │
//! └──────────────┘    └──────────────────┘    └──────────────────┘
//!                        load · resolve          forwarded calls
//! ```
//!
//! The driver is a trait: Soneto drives no browser itself. Hosts construct a
//! [`Soneto`] around whatever driver they already have, one per test case.
//!
//! # Example
//!
//! ```
//! use soneto::{MockDriver, Soneto};
//!
//! let mut soneto = Soneto::new(MockDriver::new());
//! soneto.load_selectors(&[]).unwrap();
//! soneto
//!     .registry_mut()
//!     .insert("logo image", "//img[@src='logo.gif']");
//!
//! soneto.open(&["http://gallery.test/"]).unwrap();
//! soneto.assert_present(&["logo image"]).unwrap();
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod driver;
mod registry;
mod result;
mod verbs;

pub use driver::{Call, MockDriver, SonetoDriver};
pub use registry::SelectorRegistry;
pub use result::{SonetoError, SonetoResult};
pub use verbs::{Soneto, SonetoConfig};
