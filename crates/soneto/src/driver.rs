//! `SonetoDriver` - the consumed automation interface.
//!
//! This trait is the seam between Soneto and the host test framework: every
//! verb resolves names against the registry and forwards the resolved
//! strings here. Soneto ships no browser implementation; the host wraps
//! whatever driver it already has.
//!
//! Resolved locator/script parameters are `Option<&str>` on purpose: an
//! unknown name resolves to `None` in permissive mode and is forwarded
//! unchanged, so the driver owns what an absent locator means.

use serde_json::Value;

use crate::result::{SonetoError, SonetoResult};

/// Abstract automation driver the verbs forward to.
///
/// Each method maps one-to-one onto a primitive command of the underlying
/// test framework. Implementations own all timing, polling, and failure
/// semantics; Soneto adds nothing beyond argument resolution and reports
/// their failures unchanged.
pub trait SonetoDriver {
    /// Assert an element is present
    fn assert_present(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Assert an element is absent
    fn assert_absent(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Wait until an element is present
    fn wait_for_present(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Wait until an element is absent
    fn wait_for_absent(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Click an element
    fn click(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Click an element and wait for the resulting page load
    fn click_and_wait(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Assert a script evaluates to the expected value
    fn assert_eval(&mut self, script: Option<&str>, expected: &Value) -> SonetoResult<()>;

    /// Wait until a script evaluates to the expected value
    fn wait_for_eval(&mut self, script: Option<&str>, expected: &Value) -> SonetoResult<()>;

    /// Assert an element's text equals the expected text
    fn assert_text(&mut self, locator: Option<&str>, text: &str) -> SonetoResult<()>;

    /// Evaluate a script and store the result under a variable name
    fn store_eval(&mut self, script: Option<&str>, variable: &str) -> SonetoResult<()>;

    /// Type text into an element
    fn type_text(&mut self, locator: Option<&str>, text: &str) -> SonetoResult<()>;

    /// Drag one element onto another
    fn drag_and_drop(&mut self, origin: Option<&str>, target: Option<&str>) -> SonetoResult<()>;

    /// Submit a form element
    fn submit(&mut self, locator: Option<&str>) -> SonetoResult<()>;

    /// Open a URL
    fn open(&mut self, url: &str) -> SonetoResult<()>;
}

/// One recorded driver invocation, in argument-resolved form.
///
/// `None` locators are unknown names forwarded permissively.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `assert_present(locator)`
    AssertPresent(Option<String>),
    /// `assert_absent(locator)`
    AssertAbsent(Option<String>),
    /// `wait_for_present(locator)`
    WaitForPresent(Option<String>),
    /// `wait_for_absent(locator)`
    WaitForAbsent(Option<String>),
    /// `click(locator)`
    Click(Option<String>),
    /// `click_and_wait(locator)`
    ClickAndWait(Option<String>),
    /// `assert_eval(script, expected)`
    AssertEval(Option<String>, Value),
    /// `wait_for_eval(script, expected)`
    WaitForEval(Option<String>, Value),
    /// `assert_text(locator, text)`
    AssertText(Option<String>, String),
    /// `store_eval(script, variable)`
    StoreEval(Option<String>, String),
    /// `type_text(locator, text)`
    TypeText(Option<String>, String),
    /// `drag_and_drop(origin, target)`
    DragAndDrop(Option<String>, Option<String>),
    /// `submit(locator)`
    Submit(Option<String>),
    /// `open(url)`
    Open(String),
}

impl Call {
    /// Method name of the recorded call
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::AssertPresent(_) => "assert_present",
            Self::AssertAbsent(_) => "assert_absent",
            Self::WaitForPresent(_) => "wait_for_present",
            Self::WaitForAbsent(_) => "wait_for_absent",
            Self::Click(_) => "click",
            Self::ClickAndWait(_) => "click_and_wait",
            Self::AssertEval(_, _) => "assert_eval",
            Self::WaitForEval(_, _) => "wait_for_eval",
            Self::AssertText(_, _) => "assert_text",
            Self::StoreEval(_, _) => "store_eval",
            Self::TypeText(_, _) => "type_text",
            Self::DragAndDrop(_, _) => "drag_and_drop",
            Self::Submit(_) => "submit",
            Self::Open(_) => "open",
        }
    }
}

/// Recording driver for unit testing.
///
/// Records every invocation in order and can be told to fail once the N-th
/// call is recorded, so sequential-propagation behavior is testable.
#[derive(Debug, Default)]
pub struct MockDriver {
    /// Call history for verification
    pub call_history: Vec<Call>,
    fail_on_call: Option<usize>,
}

impl MockDriver {
    /// Create a new mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with a driver error once the `n`-th call (1-based) is recorded
    pub fn fail_on_call(&mut self, n: usize) {
        self.fail_on_call = Some(n);
    }

    /// Get call history
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.call_history
    }

    /// Check if a method was called
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.call_history.iter().any(|c| c.method() == method)
    }

    fn record(&mut self, call: Call) -> SonetoResult<()> {
        self.call_history.push(call);
        if self.fail_on_call == Some(self.call_history.len()) {
            return Err(SonetoError::driver(format!(
                "injected failure on call {}",
                self.call_history.len()
            )));
        }
        Ok(())
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(ToString::to_string)
}

impl SonetoDriver for MockDriver {
    fn assert_present(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::AssertPresent(owned(locator)))
    }

    fn assert_absent(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::AssertAbsent(owned(locator)))
    }

    fn wait_for_present(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::WaitForPresent(owned(locator)))
    }

    fn wait_for_absent(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::WaitForAbsent(owned(locator)))
    }

    fn click(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::Click(owned(locator)))
    }

    fn click_and_wait(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::ClickAndWait(owned(locator)))
    }

    fn assert_eval(&mut self, script: Option<&str>, expected: &Value) -> SonetoResult<()> {
        self.record(Call::AssertEval(owned(script), expected.clone()))
    }

    fn wait_for_eval(&mut self, script: Option<&str>, expected: &Value) -> SonetoResult<()> {
        self.record(Call::WaitForEval(owned(script), expected.clone()))
    }

    fn assert_text(&mut self, locator: Option<&str>, text: &str) -> SonetoResult<()> {
        self.record(Call::AssertText(owned(locator), text.to_string()))
    }

    fn store_eval(&mut self, script: Option<&str>, variable: &str) -> SonetoResult<()> {
        self.record(Call::StoreEval(owned(script), variable.to_string()))
    }

    fn type_text(&mut self, locator: Option<&str>, text: &str) -> SonetoResult<()> {
        self.record(Call::TypeText(owned(locator), text.to_string()))
    }

    fn drag_and_drop(&mut self, origin: Option<&str>, target: Option<&str>) -> SonetoResult<()> {
        self.record(Call::DragAndDrop(owned(origin), owned(target)))
    }

    fn submit(&mut self, locator: Option<&str>) -> SonetoResult<()> {
        self.record(Call::Submit(owned(locator)))
    }

    fn open(&mut self, url: &str) -> SonetoResult<()> {
        self.record(Call::Open(url.to_string()))
    }
}
