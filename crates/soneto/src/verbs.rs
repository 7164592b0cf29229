//! `Soneto` - the dispatcher: load operation plus the verb set.
//!
//! Every verb is a one-line pass-through: resolve one or more names against
//! the registry, forward the resolved values (plus any caller-supplied
//! literals) to the driver, in caller order, stopping at the first driver
//! failure. The only precondition is the loaded-registry guard.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use crate::driver::SonetoDriver;
use crate::registry::{parse_document, SelectorRegistry};
use crate::result::{SonetoError, SonetoResult};

/// Configuration for a [`Soneto`] dispatcher.
///
/// The selectors directory is explicit configuration rather than a
/// hard-wired relative path, so hosts with unconventional test layouts can
/// point it anywhere.
#[derive(Debug, Clone)]
pub struct SonetoConfig {
    /// Directory holding selector documents
    pub dir: PathBuf,
    /// Document extension (without the dot)
    pub extension: String,
    /// Reject unknown names instead of forwarding `None`
    pub strict: bool,
}

impl Default for SonetoConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("tests/selectors"),
            extension: "yml".to_string(),
            strict: false,
        }
    }
}

impl SonetoConfig {
    /// Create a default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selectors directory
    #[must_use]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the document extension (without the dot)
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enable or disable strict resolution.
    ///
    /// The permissive default matches the observed behavior of the system
    /// this crate wraps: unknown names forward as `None`. Strict mode is an
    /// opt-in deviation that fails fast with
    /// [`SonetoError::UnknownSelector`].
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the document for a bare identifier
    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }
}

/// Named-selector dispatcher over an automation driver.
///
/// Owns a [`SelectorRegistry`], a [`SonetoConfig`], and the driver. Hosts
/// construct one per test case; the registry's lifecycle is scoped to that
/// test case.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use soneto::{MockDriver, Soneto};
///
/// let mut soneto = Soneto::new(MockDriver::new());
/// soneto.load_selectors(&[]).unwrap();
/// soneto
///     .registry_mut()
///     .insert("logo image", "//img[@src='logo.gif']");
///
/// soneto.assert_present(&["logo image"]).unwrap();
/// assert!(soneto.driver().was_called("assert_present"));
/// ```
#[derive(Debug)]
pub struct Soneto<D: SonetoDriver> {
    registry: SelectorRegistry,
    config: SonetoConfig,
    driver: D,
}

impl<D: SonetoDriver> Soneto<D> {
    /// Create a dispatcher with the default configuration
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, SonetoConfig::default())
    }

    /// Create a dispatcher with an explicit configuration
    pub fn with_config(driver: D, config: SonetoConfig) -> Self {
        Self {
            registry: SelectorRegistry::new(),
            config,
            driver,
        }
    }

    /// The selector registry
    pub fn registry(&self) -> &SelectorRegistry {
        &self.registry
    }

    /// Mutable registry access, for programmatic selector insertion
    pub fn registry_mut(&mut self) -> &mut SelectorRegistry {
        &mut self.registry
    }

    /// The wrapped driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable driver access, for unwrapped commands
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the dispatcher, returning the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Load zero or more selector documents into the registry.
    ///
    /// Each bare identifier maps to `<dir>/<identifier>.<extension>` and is
    /// parsed as a flat YAML string map. Documents merge in call order with
    /// last-writer-wins on collisions, both within one call and across
    /// calls. Zero identifiers still mark the registry loaded (and empty),
    /// without touching the filesystem.
    pub fn load_selectors(&mut self, names: &[&str]) -> SonetoResult<()> {
        if names.is_empty() {
            self.registry.mark_loaded();
            return Ok(());
        }
        for name in names {
            let path = self.config.document_path(name);
            let entries = read_document(&path)?;
            debug!(
                document = %path.display(),
                entries = entries.len(),
                "merged selector document"
            );
            self.registry.merge(entries);
        }
        Ok(())
    }

    fn resolve<'r>(
        registry: &'r SelectorRegistry,
        config: &SonetoConfig,
        name: &str,
    ) -> SonetoResult<Option<&'r str>> {
        let value = registry.resolve(name)?;
        if value.is_none() && config.strict {
            return Err(SonetoError::UnknownSelector {
                name: name.to_string(),
            });
        }
        trace!(name, resolved = value.is_some(), "resolved selector");
        Ok(value)
    }

    /// Guard, then resolve-and-forward each name in order.
    fn dispatch_each(
        &mut self,
        names: &[&str],
        mut call: impl FnMut(&mut D, Option<&str>) -> SonetoResult<()>,
    ) -> SonetoResult<()> {
        self.registry.ensure_loaded()?;
        for name in names {
            let value = Self::resolve(&self.registry, &self.config, name)?;
            call(&mut self.driver, value)?;
        }
        Ok(())
    }

    /// Guard, then resolve each name and forward it with its paired value.
    fn dispatch_pairs<V>(
        &mut self,
        pairs: &[(&str, V)],
        mut call: impl FnMut(&mut D, Option<&str>, &V) -> SonetoResult<()>,
    ) -> SonetoResult<()> {
        self.registry.ensure_loaded()?;
        for (name, aux) in pairs {
            let value = Self::resolve(&self.registry, &self.config, name)?;
            call(&mut self.driver, value, aux)?;
        }
        Ok(())
    }

    /// Assert each named element is present
    pub fn assert_present(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.assert_present(v))
    }

    /// Assert each named element is absent
    pub fn assert_absent(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.assert_absent(v))
    }

    /// Wait until each named element is present
    pub fn wait_for_present(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.wait_for_present(v))
    }

    /// Wait until each named element is absent
    pub fn wait_for_absent(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.wait_for_absent(v))
    }

    /// Click each named element in order
    pub fn click(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.click(v))
    }

    /// Click each named element and wait for the resulting page load
    pub fn click_and_wait(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.click_and_wait(v))
    }

    /// Assert each named script evaluates to its paired expected value
    pub fn assert_eval(&mut self, checks: &[(&str, Value)]) -> SonetoResult<()> {
        self.dispatch_pairs(checks, |d, v, expected| d.assert_eval(v, expected))
    }

    /// Wait until each named script evaluates to its paired expected value
    pub fn wait_for_eval(&mut self, checks: &[(&str, Value)]) -> SonetoResult<()> {
        self.dispatch_pairs(checks, |d, v, expected| d.wait_for_eval(v, expected))
    }

    /// Evaluate each named script, storing its result under the paired
    /// variable name
    pub fn store_eval(&mut self, stores: &[(&str, &str)]) -> SonetoResult<()> {
        self.dispatch_pairs(stores, |d, v, variable| d.store_eval(v, variable))
    }

    /// Type each paired text into its named element
    pub fn type_text(&mut self, entries: &[(&str, &str)]) -> SonetoResult<()> {
        self.dispatch_pairs(entries, |d, v, text| d.type_text(v, text))
    }

    /// Assert each named script evaluates to `true`
    pub fn assert_true(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.assert_eval(v, &Value::Bool(true)))
    }

    /// Assert each named script evaluates to `false`
    pub fn assert_false(&mut self, names: &[&str]) -> SonetoResult<()> {
        self.dispatch_each(names, |d, v| d.assert_eval(v, &Value::Bool(false)))
    }

    /// Assert the named element's text equals the literal
    pub fn assert_text(&mut self, name: &str, text: &str) -> SonetoResult<()> {
        self.registry.ensure_loaded()?;
        let value = Self::resolve(&self.registry, &self.config, name)?;
        self.driver.assert_text(value, text)
    }

    /// Submit the named form element
    pub fn submit(&mut self, name: &str) -> SonetoResult<()> {
        self.registry.ensure_loaded()?;
        let value = Self::resolve(&self.registry, &self.config, name)?;
        self.driver.submit(value)
    }

    /// Drag the origin element onto the target element
    pub fn drag_and_drop(&mut self, origin: &str, target: &str) -> SonetoResult<()> {
        self.registry.ensure_loaded()?;
        let from = Self::resolve(&self.registry, &self.config, origin)?;
        let to = Self::resolve(&self.registry, &self.config, target)?;
        self.driver.drag_and_drop(from, to)
    }

    /// Open each URL in order.
    ///
    /// URLs are literals, never selector names, so this is the one operation
    /// exempt from the loaded-registry guard. It extends the host's
    /// single-URL open action to a sequence.
    pub fn open(&mut self, urls: &[&str]) -> SonetoResult<()> {
        for url in urls {
            self.driver.open(url)?;
        }
        Ok(())
    }
}

fn read_document(path: &Path) -> SonetoResult<HashMap<String, String>> {
    let text = fs::read_to_string(path).map_err(|source| SonetoError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text).map_err(|source| SonetoError::DocumentParse {
        path: path.to_path_buf(),
        source,
    })
}
