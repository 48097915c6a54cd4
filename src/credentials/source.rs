use std::collections::BTreeMap;
use std::fmt;

/// Fallback configuration consulted when no override key is set.
///
/// Implementations are queried on every resolution and must not cache.
pub trait KeySource: Send + Sync + fmt::Debug {
    /// Look up `name`, returning `None` when it is absent.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl KeySource for EnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of values, for tests and embedders that manage configuration themselves.
///
/// `Debug` lists the names only; values are never printed.
#[derive(Clone, Default)]
pub struct StaticSource {
    values: BTreeMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for StaticSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSource")
            .field("names", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl KeySource for StaticSource {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Never yields a value; resolution then depends on the override alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl KeySource for NoSource {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_inserted_values() {
        let source = StaticSource::new().with("A", "1");
        assert_eq!(source.get("A").as_deref(), Some("1"));
        assert_eq!(source.get("B"), None);
    }

    #[test]
    fn static_source_debug_hides_values() {
        let source = StaticSource::new().with("ALERTY_ACM_API_KEY", "super-secret");
        let rendered = format!("{source:?}");
        assert!(rendered.contains("ALERTY_ACM_API_KEY"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn no_source_is_always_empty() {
        assert_eq!(NoSource.get("PATH"), None);
    }

    #[test]
    fn env_source_reads_present_variables() {
        assert_eq!(
            EnvSource.get("CARGO_MANIFEST_DIR").as_deref(),
            Some(env!("CARGO_MANIFEST_DIR"))
        );
    }

    #[test]
    fn env_source_misses_unset_variables() {
        assert_eq!(EnvSource.get("ALERTY_ACM_TEST_SURELY_UNSET_9F2C"), None);
    }
}
