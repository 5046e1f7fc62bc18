use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Executable paths keyed by application display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandPathRegistry {
    paths: HashMap<String, String>,
}

impl CommandPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, display_name: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(display_name.into(), path.into());
    }

    pub fn with(mut self, display_name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(display_name, path);
        self
    }

    /// Configured path for `display_name`. Blank entries count as unset.
    pub fn resolve(&self, display_name: &str) -> Option<&str> {
        self.paths
            .get(display_name)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.paths.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommandPathRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Free-function form of [`CommandPathRegistry::resolve`].
pub fn resolve<'a>(display_name: &str, registry: &'a CommandPathRegistry) -> Option<&'a str> {
    registry.resolve(display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_configured_path() {
        let registry = CommandPathRegistry::new().with("Vim", "/usr/bin/vim");
        assert_eq!(registry.resolve("Vim"), Some("/usr/bin/vim"));
        assert_eq!(resolve("Vim", &registry), Some("/usr/bin/vim"));
    }

    #[test]
    fn test_resolve_missing_and_blank() {
        let registry: CommandPathRegistry =
            [("TeXstudio", ""), ("WinEdt", "   ")].into_iter().collect();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("TeXstudio"), None);
        assert_eq!(registry.resolve("WinEdt"), None);
        assert_eq!(registry.resolve("Vim"), None);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = CommandPathRegistry::new().with("TeXstudio", "/usr/bin/texstudio");
        assert_eq!(registry.resolve("texstudio"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut registry = CommandPathRegistry::new();
        registry.insert("Vim", "/usr/bin/vim");
        registry.insert("Vim", "/usr/local/bin/vim");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("Vim"), Some("/usr/local/bin/vim"));
    }
}
