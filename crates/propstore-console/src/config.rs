use std::path::Path;

use propstore_registry::Registry;
use propstore_types::PrimitiveKind;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub store_name: String,
    pub prompt: String,
    pub banner: bool,
    pub seed: Vec<SeedProperty>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store_name: "alfa".into(),
            prompt: ">".into(),
            banner: true,
            seed: vec![
                SeedProperty::new("str", PrimitiveKind::Text),
                SeedProperty::new("number", PrimitiveKind::Int32),
                SeedProperty::new("very_long", PrimitiveKind::Int64),
                SeedProperty::new("dbl", PrimitiveKind::Float64),
            ],
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml_str(s: &str) -> ConsoleResult<Self> {
        toml::from_str(s).map_err(|e| ConsoleError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ConsoleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// A registry named after `store_name` with every seed property defined.
    pub fn build_registry(&self) -> Registry {
        let mut registry = Registry::new(self.store_name.clone());
        registry.seed(self.seed.iter().map(|s| (s.name.as_str(), s.kind)));
        registry
    }
}

/// A property defined before the console starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProperty {
    pub name: String,
    pub kind: PrimitiveKind,
}

impl SeedProperty {
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ConsoleConfig::default();
        assert_eq!(c.store_name, "alfa");
        assert_eq!(c.prompt, ">");
        assert!(c.banner);
        assert_eq!(c.seed.len(), 4);
    }

    #[test]
    fn default_registry_is_seeded() {
        let registry = ConsoleConfig::default().build_registry();
        assert_eq!(registry.name(), "alfa");
        assert_eq!(registry.count(), 4);
        assert_eq!(registry.get("very_long").unwrap().kind(), PrimitiveKind::Int64);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ConsoleConfig::from_toml_str("store_name = \"beta\"\n").unwrap();
        assert_eq!(c.store_name, "beta");
        assert_eq!(c.prompt, ">");
        assert_eq!(c.seed.len(), 4);
    }

    #[test]
    fn toml_seed_list() {
        let c = ConsoleConfig::from_toml_str(
            r#"
            banner = false
            prompt = "props> "

            [[seed]]
            name = "port"
            kind = "int32"

            [[seed]]
            name = "host"
            kind = "text"
            "#,
        )
        .unwrap();
        assert!(!c.banner);
        assert_eq!(c.prompt, "props> ");
        assert_eq!(
            c.seed,
            vec![
                SeedProperty::new("port", PrimitiveKind::Int32),
                SeedProperty::new("host", PrimitiveKind::Text),
            ]
        );
    }

    #[test]
    fn bad_kind_is_config_error() {
        let err = ConsoleConfig::from_toml_str("[[seed]]\nname = \"x\"\nkind = \"decimal\"\n")
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_name = \"from-file\"\nseed = []").unwrap();
        let c = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(c.store_name, "from-file");
        assert!(c.build_registry().is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
