use serde::{Deserialize, Serialize};

/// Module name used when the caller does not supply one.
pub const DEFAULT_MODULE_NAME: &str = "combinedModule";

/// Main configuration for vbam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineConfig {
    /// Name given to the combined module, substituted verbatim into the
    /// synthesized `Attribute VB_Name = "..."` line
    pub module_name: String,
}

impl CombineConfig {
    /// Validates the configuration ahead of combining.
    ///
    /// The combiner itself never escapes or rejects the module name, so a
    /// name carrying an embedded double quote would produce an attribute
    /// line that is not well-formed VBA. This check is opt-in; callers that
    /// skip it get the permissive behavior.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.module_name.contains('"') {
            anyhow::bail!(
                "Module name contains a double quote: {:?}",
                self.module_name
            );
        }
        Ok(())
    }

    /// Attempts to load configuration from `vbam.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("vbam.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// Combine module texts using this configuration's module name.
    pub fn combine<S: AsRef<str>>(&self, module_texts: &[S]) -> String {
        crate::core::combine(module_texts, &self.module_name)
    }
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}
