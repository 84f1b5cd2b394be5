use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trim_core::{ExclusionRules, VariantKind, VariantSpec};

/// Configuration for the trimmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Payloads longer than this many characters get their quotas optimized
    #[serde(default = "default_threshold")]
    pub threshold_chars: usize,

    #[serde(default)]
    pub variants: VariantsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantsConfig {
    #[serde(default)]
    pub recharge: VariantOverrides,

    #[serde(default)]
    pub activation: VariantOverrides,
}

/// Per-variant overrides; unset keys keep the built-in default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_subcategories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_name_prefixes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_quota_patterns: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_chars: default_threshold(),
            variants: VariantsConfig::default(),
        }
    }
}

fn default_threshold() -> usize {
    7000
}

impl VariantOverrides {
    /// Overrides that spell out every built-in default for a variant
    pub fn explicit(kind: VariantKind) -> Self {
        let spec = VariantSpec::for_kind(kind);
        Self {
            list_field: Some(spec.list_field),
            amount_field: Some(spec.amount_field),
            exclude_subcategories: Some(spec.exclude.subcategories),
            exclude_name_prefixes: Some(spec.exclude.name_prefixes),
            exclude_quota_patterns: Some(spec.exclude.quota_patterns),
        }
    }

    /// Apply these overrides on top of a base spec
    pub fn apply(&self, base: VariantSpec) -> VariantSpec {
        VariantSpec {
            kind: base.kind,
            list_field: self.list_field.clone().unwrap_or(base.list_field),
            amount_field: self.amount_field.clone().unwrap_or(base.amount_field),
            exclude: ExclusionRules {
                subcategories: self
                    .exclude_subcategories
                    .clone()
                    .unwrap_or(base.exclude.subcategories),
                name_prefixes: self
                    .exclude_name_prefixes
                    .clone()
                    .unwrap_or(base.exclude.name_prefixes),
                quota_patterns: self
                    .exclude_quota_patterns
                    .clone()
                    .unwrap_or(base.exclude.quota_patterns),
            },
        }
    }
}

impl Config {
    /// Config with every variant key written out (used for `config init`)
    pub fn explicit_defaults() -> Self {
        Self {
            threshold_chars: default_threshold(),
            variants: VariantsConfig {
                recharge: VariantOverrides::explicit(VariantKind::Recharge),
                activation: VariantOverrides::explicit(VariantKind::Activation),
            },
        }
    }

    /// Effective spec for a variant: built-in defaults plus overrides
    pub fn variant_spec(&self, kind: VariantKind) -> VariantSpec {
        let overrides = match kind {
            VariantKind::Recharge => &self.variants.recharge,
            VariantKind::Activation => &self.variants.activation,
        };
        overrides.apply(VariantSpec::for_kind(kind))
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        for kind in [VariantKind::Recharge, VariantKind::Activation] {
            let spec = self.variant_spec(kind);
            if spec.list_field.trim().is_empty() {
                anyhow::bail!("variants.{}.list_field must not be empty", section(kind));
            }
            if spec.amount_field.trim().is_empty() {
                anyhow::bail!("variants.{}.amount_field must not be empty", section(kind));
            }
        }
        Ok(())
    }

    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::explicit_defaults();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file; the file must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "trimmer", "trimmer") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.trimmer/config.toml")
        }
    }
}

fn section(kind: VariantKind) -> &'static str {
    match kind {
        VariantKind::Recharge => "recharge",
        VariantKind::Activation => "activation",
    }
}
