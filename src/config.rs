use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::{ALL_RULES, Rule, RuleMeta, RuleSeverity, enforce_header_comment, find_rule};

pub const CONFIG_FILE_NAME: &str = ".cmtlintrc.json";

/// Invalid rule configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
    #[error("invalid options for rule '{rule}': {source}")]
    InvalidOptions {
        rule: String,
        source: serde_json::Error,
    },
    #[error("option '{field}' of rule '{rule}' must not be empty")]
    EmptyList { rule: String, field: String },
    #[error("option '{field}' of rule '{rule}' contains an empty string")]
    EmptyItem { rule: String, field: String },
    #[error("option '{field}' of rule '{rule}' contains '{value}' more than once")]
    DuplicateItem {
        rule: String,
        field: String,
        value: String,
    },
    #[error("invalid word '{word}' for rule '{rule}': {source}")]
    InvalidWord {
        rule: String,
        word: String,
        source: regex::Error,
    },
}

/// Named base rule set, refined by [`Config::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Recommended,
    Comment,
    Header,
    Base,
    None,
}

impl Preset {
    pub fn enables(self, meta: &RuleMeta) -> bool {
        match self {
            Preset::Recommended | Preset::Comment => meta.recommended,
            Preset::Header => meta.name == enforce_header_comment::NAME,
            Preset::Base => meta.recommended && meta.name != enforce_header_comment::NAME,
            Preset::None => false,
        }
    }
}

/// A rule setting: `"warn"` or `["warn", { ...options }]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Severity(RuleSeverity),
    WithOptions(RuleSeverity, serde_json::Value),
}

impl RuleEntry {
    pub fn severity(&self) -> RuleSeverity {
        match self {
            RuleEntry::Severity(severity) | RuleEntry::WithOptions(severity, _) => *severity,
        }
    }

    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            RuleEntry::Severity(_) => None,
            RuleEntry::WithOptions(_, options) => Some(options),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleEntry>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_ignores() -> Vec<String> {
    ["**/dist/**", "**/coverage/**"].map(String::from).to_vec()
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            rules: BTreeMap::new(),
            includes: Vec::new(),
            ignores: default_ignores(),
            source_root: default_source_root(),
        }
    }
}

/// A rule enabled by the configuration, with its effective severity.
#[derive(Debug, Clone)]
pub struct EnabledRule {
    pub rule: Rule,
    pub severity: RuleSeverity,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or the rule settings
    /// cannot be turned into rules.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }
        self.enabled_rules()?;
        Ok(())
    }

    /// Resolve the preset and the `rules` overrides into constructed rules.
    ///
    /// Rules set to `off` are left out. Rules keep the order of
    /// [`ALL_RULES`].
    pub fn enabled_rules(&self) -> Result<Vec<EnabledRule>, ConfigError> {
        if let Some(name) = self.rules.keys().find(|name| find_rule(name).is_none()) {
            return Err(ConfigError::UnknownRule(name.clone()));
        }

        let mut enabled = Vec::new();
        for meta in ALL_RULES {
            let entry = self.rules.get(meta.name);
            let severity = match entry {
                Some(entry) => entry.severity(),
                None if self.preset.enables(meta) => meta.default_severity,
                None => RuleSeverity::Off,
            };
            if severity == RuleSeverity::Off {
                continue;
            }
            let rule = Rule::from_options(meta.name, entry.and_then(RuleEntry::options))?;
            enabled.push(EnabledRule { rule, severity });
        }
        Ok(enabled)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
