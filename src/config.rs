use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::catalog::store::CATALOG_FILE_NAME;
use crate::core::extract::DEFAULT_MARKER;
use crate::core::scan::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".xlocalizerc.json";

/// `en`, `pt-BR`, `zh_Hant_TW`, ...
static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([_-][A-Za-z0-9]{2,8})*$").expect("valid language code regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Operating language: locale of the placeholder and diagnostic keys.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub translate_to: Vec<String>,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_recursive() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    ["html", "js"].map(String::from).to_vec()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_catalog_file() -> String {
    CATALOG_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            recursive: default_recursive(),
            extensions: default_extensions(),
            translate_to: Vec::new(),
            marker: default_marker(),
            catalog_file: default_catalog_file(),
            ignores: Vec::new(),
        }
    }
}

pub fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

impl Config {
    /// Normalize user input: trim entries, drop leading dots from extensions
    /// and empty list items.
    pub fn normalize(&mut self) {
        let clean = |items: &mut Vec<String>, strip_dot: bool| {
            *items = items
                .iter()
                .map(|item| {
                    let item = item.trim();
                    if strip_dot {
                        item.trim_start_matches('.').to_string()
                    } else {
                        item.to_string()
                    }
                })
                .filter(|item| !item.is_empty())
                .collect();
        };
        clean(&mut self.extensions, true);
        clean(&mut self.translate_to, false);
        self.language = self.language.trim().to_string();
        self.marker = self.marker.trim().to_string();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_language_code(&self.language) {
            bail!("Invalid language code in 'language': \"{}\"", self.language);
        }
        for code in &self.translate_to {
            if !is_language_code(code) {
                bail!("Invalid language code in 'translateTo': \"{}\"", code);
            }
        }

        if self.marker.is_empty()
            || self
                .marker
                .chars()
                .any(|c| c.is_whitespace() || c == '(' || c == ')')
        {
            bail!("Invalid marker name: \"{}\"", self.marker);
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.catalog_file.is_empty() || self.catalog_file.contains(['/', '\\']) {
            bail!("Invalid catalog file name: \"{}\"", self.catalog_file);
        }

        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        Ok(())
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
    /// Path of the config file, if one was found.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
