//! Rule file parsing (YAML/JSON/JSONC) and loading.

use crate::config::error::ConfigError;
use crate::config::rule::RuleConfig;
use crate::mocks::router::Router;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Rule file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments outside of string literals.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                // Keep the line break so line numbers in parse errors stay put
                for next in chars.by_ref() {
                    if next == '\n' || next == '\r' {
                        result.push(next);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let stripped = strip_json_comments(content);
    serde_json::from_str(&stripped).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse config content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Rules read from one file, with the directory their resources resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleFile {
    pub path: PathBuf,
    pub rules: Vec<RuleConfig>,
}

impl RuleFile {
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Read a single rule file.
pub fn read_rule_file(path: &Path) -> Result<RuleFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = parse_config(&content, &path.to_string_lossy())?;
    Ok(RuleFile {
        path: path.to_path_buf(),
        rules,
    })
}

/// Read every rule file matching a glob pattern, in sorted path order.
pub fn load_rules(pattern: &str) -> Result<Vec<RuleFile>, ConfigError> {
    let mut paths = collect_paths(glob::glob(pattern)?)?;
    paths.sort();

    tracing::debug!(pattern, files = paths.len(), "Loading rule files");

    paths.iter().map(|path| read_rule_file(path)).collect()
}

/// Keep the file entries of a glob walk. An entry that could not be read fails the walk.
fn collect_paths<I, E>(entries: I) -> Result<Vec<PathBuf>, ConfigError>
where
    I: IntoIterator<Item = Result<PathBuf, E>>,
    ConfigError: From<E>,
{
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    Ok(paths)
}

impl Router {
    /// Build a router from rule files, registering rules in file order.
    pub fn from_files(files: Vec<RuleFile>) -> Result<Self, ConfigError> {
        let mut router = Router::new();
        for file in files {
            let base_dir = file.base_dir().to_path_buf();
            for rule in file.rules {
                router.add(rule.into_builder(&base_dir)?)?;
            }
        }
        Ok(router)
    }

    /// Build a router from every rule file matching a glob pattern.
    pub fn load(pattern: &str) -> Result<Self, ConfigError> {
        Self::from_files(load_rules(pattern)?)
    }

    /// Build a router from in-memory definitions, resolving resources against `base_dir`.
    pub fn from_configs(configs: Vec<RuleConfig>, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut router = Router::new();
        for config in configs {
            router.add(config.into_builder(base_dir)?)?;
        }
        Ok(router)
    }
}
