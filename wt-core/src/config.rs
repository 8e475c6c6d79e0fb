use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOL_PREFIX: &str = "wt_";

/// Settings for the tool server, read from `WT_*` environment variables.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub tool_prefix: String,
    /// Relative `path` arguments resolve against this; cwd when unset.
    pub base_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { tool_prefix: DEFAULT_TOOL_PREFIX.to_string(), base_dir: None }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut c = ServerConfig::default();
        if let Some(p) = get("WT_TOOL_PREFIX") { c.tool_prefix = p; }
        if let Some(d) = get("WT_BASE_DIR") { if !d.trim().is_empty() { c.base_dir = Some(PathBuf::from(d)); } }
        c
    }

    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        let p = Path::new(raw);
        match &self.base_dir {
            Some(base) if p.is_relative() => base.join(p),
            _ => p.to_path_buf(),
        }
    }
}
