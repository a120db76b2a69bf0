//! Runtime settings read from the environment.
use std::path::Path;
use std::path::PathBuf;

/// Where the ledger file lives.
pub const LEDGER_VAR: &str = "HOMEGAME_LEDGER";
/// Directory for timestamped log files.
pub const LOGS_VAR: &str = "HOMEGAME_LOGS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    ledger: PathBuf,
    logs: PathBuf,
}

impl Config {
    pub fn new(ledger: impl Into<PathBuf>, logs: impl Into<PathBuf>) -> Self {
        Self {
            ledger: ledger.into(),
            logs: logs.into(),
        }
    }
    /// Defaults, overridden by any of the variables that are set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        Self {
            ledger: var(LEDGER_VAR).unwrap_or(defaults.ledger),
            logs: var(LOGS_VAR).unwrap_or(defaults.logs),
        }
    }
    pub fn ledger(&self) -> &Path {
        &self.ledger
    }
    pub fn logs(&self) -> &Path {
        &self.logs
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("poker_sessions.json", "logs")
    }
}
