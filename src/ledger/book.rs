use super::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Ordered record of sessions, persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    sessions: Vec<Session>,
}

impl Ledger {
    /// Read the ledger at `path`. A missing file is an empty ledger.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no ledger at {}, starting fresh", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading ledger {}", path.display()))?;
        let ledger = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parsing ledger {}", path.display()))?;
        log::debug!("loaded {} sessions from {}", ledger.len(), path.display());
        Ok(ledger)
    }
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("writing ledger {}", path.display()))?;
        log::debug!("saved {} sessions to {}", self.len(), path.display());
        Ok(())
    }

    pub fn add(&mut self, session: Session) {
        log::info!("recorded session {}", session);
        self.sessions.push(session);
    }
    pub fn remove(&mut self, index: usize) -> Result<Session, LedgerError> {
        match index < self.sessions.len() {
            true => Ok(self.sessions.remove(index)),
            false => Err(LedgerError::NoSuchSession {
                index,
                len: self.sessions.len(),
            }),
        }
    }
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }
    pub fn totals(&self) -> Summary {
        self.sessions.iter().collect()
    }
    pub fn len(&self) -> usize {
        self.sessions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
