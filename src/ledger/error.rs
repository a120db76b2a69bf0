/// Errors from recording or removing sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    ZeroBuyIn,
    NoSuchSession { index: usize, len: usize },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBuyIn => write!(f, "buy-in must be greater than 0"),
            Self::NoSuchSession { index, len } => {
                write!(f, "no session {} (ledger has {})", index, len)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
