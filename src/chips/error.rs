/// Precondition violations rejected before any chips are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    NonPositiveInput { field: &'static str, value: i64 },
    InvalidBlindOrdering { small: i64, big: i64 },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveInput { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            Self::InvalidBlindOrdering { small, big } => {
                write!(f, "big blind {} must exceed small blind {}", big, small)
            }
        }
    }
}

impl std::error::Error for AllocationError {}
