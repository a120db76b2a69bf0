/// How long each blind level lasts.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Speed {
    Long,
    #[default]
    Normal,
    Turbo,
    Hyper,
}

impl Speed {
    pub const fn all() -> &'static [Self] {
        &[Self::Long, Self::Normal, Self::Turbo, Self::Hyper]
    }
    pub const fn minutes(&self) -> u64 {
        match self {
            Self::Long => 20,
            Self::Normal => 15,
            Self::Turbo => 10,
            Self::Hyper => 6,
        }
    }
}

impl TryFrom<&str> for Speed {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "normal" => Ok(Self::Normal),
            "turbo" => Ok(Self::Turbo),
            "hyper" | "hyperturbo" | "hyper-turbo" => Ok(Self::Hyper),
            other => Err(format!("unknown speed: {}", other)),
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Normal => write!(f, "Normal"),
            Self::Turbo => write!(f, "Turbo"),
            Self::Hyper => write!(f, "Hyper Turbo"),
        }
    }
}

/// Whether eliminations pay a bounty.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Format {
    #[default]
    Freezeout,
    /// Knocking a player out pays their bounty.
    Knockout,
    /// Part of each collected bounty is added to the winner's own.
    Progressive,
}

impl Format {
    pub const fn all() -> &'static [Self] {
        &[Self::Freezeout, Self::Knockout, Self::Progressive]
    }
    pub const fn bounties(&self) -> bool {
        !matches!(self, Self::Freezeout)
    }
}

impl TryFrom<&str> for Format {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "freezeout" | "normal" => Ok(Self::Freezeout),
            "knockout" | "ko" => Ok(Self::Knockout),
            "progressive" | "pko" => Ok(Self::Progressive),
            other => Err(format!("unknown format: {}", other)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Freezeout => write!(f, "Freezeout"),
            Self::Knockout => write!(f, "Knockout (KO)"),
            Self::Progressive => write!(f, "Progressive Knockout (PKO)"),
        }
    }
}

/// Game played for the whole tournament.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Holdem,
    Omaha,
    SplitHoldem,
}

impl Variant {
    pub const fn all() -> &'static [Self] {
        &[Self::Holdem, Self::Omaha, Self::SplitHoldem]
    }
}

impl TryFrom<&str> for Variant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "holdem" | "nlh" | "nlhe" => Ok(Self::Holdem),
            "omaha" | "plo" => Ok(Self::Omaha),
            "split" | "splitholdem" | "split-holdem" => Ok(Self::SplitHoldem),
            other => Err(format!("unknown variant: {}", other)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Holdem => write!(f, "No-Limit Hold'em"),
            Self::Omaha => write!(f, "Omaha"),
            Self::SplitHoldem => write!(f, "Split Hold'em"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_lengths() {
        let minutes = Speed::all().iter().map(Speed::minutes).collect::<Vec<_>>();
        assert_eq!(minutes, vec![20, 15, 10, 6]);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Speed::try_from("Turbo"), Ok(Speed::Turbo));
        assert_eq!(Speed::try_from("hyper-turbo"), Ok(Speed::Hyper));
        assert_eq!(Format::try_from("pko"), Ok(Format::Progressive));
        assert_eq!(Variant::try_from("plo"), Ok(Variant::Omaha));
        assert!(Speed::try_from("glacial").is_err());
    }

    #[test]
    fn only_knockouts_pay_bounties() {
        assert!(!Format::Freezeout.bounties());
        assert!(Format::Knockout.bounties());
        assert!(Format::Progressive.bounties());
    }
}
