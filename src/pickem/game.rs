/// A game in the pick'em rotation.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Game {
    HoldemNormal,
    HoldemSuper,
    DrawmahaHi,
    Drawmaha27,
    DrawmahaA5,
    DrawmahaBadugi,
    DrawmahaHidugi,
    DrawmahaZero,
    Drawmaha49,
    DrawHi,
    Draw27,
    DrawA5,
    DrawBadugi,
    DrawHidugi,
    DrawBadacey,
    DrawBadeucey,
    DrawArchie,
    SuperStud,
    SuperStudEight,
    DoubleBoardHi,
    DoubleBoardBest,
}

impl Game {
    pub const fn all() -> &'static [Self] {
        &[
            Self::HoldemNormal,
            Self::HoldemSuper,
            Self::DrawmahaHi,
            Self::Drawmaha27,
            Self::DrawmahaA5,
            Self::DrawmahaBadugi,
            Self::DrawmahaHidugi,
            Self::DrawmahaZero,
            Self::Drawmaha49,
            Self::DrawHi,
            Self::Draw27,
            Self::DrawA5,
            Self::DrawBadugi,
            Self::DrawHidugi,
            Self::DrawBadacey,
            Self::DrawBadeucey,
            Self::DrawArchie,
            Self::SuperStud,
            Self::SuperStudEight,
            Self::DoubleBoardHi,
            Self::DoubleBoardBest,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::HoldemNormal => "Holdem - Normal",
            Self::HoldemSuper => "Holdem - Super",
            Self::DrawmahaHi => "Drawmaha - Hi",
            Self::Drawmaha27 => "Drawmaha - 27 lowball",
            Self::DrawmahaA5 => "Drawmaha - A5 lowball",
            Self::DrawmahaBadugi => "Drawmaha - Badugi",
            Self::DrawmahaHidugi => "Drawmaha - Hi-dugi",
            Self::DrawmahaZero => "Drawmaha - 0",
            Self::Drawmaha49 => "Drawmaha - 49",
            Self::DrawHi => "Draw - Hi",
            Self::Draw27 => "Draw - 27 lowball",
            Self::DrawA5 => "Draw - A5 lowball",
            Self::DrawBadugi => "Draw - Badugi",
            Self::DrawHidugi => "Draw - Hi-dugi",
            Self::DrawBadacey => "Draw - Badacey",
            Self::DrawBadeucey => "Draw - Badeucey",
            Self::DrawArchie => "Draw - Archie",
            Self::SuperStud => "Stud - Super Stud",
            Self::SuperStudEight => "Stud - Super Stud H/L8",
            Self::DoubleBoardHi => "Omaha - Double Board Hi/Hi",
            Self::DoubleBoardBest => "Omaha - Double Board Best/Best",
        }
    }

    pub const fn rules(&self) -> &'static str {
        match self {
            Self::HoldemNormal => {
                "Two hole cards and five community cards. Make the best five-card hand \
                 from any combination. Four betting rounds: preflop, flop, turn, river."
            }
            Self::HoldemSuper => {
                "Three hole cards and five community cards. The hand must use exactly \
                 two hole cards and three from the board."
            }
            Self::DrawmahaHi => {
                "Omaha combined with five-card draw, high hand only. Four hole cards, \
                 five community cards, and draws to improve the hole cards before the \
                 board is complete."
            }
            Self::Drawmaha27 => {
                "Omaha combined with draw, played for the lowest hand under 2-7 rules. \
                 Straights and flushes count against you and aces are high."
            }
            Self::DrawmahaA5 => {
                "Omaha combined with draw, played for the lowest hand under A-5 rules. \
                 Straights and flushes do not count and aces are low."
            }
            Self::DrawmahaBadugi => {
                "Omaha combined with five-card draw, played for the best badugi: four \
                 cards with no repeated suit or rank."
            }
            Self::DrawmahaHidugi => {
                "A badugi variant on four cards. Suits may not repeat but ranks may. \
                 Hands rank high card, pair, two pair, trips, quads; no straights or \
                 flushes, aces high. Best hand is four aces of different suits, worst is \
                 2-3-4-5 rainbow."
            }
            Self::DrawmahaZero => {
                "Omaha combined with five-card draw where the lowest point total wins. \
                 Face cards count zero, so the nuts is all pictures (K, Q, J, T)."
            }
            Self::Drawmaha49 => {
                "Omaha combined with five-card draw where the highest point total wins. \
                 Face cards count zero, so the nuts is TTTT9."
            }
            Self::DrawHi => {
                "Classic draw poker for the best high hand. No community cards; \
                 improve by discarding and drawing."
            }
            Self::Draw27 => {
                "Five-card draw played for the lowest hand under 2-7 rules. Straights \
                 and flushes count against you and aces are high."
            }
            Self::DrawA5 => {
                "Five-card draw played for the lowest hand under A-5 rules. Straights \
                 and flushes do not count and aces are low."
            }
            Self::DrawBadugi => {
                "Four-card draw for the best badugi: four cards with no repeated suit or \
                 rank."
            }
            Self::DrawHidugi => {
                "Four-card draw where suits may not repeat but ranks may. Hands rank \
                 high card, pair, two pair, trips, quads; aces high. Best hand is four \
                 aces of different suits, worst is 2-3-4-5 rainbow."
            }
            Self::DrawBadacey => {
                "Draw poker splitting the pot between the best badugi and the best A-5 \
                 low hand."
            }
            Self::DrawBadeucey => {
                "Draw poker splitting the pot between the best badugi and the best 2-7 \
                 low hand. Like Badacey with deuce-to-seven low counting."
            }
            Self::DrawArchie => {
                "Five-card draw splitting the pot between the best high hand and the \
                 best badugi. No community cards."
            }
            Self::SuperStud => {
                "Seven-card stud, but each player starts with four hole cards and \
                 discards two before play continues."
            }
            Self::SuperStudEight => {
                "Seven-card stud high/low split with an eight-or-better qualifier. Start \
                 with four hole cards and discard two. The low hand uses A-5 rules with \
                 cards eight or lower."
            }
            Self::DoubleBoardHi => {
                "Omaha with four or five hole cards and two boards. The best high hand \
                 on each board wins half the pot."
            }
            Self::DoubleBoardBest => {
                "Omaha with four or five hole cards and two boards, each split between \
                 its best high hand and its best low hand."
            }
        }
    }
}

impl TryFrom<&str> for Game {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        Self::all()
            .iter()
            .find(|g| g.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown game: {}", s))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
