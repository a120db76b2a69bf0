use super::session::roi;
use super::*;
use crate::Chips;

/// Totals across every recorded session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    buy_in: Chips,
    payout: Chips,
}

impl Summary {
    pub fn buy_in(&self) -> Chips {
        self.buy_in
    }
    pub fn payout(&self) -> Chips {
        self.payout
    }
    pub fn net(&self) -> i64 {
        self.payout as i64 - self.buy_in as i64
    }
    pub fn roi(&self) -> f64 {
        roi(self.net(), self.buy_in)
    }
}

impl<'a> FromIterator<&'a Session> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Session>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |sum, session| Self {
            buy_in: sum.buy_in + session.buy_in(),
            payout: sum.payout + session.payout(),
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "in {}  out {}  net {:+}  roi {:+.1}%",
            self.buy_in,
            self.payout,
            self.net(),
            self.roi()
        )
    }
}
