use super::*;
use crate::Chips;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// One tournament played: what went in and what came back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    date: NaiveDate,
    buy_in: Chips,
    payout: Chips,
}

impl Session {
    pub fn new(date: NaiveDate, buy_in: Chips, payout: Chips) -> Result<Self, LedgerError> {
        match buy_in {
            0 => Err(LedgerError::ZeroBuyIn),
            _ => Ok(Self {
                date,
                buy_in,
                payout,
            }),
        }
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn buy_in(&self) -> Chips {
        self.buy_in
    }
    pub fn payout(&self) -> Chips {
        self.payout
    }
    pub fn net(&self) -> i64 {
        self.payout as i64 - self.buy_in as i64
    }
    /// Percent return on the buy-in.
    pub fn roi(&self) -> f64 {
        roi(self.net(), self.buy_in)
    }
}

/// Percent return, zero when nothing was invested.
pub(crate) fn roi(net: i64, buy_in: Chips) -> f64 {
    match buy_in {
        0 => 0.0,
        _ => net as f64 / buy_in as f64 * 100.0,
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  in {:>6}  out {:>6}  net {:>+7}  roi {:>+7.1}%",
            self.date,
            self.buy_in,
            self.payout,
            self.net(),
            self.roi()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn cash_finish() {
        let session = Session::new(day(), 50, 175).unwrap();
        assert_eq!(session.net(), 125);
        assert_eq!(session.roi(), 250.0);
    }

    #[test]
    fn bust() {
        let session = Session::new(day(), 40, 0).unwrap();
        assert_eq!(session.net(), -40);
        assert_eq!(session.roi(), -100.0);
    }

    #[test]
    fn free_rolls_are_rejected() {
        assert_eq!(Session::new(day(), 0, 100), Err(LedgerError::ZeroBuyIn));
    }

    #[test]
    fn serializes_date_as_iso() {
        let json = serde_json::to_string(&Session::new(day(), 20, 30).unwrap()).unwrap();
        assert_eq!(json, r#"{"date":"2024-03-09","buy_in":20,"payout":30}"#);
    }
}
