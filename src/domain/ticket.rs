use std::fmt;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Remaining work on a ticket as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemainingHours {
    /// The tracker had no estimate; counts as zero hours.
    Unestimated,
    Estimated(f64),
}

impl RemainingHours {
    /// Fractional seconds are dropped before converting.
    pub fn from_seconds(seconds: Option<f64>) -> Self {
        match seconds {
            Some(seconds) => RemainingHours::Estimated(seconds.trunc() / SECONDS_PER_HOUR),
            None => RemainingHours::Unestimated,
        }
    }

    pub fn as_hours(&self) -> f64 {
        match self {
            RemainingHours::Unestimated => 0.0,
            RemainingHours::Estimated(hours) => *hours,
        }
    }
}

impl fmt::Display for RemainingHours {
    // `{:?}` on f64 is the shortest exact form and keeps a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingHours::Unestimated => f.write_str("0"),
            RemainingHours::Estimated(hours) => write!(f, "{hours:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub remaining_hours: RemainingHours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_estimate_is_exactly_zero() {
        let hours = RemainingHours::from_seconds(None);
        assert_eq!(hours.as_hours(), 0.0);
        assert_eq!(hours.to_string(), "0");
    }

    #[test]
    fn estimate_keeps_exact_division() {
        assert_eq!(RemainingHours::from_seconds(Some(7200.0)).to_string(), "2.0");
        assert_eq!(RemainingHours::from_seconds(Some(1800.0)).to_string(), "0.5");
        assert_eq!(
            RemainingHours::from_seconds(Some(4800.0)).to_string(),
            "1.3333333333333333"
        );
        assert_eq!(RemainingHours::from_seconds(Some(0.0)).to_string(), "0.0");
        assert_eq!(RemainingHours::from_seconds(Some(4800.0)).as_hours(), 4800.0 / 3600.0);
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(RemainingHours::from_seconds(Some(7200.9)).to_string(), "2.0");
    }
}
