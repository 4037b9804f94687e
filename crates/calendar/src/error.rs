//! Error types for the chronal-calendar crate.

/// Error type for all fallible operations in the chronal-calendar crate.
///
/// This enum covers anomaly codes that break the three-valued month-length
/// rule and year records that cannot be placed on the day line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an anomaly value is not one of -1, 0 or 1.
    #[error("anomaly code {value} at term {index} is out of range (must be -1, 0 or 1)")]
    AnomalyOutOfRange {
        /// Zero-based term index of the offending value.
        index: usize,
        /// The value that was provided.
        value: i32,
    },

    /// Returned when an anomaly code does not hold exactly 24 terms.
    #[error("anomaly code has {len} terms (expected 24)")]
    InvalidAnomalyLength {
        /// The number of terms that was provided.
        len: usize,
    },

    /// Returned when a year's start epoch is NaN or infinite.
    #[error("year start epoch must be finite")]
    NonFiniteEpoch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_anomaly_out_of_range() {
        let err = CalendarError::AnomalyOutOfRange { index: 7, value: 2 };
        assert_eq!(
            err.to_string(),
            "anomaly code 2 at term 7 is out of range (must be -1, 0 or 1)"
        );
    }

    #[test]
    fn error_invalid_anomaly_length() {
        let err = CalendarError::InvalidAnomalyLength { len: 23 };
        assert_eq!(err.to_string(), "anomaly code has 23 terms (expected 24)");
    }

    #[test]
    fn error_non_finite_epoch() {
        assert_eq!(
            CalendarError::NonFiniteEpoch.to_string(),
            "year start epoch must be finite"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidAnomalyLength { len: 0 };
        let b = CalendarError::InvalidAnomalyLength { len: 0 };
        assert_eq!(a, b);
        assert_ne!(a, CalendarError::NonFiniteEpoch);
    }
}
