use chrono::{DateTime, Utc};

/// Employment period value object
///
/// Both dates are optional: an employee may have no recorded start date,
/// and an open end date means the employment is ongoing.
///
/// # Invariants
/// - End date cannot be before the start date when both are set
/// - Is immutable after construction
///
/// # Example
/// ```
/// use teamroster_api::domain::employee::value_objects::EmploymentPeriod;
///
/// let period = EmploymentPeriod::default();
/// assert!(period.start_date().is_none());
/// assert!(period.end_date().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmploymentPeriod {
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl EmploymentPeriod {
    /// Creates a new EmploymentPeriod
    ///
    /// # Returns
    /// * `Ok(EmploymentPeriod)` - If the dates are consistent
    /// * `Err(String)` - If the end date precedes the start date
    pub fn new(
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Self, String> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err("End date cannot be before start date".to_string());
            }
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the start date if recorded
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Returns the end date if recorded
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    /// Whether the employment is active at the given instant
    ///
    /// An employee with no end date is always active; otherwise the
    /// employment ends once the end date has passed.
    #[allow(dead_code)]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.end_date {
            Some(end) => end >= now,
            None => true,
        }
    }

    /// Reconstructs a period from persistence layer data
    ///
    /// Bypasses validation; only to be used by repository implementations.
    pub fn from_persistence(
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}
