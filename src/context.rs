use chrono::{DateTime, Duration, Utc};

/// Wall-clock time fixed once per run and handed to every stage that needs it.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub now: DateTime<Utc>,
}

impl RunContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// `YYYY-MM-DD`, used in the post title and the output file name.
    pub fn date(&self) -> String {
        self.now.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM-DD HH:MM`, the front matter `date:` value.
    pub fn timestamp(&self) -> String {
        self.now.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Lower bound for the lookback window, in the API's `fromdt` format.
    pub fn from_dt(&self, days: u32) -> String {
        self.now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }
}
