//! Molad as a civil instant, and the Kiddush Levana windows derived from it.
//!
//! The molad is reckoned in Jerusalem local mean time. Converting it to
//! Israel standard time (UTC+2) subtracts the difference between the
//! longitude of Har Habayis and the standard meridian of 30°E:
//! `35.2354 * 4 min - 120 min`, about 20.94 minutes.

use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta};
use luach_calendar::CalendarError;
use tracing::trace;

use crate::calendar::JewishCalendar;

/// Seconds east of UTC for Israel standard time.
const JERUSALEM_STANDARD_OFFSET_SECS: i32 = 2 * 3600;

/// Local mean time minus standard time at Har Habayis, in milliseconds.
const LOCAL_MEAN_TIME_OFFSET_MS: i64 = 1_256_496;

fn jerusalem_standard_time() -> FixedOffset {
    FixedOffset::east_opt(JERUSALEM_STANDARD_OFFSET_SECS).expect("+02:00 is a valid offset")
}

impl JewishCalendar {
    /// Returns the molad of the current month in Israel standard time.
    ///
    /// # Errors
    ///
    /// Fails only when the molad lies outside the supported date range.
    pub fn molad_as_instant(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        let molad = self.date().molad()?;
        // a chelek is 10/3 seconds
        let millis = i64::from(molad.molad_hours()) * 3_600_000
            + i64::from(molad.molad_minutes()) * 60_000
            + i64::from(molad.molad_chalakim()) * 10_000 / 3;
        let local_mean = molad.naive_date().and_time(NaiveTime::default())
            + TimeDelta::milliseconds(millis - LOCAL_MEAN_TIME_OFFSET_MS);
        let utc = local_mean - TimeDelta::seconds(i64::from(JERUSALEM_STANDARD_OFFSET_SECS));
        let instant = DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, jerusalem_standard_time());
        trace!(%instant, year = self.jewish_year(), month = %self.jewish_month(), "molad instant");
        Ok(instant)
    }

    /// Earliest time for Kiddush Levana by the three-day opinion: molad + 72 hours.
    ///
    /// # Errors
    ///
    /// See [`molad_as_instant`](Self::molad_as_instant).
    pub fn tchilas_zman_kidush_levana_3_days(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(self.molad_as_instant()? + TimeDelta::hours(72))
    }

    /// Earliest time for Kiddush Levana by the seven-day opinion: molad + 168 hours.
    ///
    /// # Errors
    ///
    /// See [`molad_as_instant`](Self::molad_as_instant).
    pub fn tchilas_zman_kidush_levana_7_days(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(self.molad_as_instant()? + TimeDelta::hours(168))
    }

    /// Latest time for Kiddush Levana: half the interval between molados,
    /// 14 days 18 hours 22 minutes 1.666 seconds after the molad.
    ///
    /// # Errors
    ///
    /// See [`molad_as_instant`](Self::molad_as_instant).
    pub fn sof_zman_kidush_levana_between_moldos(
        &self,
    ) -> Result<DateTime<FixedOffset>, CalendarError> {
        let half_month = TimeDelta::days(14)
            + TimeDelta::hours(18)
            + TimeDelta::minutes(22)
            + TimeDelta::seconds(1)
            + TimeDelta::milliseconds(666);
        Ok(self.molad_as_instant()? + half_month)
    }

    /// Latest time for Kiddush Levana by the fifteen-day opinion: molad + 15 days.
    ///
    /// # Errors
    ///
    /// See [`molad_as_instant`](Self::molad_as_instant).
    pub fn sof_zman_kidush_levana_15_days(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(self.molad_as_instant()? + TimeDelta::days(15))
    }
}
