use chrono::{Duration, NaiveDateTime, Utc};
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const DISPLAY_FMT: &str = "%Y-%m-%d %H:%M";

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

// days_from_now returns the timestamp `days` days after the current time, or a
// validation error when that falls outside the representable calendar
pub fn days_from_now(days: i64) -> LibraryResult<NaiveDateTime> {
    Duration::try_days(days)
        .and_then(|delta| now().checked_add_signed(delta))
        .ok_or_else(|| LibraryError::validation(
            format!("loan period of {} days is out of range", days).as_str(),
            Some("400".to_string())))
}

pub fn format_date(time: &NaiveDateTime) -> String {
    time.format(DISPLAY_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}
