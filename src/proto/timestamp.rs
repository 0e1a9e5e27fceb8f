//! Conversions between `chrono` instants and the wire `Timestamp`.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert a UTC instant into a wire timestamp.
///
/// Returns `None` when chrono carries a leap-second fraction
/// (nanos >= 1_000_000_000), which the wire format cannot represent.
pub fn from_datetime(instant: &DateTime<Utc>) -> Option<Timestamp> {
    let nanos = instant.timestamp_subsec_nanos();
    if nanos >= 1_000_000_000 {
        return None;
    }
    Some(Timestamp {
        seconds: instant.timestamp(),
        nanos: nanos as i32,
    })
}

/// Convert a wire timestamp back into a UTC instant.
pub fn to_datetime(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::from_timestamp(ts.seconds, nanos)
}

/// Serde adapter rendering `Option<Timestamp>` as an RFC 3339 string.
pub mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use prost_types::Timestamp;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{from_datetime, to_datetime};

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => {
                let instant = to_datetime(ts).ok_or_else(|| {
                    S::Error::custom(format!(
                        "timestamp out of range: seconds={}, nanos={}",
                        ts.seconds, ts.nanos
                    ))
                })?;
                serializer.serialize_some(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let instant = DateTime::parse_from_rfc3339(&raw)
            .map_err(D::Error::custom)?
            .with_timezone(&Utc);
        from_datetime(&instant)
            .map(Some)
            .ok_or_else(|| D::Error::custom("leap-second timestamps are not supported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_from_datetime_keeps_subsecond_precision() {
        let instant = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let ts = from_datetime(&instant).unwrap();
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 250_000_000);
        assert_eq!(to_datetime(&ts), Some(instant));
    }

    #[test]
    fn test_from_datetime_rejects_leap_second() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap()
            .and_utc();
        assert!(from_datetime(&leap).is_none());
    }

    #[test]
    fn test_to_datetime_rejects_negative_nanos() {
        let ts = Timestamp {
            seconds: 10,
            nanos: -1,
        };
        assert!(to_datetime(&ts).is_none());
    }
}
