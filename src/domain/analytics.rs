//! Per-day click aggregation.
//!
//! Click timestamps are stored in UTC. [`summarize_clicks`] converts each one
//! into the requested time zone before bucketing by calendar day, so the same
//! log can produce different day keys on hosts in different zones.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::entities::DAY_FORMAT;

/// Clicks that fell on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    #[serde(rename = "click_counts")]
    pub count: usize,
    /// RFC 3339 timestamps in the summary's time zone.
    pub timestamps: Vec<String>,
}

/// Click totals for one short code.
///
/// `by_day` preserves the order in which days were first seen in the input.
/// Serializes as `{ "total_click_counts": n, "day": { "<day>": {..} } }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickSummary {
    pub total_clicks: usize,
    pub by_day: Vec<(String, DayBucket)>,
}

impl ClickSummary {
    /// Returns the bucket for a day key such as `29 Jan 2025`.
    pub fn day(&self, key: &str) -> Option<&DayBucket> {
        self.by_day
            .iter()
            .find(|(day, _)| day == key)
            .map(|(_, bucket)| bucket)
    }
}

struct OrderedDays<'a>(&'a [(String, DayBucket)]);

impl Serialize for OrderedDays<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, bucket) in self.0 {
            map.serialize_entry(day, bucket)?;
        }
        map.end()
    }
}

impl Serialize for ClickSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("total_click_counts", &self.total_clicks)?;
        map.serialize_entry("day", &OrderedDays(&self.by_day))?;
        map.end()
    }
}

/// Buckets UTC click timestamps by calendar day in `tz`.
pub fn summarize_clicks<Tz>(clicks: &[DateTime<Utc>], tz: &Tz) -> ClickSummary
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut by_day: Vec<(String, DayBucket)> = Vec::new();

    for clicked_at in clicks {
        let local = clicked_at.with_timezone(tz);
        let key = local.format(DAY_FORMAT).to_string();
        let stamp = local.to_rfc3339_opts(SecondsFormat::Secs, true);

        match by_day.iter_mut().find(|(day, _)| *day == key) {
            Some((_, bucket)) => {
                bucket.count += 1;
                bucket.timestamps.push(stamp);
            }
            None => by_day.push((
                key,
                DayBucket {
                    count: 1,
                    timestamps: vec![stamp],
                },
            )),
        }
    }

    ClickSummary {
        total_clicks: clicks.len(),
        by_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_empty_log() {
        let summary = summarize_clicks(&[], &Utc);
        assert_eq!(summary.total_clicks, 0);
        assert!(summary.by_day.is_empty());
    }

    #[test]
    fn test_three_and_one_across_two_days() {
        let clicks = vec![
            at(2025, 1, 29, 8, 0),
            at(2025, 1, 29, 12, 30),
            at(2025, 1, 29, 23, 59),
            at(2025, 1, 30, 0, 1),
        ];

        let summary = summarize_clicks(&clicks, &Utc);

        assert_eq!(summary.total_clicks, 4);
        assert_eq!(summary.by_day.len(), 2);
        assert_eq!(summary.day("29 Jan 2025").unwrap().count, 3);
        assert_eq!(summary.day("30 Jan 2025").unwrap().count, 1);
        assert_eq!(
            summary.day("30 Jan 2025").unwrap().timestamps,
            vec!["2025-01-30T00:01:00Z".to_string()]
        );
    }

    #[test]
    fn test_days_keep_first_seen_order() {
        let clicks = vec![
            at(2025, 2, 2, 10, 0),
            at(2025, 2, 1, 10, 0),
            at(2025, 2, 2, 11, 0),
        ];

        let summary = summarize_clicks(&clicks, &Utc);
        let keys: Vec<&str> = summary.by_day.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys, vec!["02 Feb 2025", "01 Feb 2025"]);
    }

    #[test]
    fn test_bucketing_uses_target_zone() {
        // 23:30 UTC is already the next day at UTC+02:00.
        let clicks = vec![at(2025, 1, 29, 23, 30), at(2025, 1, 29, 10, 0)];
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();

        let summary = summarize_clicks(&clicks, &tz);

        assert_eq!(summary.day("30 Jan 2025").unwrap().count, 1);
        assert_eq!(summary.day("29 Jan 2025").unwrap().count, 1);
        assert_eq!(
            summary.day("30 Jan 2025").unwrap().timestamps[0],
            "2025-01-30T01:30:00+02:00"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let summary = summarize_clicks(&[at(2025, 1, 29, 8, 0)], &Utc);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["total_click_counts"], 1);
        assert_eq!(value["day"]["29 Jan 2025"]["click_counts"], 1);
        assert_eq!(
            value["day"]["29 Jan 2025"]["timestamps"][0],
            "2025-01-29T08:00:00Z"
        );
    }
}
