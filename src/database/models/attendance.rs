use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// One record per (user, date). Check-in/check-out progress is tracked by which
/// time fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default, with = "hh_mm")]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm")]
    pub check_out_time: Option<NaiveTime>,
    pub total_hours: Option<f64>,
    pub extra_hours: Option<f64>,
    pub status: AttendanceStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum AttendanceStatus {
        Present => "present",
        Absent => "absent",
        HalfDay => "half-day",
        Leave => "leave",
        Weekend => "weekend",
        Holiday => "holiday",
    }
}

impl Attendance {
    pub fn is_checked_in(&self) -> bool {
        self.check_in_time.is_some()
    }

    pub fn is_checked_out(&self) -> bool {
        self.check_out_time.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default, with = "hh_mm")]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm")]
    pub check_out_time: Option<NaiveTime>,
    pub total_hours: Option<f64>,
    pub extra_hours: Option<f64>,
    pub status: AttendanceStatus,
}

impl NewAttendance {
    pub fn into_attendance(self, id: String) -> Attendance {
        Attendance {
            id,
            user_id: self.user_id,
            date: self.date,
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
            total_hours: self.total_hours,
            extra_hours: self.extra_hours,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    #[serde(default, with = "hh_mm")]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm")]
    pub check_out_time: Option<NaiveTime>,
    pub total_hours: Option<f64>,
    pub extra_hours: Option<f64>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceUpdate {
    pub fn apply_to(self, attendance: &mut Attendance) {
        if let Some(check_in) = self.check_in_time {
            attendance.check_in_time = Some(check_in);
        }
        if let Some(check_out) = self.check_out_time {
            attendance.check_out_time = Some(check_out);
        }
        if let Some(total) = self.total_hours {
            attendance.total_hours = Some(total);
        }
        if let Some(extra) = self.extra_hours {
            attendance.extra_hours = Some(extra);
        }
        if let Some(status) = self.status {
            attendance.status = status;
        }
    }
}

/// Serializes an optional time of day as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => NaiveTime::parse_from_str(&s, FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_serialize_as_hours_and_minutes() {
        let record = Attendance {
            id: "a1".to_string(),
            user_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            check_in_time: NaiveTime::from_hms_opt(9, 5, 0),
            check_out_time: None,
            total_hours: None,
            extra_hours: None,
            status: AttendanceStatus::Present,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["checkInTime"], "09:05");
        assert!(json["checkOutTime"].is_null());
        assert_eq!(json["status"], "present");
        assert_eq!(json["date"], "2024-03-04");
    }

    #[test]
    fn test_missing_time_fields_deserialize_as_none() {
        let json = r#"{"id":"a","userId":"1","date":"2024-01-06","totalHours":null,"extraHours":null,"status":"weekend"}"#;
        let record: Attendance = serde_json::from_str(json).unwrap();
        assert_eq!(record.check_in_time, None);
        assert_eq!(record.status, AttendanceStatus::Weekend);
    }

    #[test]
    fn test_half_day_tag() {
        assert_eq!(AttendanceStatus::HalfDay.to_string(), "half-day");
        assert_eq!(
            "HALF-DAY".parse::<AttendanceStatus>(),
            Ok(AttendanceStatus::HalfDay)
        );
    }
}
