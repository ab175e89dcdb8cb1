use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::{Attendance, AttendanceStatus, AttendanceUpdate, NewAttendance};
use crate::error::AppError;
use crate::utils::{days_in_month, first_day_of_month};

/// Hours in a standard working day; anything beyond counts as extra.
pub const STANDARD_WORK_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub user_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
    pub user_id: Option<String>,
}

/// One month of a user's attendance laid out for a calendar grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Sunday = 0
    pub first_weekday: u32,
    pub days: Vec<Attendance>,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Hours between check-in and check-out at minute precision, rounded to one decimal.
pub fn worked_hours(check_in: NaiveTime, check_out: NaiveTime) -> f64 {
    let hours = f64::from(check_out.hour()) - f64::from(check_in.hour());
    let minutes = f64::from(check_out.minute()) - f64::from(check_in.minute());
    round_to_tenth(hours + minutes / 60.0)
}

fn minute_of(now: NaiveDateTime) -> NaiveTime {
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now.time())
}

/// Sets today's check-in time, creating a `present` record if today has none.
pub async fn check_in(
    store: &Store,
    user_id: &str,
    now: NaiveDateTime,
) -> Result<Attendance, AppError> {
    let today = now.date();
    let time = minute_of(now);

    let record = store
        .mutate_data(|data| {
            let existing = data.attendance_for(user_id, today).map(|a| a.id.clone());
            match existing {
                Some(id) => data
                    .update_attendance(
                        &id,
                        AttendanceUpdate {
                            check_in_time: Some(time),
                            ..Default::default()
                        },
                    )
                    .cloned(),
                None => Some(
                    data.add_attendance(NewAttendance {
                        user_id: user_id.to_string(),
                        date: today,
                        check_in_time: Some(time),
                        check_out_time: None,
                        total_hours: None,
                        extra_hours: None,
                        status: AttendanceStatus::Present,
                    })
                    .clone(),
                ),
            }
        })
        .await
        .ok_or_else(|| AppError::internal_server_error_message("Attendance record vanished"))?;

    log::info!("User {} checked in at {}", user_id, time.format("%H:%M"));
    Ok(record)
}

/// Closes today's record. A missing check-in counts from 09:00.
pub async fn check_out(
    store: &Store,
    user_id: &str,
    now: NaiveDateTime,
) -> Result<Attendance, AppError> {
    let today = now.date();
    let time = minute_of(now);
    let default_check_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();

    let record = store
        .mutate_data(|data| {
            let (id, check_in) = data
                .attendance_for(user_id, today)
                .map(|a| (a.id.clone(), a.check_in_time))?;
            let total = worked_hours(check_in.unwrap_or(default_check_in), time);
            data.update_attendance(
                &id,
                AttendanceUpdate {
                    check_out_time: Some(time),
                    total_hours: Some(total),
                    extra_hours: Some(round_to_tenth((total - STANDARD_WORK_HOURS).max(0.0))),
                    ..Default::default()
                },
            )
            .cloned()
        })
        .await
        .ok_or_else(|| {
            AppError::BadRequest("No attendance record for today; check in first".to_string())
        })?;

    log::info!("User {} checked out at {}", user_id, time.format("%H:%M"));
    Ok(record)
}

/// Records matching the query, newest date first.
pub async fn list_attendance(store: &Store, query: &AttendanceQuery) -> Vec<Attendance> {
    let data = store.data().await;
    let mut records: Vec<Attendance> = data
        .attendance
        .iter()
        .filter(|a| query.user_id.as_deref().is_none_or(|id| a.user_id == id))
        .filter(|a| query.from.is_none_or(|from| a.date >= from))
        .filter(|a| query.to.is_none_or(|to| a.date <= to))
        .cloned()
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

pub async fn month_calendar(
    store: &Store,
    user_id: &str,
    year: i32,
    month: u32,
) -> Result<MonthCalendar, AppError> {
    let (Some(days), Some(first_weekday)) =
        (days_in_month(year, month), first_day_of_month(year, month))
    else {
        return Err(AppError::BadRequest(format!(
            "Invalid month {}-{}",
            year, month
        )));
    };

    let data = store.data().await;
    let mut records: Vec<Attendance> = data
        .attendance
        .iter()
        .filter(|a| a.user_id == user_id && a.date.year() == year && a.date.month() == month)
        .cloned()
        .collect();
    records.sort_by(|a, b| a.date.cmp(&b.date));

    Ok(MonthCalendar {
        year,
        month,
        days_in_month: days,
        first_weekday,
        days: records,
    })
}

pub async fn today_for(store: &Store, user_id: &str, today: NaiveDate) -> Option<Attendance> {
    store.data().await.attendance_for(user_id, today).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::storage::Storage;
    use crate::database::stores::{AuthStore, DataStore};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn store() -> Store {
        Store::new(Storage::memory(), AuthStore::new(), DataStore::new())
    }

    #[test]
    fn test_worked_hours() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(worked_hours(t(9, 0), t(18, 0)), 9.0);
        assert_eq!(worked_hours(t(9, 30), t(17, 45)), 8.3);
        assert_eq!(worked_hours(t(9, 50), t(10, 10)), 0.3);
    }

    #[tokio::test]
    async fn test_check_in_then_out() {
        let store = store();
        let record = check_in(&store, "1", at("2024-03-04", "09:15:42"))
            .await
            .unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.check_in_time, NaiveTime::from_hms_opt(9, 15, 0));

        let record = check_out(&store, "1", at("2024-03-04", "19:15:00"))
            .await
            .unwrap();
        assert_eq!(record.total_hours, Some(10.0));
        assert_eq!(record.extra_hours, Some(2.0));
        assert_eq!(store.data().await.attendance.len(), 1);
    }

    #[tokio::test]
    async fn test_check_in_updates_existing_record() {
        let store = store();
        check_in(&store, "1", at("2024-03-04", "09:00:00")).await.unwrap();
        let record = check_in(&store, "1", at("2024-03-04", "09:45:00"))
            .await
            .unwrap();
        assert_eq!(record.check_in_time, NaiveTime::from_hms_opt(9, 45, 0));
        assert_eq!(store.data().await.attendance.len(), 1);
    }

    #[tokio::test]
    async fn test_check_out_without_check_in_time_counts_from_nine() {
        let store = store();
        store
            .mutate_data(|data| {
                data.add_attendance(NewAttendance {
                    user_id: "1".to_string(),
                    date: at("2024-03-04", "00:00:00").date(),
                    check_in_time: None,
                    check_out_time: None,
                    total_hours: None,
                    extra_hours: None,
                    status: AttendanceStatus::HalfDay,
                });
            })
            .await;

        let record = check_out(&store, "1", at("2024-03-04", "13:30:00"))
            .await
            .unwrap();
        assert_eq!(record.total_hours, Some(4.5));
        assert_eq!(record.extra_hours, Some(0.0));
    }

    #[tokio::test]
    async fn test_check_out_requires_record() {
        let store = store();
        let result = check_out(&store, "1", at("2024-03-04", "18:00:00")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let store = store();
        check_in(&store, "1", at("2024-03-04", "09:00:00")).await.unwrap();
        check_in(&store, "1", at("2024-03-05", "09:00:00")).await.unwrap();
        check_in(&store, "2", at("2024-03-05", "09:00:00")).await.unwrap();

        let records = list_attendance(
            &store,
            &AttendanceQuery {
                user_id: Some("1".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, at("2024-03-05", "00:00:00").date());
    }

    #[tokio::test]
    async fn test_month_calendar() {
        let store = store();
        check_in(&store, "1", at("2024-02-29", "09:00:00")).await.unwrap();
        check_in(&store, "1", at("2024-02-01", "09:00:00")).await.unwrap();
        check_in(&store, "1", at("2024-03-01", "09:00:00")).await.unwrap();
        check_in(&store, "2", at("2024-02-10", "09:00:00")).await.unwrap();

        let calendar = month_calendar(&store, "1", 2024, 2).await.unwrap();
        assert_eq!(calendar.days_in_month, 29);
        assert_eq!(calendar.first_weekday, 4);
        let dates: Vec<u32> = calendar.days.iter().map(|a| a.date.day()).collect();
        assert_eq!(dates, vec![1, 29]);

        assert!(matches!(
            month_calendar(&store, "1", 2024, 13).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
