//! In-memory alarm book

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::executor::{AlarmCreator, AlarmId, AlarmRequest};
use crate::format::format_hour_minute;

/// A one-time alarm
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: AlarmId,
    pub time: NaiveTime,
    pub enabled: bool,
    pub label: String,
    pub vibrate: bool,
    pub gradual_volume: bool,
    pub volume_level: u8,
    pub snooze_enabled: bool,
    pub snooze_minutes: u32,
    pub max_snooze_count: u32,
    pub created_at: DateTime<Local>,
}

impl Alarm {
    fn from_request(id: AlarmId, request: AlarmRequest) -> Self {
        Self {
            id,
            time: request.time,
            enabled: true,
            label: request.label,
            vibrate: request.vibrate,
            gradual_volume: request.gradual_volume,
            volume_level: request.volume_level,
            snooze_enabled: request.snooze_enabled,
            snooze_minutes: request.snooze_minutes,
            max_snooze_count: request.max_snooze_count,
            created_at: Local::now(),
        }
    }

    /// Today at `time` if still ahead of `from`, otherwise tomorrow
    pub fn next_trigger(&self, from: NaiveDateTime) -> NaiveDateTime {
        let today = from.date().and_time(self.time);
        if self.time > from.time() {
            today
        } else {
            today + TimeDelta::days(1)
        }
    }

    /// "07:30 PM", or "19:30" with `use_24_hour`
    pub fn formatted_time(&self, use_24_hour: bool) -> String {
        if use_24_hour {
            format!("{:02}:{:02}", self.time.hour(), self.time.minute())
        } else {
            // pad to a fixed width for lists
            format!("{:0>8}", format_hour_minute(self.time.hour(), self.time.minute()))
        }
    }
}

#[derive(Default)]
struct Book {
    last_id: AlarmId,
    alarms: Vec<Alarm>,
}

/// Alarms created during this session
#[derive(Default)]
pub struct AlarmStore {
    book: Mutex<Book>,
}

impl AlarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn book(&self) -> MutexGuard<'_, Book> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, request: AlarmRequest) -> AlarmId {
        let mut book = self.book();
        book.last_id += 1;
        let id = book.last_id;
        book.alarms.push(Alarm::from_request(id, request));
        id
    }

    pub fn get(&self, id: AlarmId) -> Option<Alarm> {
        self.book().alarms.iter().find(|a| a.id == id).cloned()
    }

    /// Alarms ordered by time of day
    pub fn list(&self) -> Vec<Alarm> {
        let mut alarms = self.book().alarms.clone();
        alarms.sort_by_key(|a| (a.time, a.id));
        alarms
    }

    pub fn delete(&self, id: AlarmId) -> Result<(), StoreError> {
        let mut book = self.book();
        let before = book.alarms.len();
        book.alarms.retain(|a| a.id != id);
        if book.alarms.len() == before {
            return Err(StoreError::AlarmNotFound(id));
        }
        Ok(())
    }

    pub fn set_enabled(&self, id: AlarmId, enabled: bool) -> Result<(), StoreError> {
        let mut book = self.book();
        let alarm = book
            .alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::AlarmNotFound(id))?;
        alarm.enabled = enabled;
        Ok(())
    }

    /// Enabled alarm that rings first after `from`
    pub fn next_alarm(&self, from: NaiveDateTime) -> Option<(Alarm, NaiveDateTime)> {
        self.book()
            .alarms
            .iter()
            .filter(|a| a.enabled)
            .map(|a| (a.clone(), a.next_trigger(from)))
            .min_by_key(|(a, at)| (*at, a.id))
    }
}

#[async_trait]
impl AlarmCreator for AlarmStore {
    async fn create_alarm(&self, request: AlarmRequest) -> Result<AlarmId> {
        Ok(self.insert(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlarmConfig;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_time(t(h, m))
    }

    fn request(h: u32, m: u32, label: &str) -> AlarmRequest {
        AlarmRequest::new(t(h, m), label.to_string(), &AlarmConfig::default())
    }

    #[test]
    fn test_next_trigger_today_or_tomorrow() {
        let store = AlarmStore::new();
        let id = store.insert(request(7, 0, ""));
        let alarm = store.get(id).unwrap();

        assert_eq!(alarm.next_trigger(at(6, 0)), at(7, 0));
        assert_eq!(alarm.next_trigger(at(7, 0)), at(7, 0) + TimeDelta::days(1));
        assert_eq!(alarm.next_trigger(at(20, 0)), at(7, 0) + TimeDelta::days(1));
    }

    #[test]
    fn test_formatted_time() {
        let store = AlarmStore::new();
        let id = store.insert(request(19, 30, ""));
        let alarm = store.get(id).unwrap();
        assert_eq!(alarm.formatted_time(true), "19:30");
        assert_eq!(alarm.formatted_time(false), "07:30 PM");

        let id = store.insert(request(11, 5, ""));
        assert_eq!(store.get(id).unwrap().formatted_time(false), "11:05 AM");
    }

    #[test]
    fn test_ids_list_and_delete() {
        let store = AlarmStore::new();
        let late = store.insert(request(22, 0, "late"));
        let early = store.insert(request(6, 0, "early"));
        assert_eq!((late, early), (1, 2));

        let labels: Vec<String> = store.list().into_iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["early", "late"]);

        store.delete(late).unwrap();
        assert_eq!(store.delete(late), Err(StoreError::AlarmNotFound(late)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_next_alarm_skips_disabled() {
        let store = AlarmStore::new();
        let seven = store.insert(request(7, 0, ""));
        let nine = store.insert(request(9, 0, ""));

        let (alarm, when) = store.next_alarm(at(6, 0)).unwrap();
        assert_eq!(alarm.id, seven);
        assert_eq!(when, at(7, 0));

        store.set_enabled(seven, false).unwrap();
        let (alarm, _) = store.next_alarm(at(6, 0)).unwrap();
        assert_eq!(alarm.id, nine);

        // after nine both ring tomorrow, seven first, but it is disabled
        let (alarm, when) = store.next_alarm(at(10, 0)).unwrap();
        assert_eq!(alarm.id, nine);
        assert_eq!(when, at(9, 0) + TimeDelta::days(1));

        assert_eq!(store.set_enabled(42, true), Err(StoreError::AlarmNotFound(42)));
    }

    #[tokio::test]
    async fn test_create_alarm_capability() {
        let store = AlarmStore::new();
        let id = store.create_alarm(request(6, 45, "run")).await.unwrap();
        let alarm = store.get(id).unwrap();
        assert!(alarm.enabled);
        assert_eq!(alarm.label, "run");
        assert_eq!(alarm.snooze_minutes, 10);
    }
}
