use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Class,
    Test,
    Seminar,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Class => "class",
            ActivityType::Test => "test",
            ActivityType::Seminar => "seminar",
        }
    }
}

// A scheduled occupation of a room/time slot. The *_name/code/grade fields
// are display copies taken from the reference lists when the activity is
// saved; later edits to reference data do not rewrite history.
// scheduled_start < scheduled_end is expected but not enforced anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub subject_id: u32,
    pub teacher_id: u32,
    pub class_id: u32,
    pub room: String,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub kind: ActivityType,
    pub subject_name: String,
    pub subject_code: String,
    pub teacher_name: String,
    pub class_name: String,
    pub grade_level: String,
}

impl Activity {
    pub fn start_date(&self) -> NaiveDate {
        self.scheduled_start.date()
    }
}

// Mutable payload of the activity form dialog. Times are held at minute
// precision, mirroring a datetime-local input.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub subject_id: u32,
    pub teacher_id: u32,
    pub class_id: u32,
    pub room: String,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub kind: ActivityType,
}

pub fn seed_activities() -> Vec<Activity> {
    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    vec![
        Activity {
            id: 1,
            subject_id: 1,
            teacher_id: 1,
            class_id: 1,
            room: "A101".to_string(),
            scheduled_start: at(2025, 8, 6, 8, 0),
            scheduled_end: at(2025, 8, 6, 9, 30),
            kind: ActivityType::Class,
            subject_name: "Matemática".to_string(),
            subject_code: "MAT101".to_string(),
            teacher_name: "Prof. Silva".to_string(),
            class_name: "3º A".to_string(),
            grade_level: "3º ano".to_string(),
        },
        Activity {
            id: 2,
            subject_id: 2,
            teacher_id: 2,
            class_id: 2,
            room: "B203".to_string(),
            scheduled_start: at(2025, 8, 6, 10, 0),
            scheduled_end: at(2025, 8, 6, 11, 30),
            kind: ActivityType::Test,
            subject_name: "História".to_string(),
            subject_code: "HIS102".to_string(),
            teacher_name: "Prof. Santos".to_string(),
            class_name: "2º B".to_string(),
            grade_level: "2º ano".to_string(),
        },
        Activity {
            id: 3,
            subject_id: 3,
            teacher_id: 3,
            class_id: 1,
            room: "Lab01".to_string(),
            scheduled_start: at(2025, 8, 7, 14, 0),
            scheduled_end: at(2025, 8, 7, 16, 0),
            kind: ActivityType::Seminar,
            subject_name: "Química".to_string(),
            subject_code: "QUI103".to_string(),
            teacher_name: "Prof. Costa".to_string(),
            class_name: "3º A".to_string(),
            grade_level: "3º ano".to_string(),
        },
    ]
}
