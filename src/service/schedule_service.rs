use chrono::{NaiveDate, Utc};

use crate::models::activity::{Activity, ActivityForm, seed_activities};
use crate::models::refdata::{ReferenceData, seed_reference_data};

// Owns the in-memory activity set plus the two view filters. All mutation
// goes through save/delete; nothing else touches the Vec.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    activities: Vec<Activity>,
    refs: ReferenceData,
    search_term: String,
    room_filter: String,
}

impl ScheduleBoard {
    pub fn new(refs: ReferenceData, activities: Vec<Activity>) -> Self {
        ScheduleBoard {
            activities,
            refs,
            search_term: String::new(),
            room_filter: String::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_reference_data(), seed_activities())
    }

    pub fn refs(&self) -> &ReferenceData {
        &self.refs
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find(&self, id: i64) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.trim().to_string();
    }

    pub fn set_room_filter(&mut self, room: &str) {
        self.room_filter = room.trim().to_string();
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.room_filter.clear();
    }

    // Case-insensitive substring search over subject, teacher and room,
    // AND-combined with an exact room filter. Empty filters match all.
    pub fn filtered(&self) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| self.matches_search(a) && self.matches_room(a))
            .collect()
    }

    pub fn activities_on(&self, date: NaiveDate) -> Vec<&Activity> {
        self.filtered()
            .into_iter()
            .filter(|a| a.start_date() == date)
            .collect()
    }

    fn matches_search(&self, activity: &Activity) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        activity.subject_name.to_lowercase().contains(&term)
            || activity.teacher_name.to_lowercase().contains(&term)
            || activity.room.to_lowercase().contains(&term)
    }

    fn matches_room(&self, activity: &Activity) -> bool {
        self.room_filter.is_empty() || activity.room == self.room_filter
    }

    // Editing replaces the record in place, preserving its id. Creation
    // appends with a current-time id, matching the original system; ids
    // are not collision-checked. Display fields are re-snapshotted from
    // the reference lists on every save.
    pub fn save(&mut self, form: &ActivityForm, editing: Option<i64>) -> Result<i64, String> {
        let subject = self
            .refs
            .subject(form.subject_id)
            .ok_or_else(|| format!("Unknown subject id {}", form.subject_id))?;
        let teacher = self
            .refs
            .teacher(form.teacher_id)
            .ok_or_else(|| format!("Unknown teacher id {}", form.teacher_id))?;
        let class = self
            .refs
            .class(form.class_id)
            .ok_or_else(|| format!("Unknown class id {}", form.class_id))?;

        let id = match editing {
            Some(id) => id,
            None => Utc::now().timestamp_millis(),
        };

        let record = Activity {
            id,
            subject_id: form.subject_id,
            teacher_id: form.teacher_id,
            class_id: form.class_id,
            room: form.room.clone(),
            scheduled_start: form.scheduled_start,
            scheduled_end: form.scheduled_end,
            kind: form.kind,
            subject_name: subject.name.clone(),
            subject_code: subject.code.clone(),
            teacher_name: teacher.name.clone(),
            class_name: class.name.clone(),
            grade_level: class.grade_level.clone(),
        };

        match editing {
            Some(id) => {
                let slot = self
                    .activities
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or_else(|| format!("No activity with id {} to edit", id))?;
                *slot = record;
            }
            None => self.activities.push(record),
        }
        Ok(id)
    }

    // Idempotent: deleting an absent id leaves the set unchanged.
    pub fn delete(&mut self, id: i64) {
        self.activities.retain(|a| a.id != id);
    }
}
