use chrono::{NaiveDateTime, Timelike};

use crate::models::activity::{Activity, ActivityForm, ActivityType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(i64),
}

// The activity form dialog: Closed, or Open in creating/editing mode.
// Save and cancel both go through close(), which always clears the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormDialog {
    Closed,
    Open { mode: FormMode, form: ActivityForm },
}

fn blank_form() -> ActivityForm {
    ActivityForm {
        subject_id: 0,
        teacher_id: 0,
        class_id: 0,
        room: String::new(),
        scheduled_start: NaiveDateTime::default(),
        scheduled_end: NaiveDateTime::default(),
        kind: ActivityType::Class,
    }
}

fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0).unwrap().with_nanosecond(0).unwrap()
}

impl FormDialog {
    pub fn new() -> Self {
        FormDialog::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormDialog::Open { .. })
    }

    pub fn open_new(&mut self) {
        *self = FormDialog::Open {
            mode: FormMode::Creating,
            form: blank_form(),
        };
    }

    // Pre-populates the form from an existing record, truncated to minute
    // precision as a datetime-local input would hold it.
    pub fn open_edit(&mut self, activity: &Activity) {
        *self = FormDialog::Open {
            mode: FormMode::Editing(activity.id),
            form: ActivityForm {
                subject_id: activity.subject_id,
                teacher_id: activity.teacher_id,
                class_id: activity.class_id,
                room: activity.room.clone(),
                scheduled_start: truncate_to_minute(activity.scheduled_start),
                scheduled_end: truncate_to_minute(activity.scheduled_end),
                kind: activity.kind,
            },
        };
    }

    pub fn close(&mut self) {
        *self = FormDialog::Closed;
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormDialog::Open {
                mode: FormMode::Editing(id),
                ..
            } => Some(*id),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&ActivityForm> {
        match self {
            FormDialog::Open { form, .. } => Some(form),
            FormDialog::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ActivityForm> {
        match self {
            FormDialog::Open { form, .. } => Some(form),
            FormDialog::Closed => None,
        }
    }
}

impl Default for FormDialog {
    fn default() -> Self {
        FormDialog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::seed_activities;
    use chrono::NaiveDate;

    #[test]
    fn open_new_starts_a_blank_creating_form() {
        let mut dialog = FormDialog::new();
        assert!(!dialog.is_open());

        dialog.open_new();
        assert!(dialog.is_open());
        assert_eq!(dialog.editing_id(), None);
        assert_eq!(dialog.form().unwrap().room, "");
    }

    #[test]
    fn open_edit_prefills_and_truncates_to_the_minute() {
        let mut activity = seed_activities().remove(0);
        activity.scheduled_start = NaiveDate::from_ymd_opt(2025, 8, 6)
            .unwrap()
            .and_hms_opt(8, 0, 45)
            .unwrap();

        let mut dialog = FormDialog::new();
        dialog.open_edit(&activity);

        assert_eq!(dialog.editing_id(), Some(activity.id));
        let form = dialog.form().unwrap();
        assert_eq!(form.scheduled_start.second(), 0);
        assert_eq!(
            form.scheduled_start,
            NaiveDate::from_ymd_opt(2025, 8, 6)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(form.subject_id, activity.subject_id);
        assert_eq!(form.room, activity.room);
    }

    #[test]
    fn close_always_clears_the_form() {
        let mut dialog = FormDialog::new();
        dialog.open_new();
        dialog.form_mut().unwrap().room = "A101".to_string();

        dialog.close();
        assert_eq!(dialog, FormDialog::Closed);
        assert!(dialog.form().is_none());

        let activity = seed_activities().remove(1);
        dialog.open_edit(&activity);
        dialog.close();
        assert!(dialog.editing_id().is_none());
    }
}
