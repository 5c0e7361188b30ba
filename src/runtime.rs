use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use inquire::{Select, Text};

use crate::handlers::form::FormDialog;
use crate::models::activity::ActivityType;
use crate::service::chat_service::{ChatSession, GREETING};
use crate::service::completion_service::{CompletionClient, OpenRouterService};
use crate::service::month_grid::month_grid;
use crate::service::schedule_service::ScheduleBoard;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub async fn run_chat(api_key: String) {
    let client: Arc<dyn CompletionClient> = Arc::new(OpenRouterService::new(api_key));
    let mut session = ChatSession::new(client);

    println!("{}", GREETING);
    println!("(empty message is ignored; 'sair' leaves the chat)");

    loop {
        let input = match Text::new("Mensagem para a IA Assistente:").prompt() {
            Ok(text) => text,
            Err(_) => break,
        };
        if input.trim().eq_ignore_ascii_case("sair") {
            break;
        }
        if session.is_pending() {
            continue;
        }
        println!("Digitando...");
        if let Some(reply) = session.submit(&input).await {
            println!("{}", reply.content);
        }
    }
}

pub async fn run_calendar() {
    let mut board = ScheduleBoard::seeded();
    let mut anchor = Local::now().date_naive().with_day(1).unwrap();
    let mut dialog = FormDialog::new();

    loop {
        println!("\n{}", render_month(&board, anchor));
        let actions = vec![
            "Previous month",
            "Next month",
            "Day agenda",
            "New activity",
            "Edit activity",
            "Delete activity",
            "Set search",
            "Set room filter",
            "Clear filters",
            "Quit",
        ];
        let action = match Select::new("Schedule:", actions).prompt() {
            Ok(choice) => choice,
            Err(_) => break,
        };
        match action {
            "Previous month" => anchor = shift_month(anchor, -1),
            "Next month" => anchor = shift_month(anchor, 1),
            "Day agenda" => match prompt_date("Agenda date:") {
                Ok(date) => println!("{}", render_agenda(&board, date)),
                Err(e) => println!("{}", e),
            },
            "New activity" => {
                dialog.open_new();
                match run_activity_form(&mut board, &mut dialog) {
                    Ok(id) => println!("Created activity {}", id),
                    Err(e) => println!("Failed to save activity: {}", e),
                }
            }
            "Edit activity" => match pick_activity(&board, "Edit which activity?") {
                Some(id) => {
                    let activity = board.find(id).cloned();
                    if let Some(activity) = activity {
                        dialog.open_edit(&activity);
                        match run_activity_form(&mut board, &mut dialog) {
                            Ok(id) => println!("Updated activity {}", id),
                            Err(e) => println!("Failed to save activity: {}", e),
                        }
                    }
                }
                None => println!("Nothing to edit."),
            },
            "Delete activity" => match pick_activity(&board, "Delete which activity?") {
                Some(id) => {
                    board.delete(id);
                    println!("Deleted activity {}", id);
                }
                None => println!("Nothing to delete."),
            },
            "Set search" => {
                if let Ok(term) = Text::new("Search subject/teacher/room:").prompt() {
                    board.set_search_term(&term);
                }
            }
            "Set room filter" => {
                let mut rooms: Vec<String> = board.refs().rooms.clone();
                rooms.insert(0, "(all rooms)".to_string());
                if let Ok(choice) = Select::new("Room:", rooms).prompt() {
                    if choice == "(all rooms)" {
                        board.set_room_filter("");
                    } else {
                        board.set_room_filter(&choice);
                    }
                }
            }
            "Clear filters" => board.clear_filters(),
            _ => break,
        }
    }
}

pub fn render_month(board: &ScheduleBoard, anchor: NaiveDate) -> String {
    let mut body = format!("{}\n", anchor.format("%B %Y"));
    body.push_str(" Dom  Seg  Ter  Qua  Qui  Sex  Sáb\n");
    for (idx, cell) in month_grid(anchor).iter().enumerate() {
        let marker = if cell.in_current_month { ' ' } else { '.' };
        let busy = if board.activities_on(cell.date).is_empty() {
            ' '
        } else {
            '*'
        };
        body.push_str(&format!("{}{:>2}{} ", marker, cell.date.day(), busy));
        if idx % 7 == 6 {
            body.push('\n');
        }
    }
    body.trim_end().to_string()
}

pub fn render_agenda(board: &ScheduleBoard, date: NaiveDate) -> String {
    let hits = board.activities_on(date);
    if hits.is_empty() {
        return format!("No activities scheduled for {}", date);
    }
    let mut body = format!("Activities on {}:\n", date);
    for activity in hits {
        body.push_str(&format!(
            "- [{}] {} {} - {} | room {} | {} | {}\n",
            activity.kind.label(),
            activity.subject_name,
            activity.scheduled_start.format("%H:%M"),
            activity.scheduled_end.format("%H:%M"),
            activity.room,
            activity.teacher_name,
            activity.class_name,
        ));
    }
    body.trim_end().to_string()
}

fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let months = anchor.year() * 12 + anchor.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1).unwrap()
}

fn pick_activity(board: &ScheduleBoard, prompt: &str) -> Option<i64> {
    if board.activities().is_empty() {
        return None;
    }
    let labels: Vec<String> = board
        .activities()
        .iter()
        .map(|a| {
            format!(
                "{} | {} {} | {} | {}",
                a.id,
                a.start_date(),
                a.scheduled_start.format("%H:%M"),
                a.subject_name,
                a.room
            )
        })
        .collect();
    let choice = Select::new(prompt, labels).prompt().ok()?;
    choice.split(" | ").next()?.parse::<i64>().ok()
}

// Prompts every form field in order. Errors (including an aborted prompt)
// leave the board untouched; the dialog is closed either way.
fn run_activity_form(board: &mut ScheduleBoard, dialog: &mut FormDialog) -> Result<i64, String> {
    let filled = fill_form_from_prompts(board, dialog);
    let result = match filled {
        Ok(()) => {
            let editing = dialog.editing_id();
            let form = dialog.form().cloned().ok_or("Form dialog is not open")?;
            board.save(&form, editing)
        }
        Err(e) => Err(e),
    };
    dialog.close();
    result
}

fn fill_form_from_prompts(board: &ScheduleBoard, dialog: &mut FormDialog) -> Result<(), String> {
    let refs = board.refs().clone();
    let form = dialog
        .form_mut()
        .ok_or_else(|| "Form dialog is not open".to_string())?;

    let subject_labels: Vec<String> = refs
        .subjects
        .iter()
        .map(|s| format!("{} ({})", s.name, s.code))
        .collect();
    let idx = prompt_choice("Subject:", &subject_labels)?;
    form.subject_id = refs.subjects[idx].id;

    let teacher_labels: Vec<String> = refs.teachers.iter().map(|t| t.name.clone()).collect();
    let idx = prompt_choice("Teacher:", &teacher_labels)?;
    form.teacher_id = refs.teachers[idx].id;

    let class_labels: Vec<String> = refs
        .classes
        .iter()
        .map(|c| format!("{} - {}", c.name, c.grade_level))
        .collect();
    let idx = prompt_choice("Class:", &class_labels)?;
    form.class_id = refs.classes[idx].id;

    let idx = prompt_choice("Room:", &refs.rooms)?;
    form.room = refs.rooms[idx].clone();

    let kind_labels = vec!["class".to_string(), "test".to_string(), "seminar".to_string()];
    form.kind = match prompt_choice("Activity type:", &kind_labels)? {
        0 => ActivityType::Class,
        1 => ActivityType::Test,
        _ => ActivityType::Seminar,
    };

    form.scheduled_start = prompt_datetime("Start:", Some(form.scheduled_start))?;
    form.scheduled_end = prompt_datetime("End:", Some(form.scheduled_end))?;
    Ok(())
}

fn prompt_choice(label: &str, options: &[String]) -> Result<usize, String> {
    let choice = Select::new(label, options.to_vec())
        .prompt()
        .map_err(|e| e.to_string())?;
    options
        .iter()
        .position(|o| o == &choice)
        .ok_or_else(|| "Selection not in options".to_string())
}

fn prompt_date(label: &str) -> Result<NaiveDate, String> {
    let raw = Text::new(label)
        .with_help_message("format YYYY-MM-DD")
        .prompt()
        .map_err(|e| e.to_string())?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", raw.trim(), e))
}

fn prompt_datetime(label: &str, initial: Option<NaiveDateTime>) -> Result<NaiveDateTime, String> {
    let initial_str = initial.map(|dt| dt.format(DATETIME_FORMAT).to_string());
    let mut prompt = Text::new(label).with_help_message("format YYYY-MM-DDTHH:MM");
    if let Some(value) = initial_str.as_deref() {
        prompt = prompt.with_initial_value(value);
    }
    let raw = prompt.prompt().map_err(|e| e.to_string())?;
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
        .map_err(|e| format!("Invalid datetime '{}': {}", raw.trim(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_month_marks_busy_days_and_fills_six_rows() {
        let board = ScheduleBoard::seeded();
        let rendered = render_month(&board, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        // header + weekday row + 6 grid rows
        assert_eq!(rendered.lines().count(), 8);
        assert!(rendered.contains("Dom"));
        assert!(rendered.contains(" 6*"));
        assert!(rendered.contains(" 7*"));
    }

    #[test]
    fn render_agenda_lists_matches_or_reports_none() {
        let board = ScheduleBoard::seeded();
        let busy = render_agenda(&board, NaiveDate::from_ymd_opt(2025, 8, 6).unwrap());
        assert!(busy.contains("Matemática"));
        assert!(busy.contains("História"));
        assert!(busy.contains("08:00"));

        let idle = render_agenda(&board, NaiveDate::from_ymd_opt(2025, 8, 9).unwrap());
        assert!(idle.contains("No activities"));
    }

    #[test]
    fn shift_month_wraps_across_year_boundaries() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(shift_month(jan, -1), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        let dec = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        assert_eq!(shift_month(dec, 1), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(shift_month(dec, -11), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }
}
