use chrono::{Local, NaiveDate};
use owo_colors::{AnsiColors, OwoColorize};

use crate::model::{AppState, Filter, Mode, THEMES, Task, Theme};
use crate::view::{Summary, is_overdue};

pub fn print_task_list(view: &[&Task], filter: Filter, state: &AppState, color: bool) {
    if view.is_empty() {
        print_empty_state(filter, color);
        return;
    }

    let today = Local::now().date_naive();
    for task in view {
        for line in task_lines(task, today, state, color) {
            println!("{line}");
        }
    }
}

fn print_empty_state(filter: Filter, color: bool) {
    let text = match filter {
        Filter::All => "No tasks found.",
        Filter::Pending => "No pending tasks.",
        Filter::Done => "No completed tasks.",
    };
    println!("{text}");

    let hint = "Add a new task to get started.";
    if color {
        println!("{}", hint.dimmed());
    } else {
        println!("{hint}");
    }
}

fn task_lines(task: &Task, today: NaiveDate, state: &AppState, color: bool) -> Vec<String> {
    let status = format_status(task.completed, state, color);
    let id = format_id(task.id, color);
    let text = format_text(&task.text, task.completed, color);
    let mut meta = format!(
        "    {} {}",
        format_label("due:", color),
        format_due(task.due, color)
    );
    if is_overdue(task, today) {
        meta.push_str(&format!(" {}", format_overdue_badge(color)));
    }

    vec![format!("[{status}] {id}  {text}"), meta]
}

pub fn print_summary(summary: &Summary, state: &AppState, color: bool) {
    let accent = accent_color(state);
    if color {
        println!(
            "{} total | {} pending | {} done",
            summary.total.color(accent),
            summary.pending.color(accent),
            summary.completed.color(accent),
        );
    } else {
        println!(
            "{} total | {} pending | {} done",
            summary.total, summary.pending, summary.completed
        );
    }
}

pub fn print_theme_list(state: &AppState, color: bool) {
    println!("Available themes:");
    for theme in THEMES {
        let marker = if *theme == state.theme { "*" } else { " " };
        let name = theme_name(*theme);
        if color {
            let swatch = theme_color(*theme, state.dark_mode);
            println!("{marker} {}", name.color(swatch));
        } else {
            println!("{marker} {name}");
        }
    }
}

pub fn theme_name(theme: Theme) -> String {
    format!("{theme:?}").to_lowercase()
}

fn format_status(completed: bool, state: &AppState, color: bool) -> String {
    if completed {
        if color {
            format!("{}", "done".green())
        } else {
            "done".to_string()
        }
    } else if color {
        format!("{}", "todo".color(accent_color(state)))
    } else {
        "todo".to_string()
    }
}

fn format_id(id: u64, color: bool) -> String {
    let value = format!("#{:>3}", id);
    if color {
        format!("{}", value.dimmed())
    } else {
        value
    }
}

fn format_text(text: &str, completed: bool, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    if completed {
        format!("{}", text.dimmed().strikethrough())
    } else {
        format!("{}", text.bold())
    }
}

fn format_label(label: &str, color: bool) -> String {
    if color {
        format!("{}", label.dimmed())
    } else {
        label.to_string()
    }
}

fn format_due(due: NaiveDate, color: bool) -> String {
    let text = due.format("%d/%m/%Y").to_string();
    if color {
        format!("{}", text.cyan())
    } else {
        text
    }
}

fn format_overdue_badge(color: bool) -> String {
    if color {
        format!("[{}]", "overdue".red().bold())
    } else {
        "[overdue]".to_string()
    }
}

fn accent_color(state: &AppState) -> AnsiColors {
    theme_color(state.theme, state.dark_mode)
}

/// Dark mode maps each accent to its bright variant.
fn theme_color(theme: Theme, mode: Mode) -> AnsiColors {
    match (theme, mode) {
        (Theme::Primary, Mode::Light) => AnsiColors::Blue,
        (Theme::Primary, Mode::Dark) => AnsiColors::BrightBlue,
        (Theme::Success, Mode::Light) => AnsiColors::Green,
        (Theme::Success, Mode::Dark) => AnsiColors::BrightGreen,
        (Theme::Danger, Mode::Light) => AnsiColors::Red,
        (Theme::Danger, Mode::Dark) => AnsiColors::BrightRed,
        (Theme::Warning, Mode::Light) => AnsiColors::Yellow,
        (Theme::Warning, Mode::Dark) => AnsiColors::BrightYellow,
        (Theme::Info, Mode::Light) => AnsiColors::Cyan,
        (Theme::Info, Mode::Dark) => AnsiColors::BrightCyan,
    }
}
