use chrono::{Local, NaiveDate};
use std::io::{self, Write};

pub fn parse_due(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    if s == "today" {
        return Ok(today);
    }
    if s == "tomorrow" {
        return Ok(today.succ_opt().ok_or("date overflow")?);
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|_| "expected today|tomorrow|YYYY-MM-DD".to_string())
}

pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N]: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
