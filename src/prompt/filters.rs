//! Filter collection: city, filter mode, then month and/or day

use std::io::{BufRead, Write};

use super::{Prompter, PromptError, Result};
use crate::config::{weekday_name, Config};
use crate::dataset::FilterRequest;

pub const SEPARATOR: &str = "----------------------------------------";

/// Which time filters the user wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub const TOKENS: [&'static str; 4] = ["month", "day", "both", "none"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn wants_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    pub fn wants_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

/// "A, B, or C"
fn list_options(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run the three filter prompts
pub fn collect_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
) -> Result<FilterRequest> {
    prompter.say("Hello! Let's explore some US bikeshare data!")?;

    let city_names: Vec<String> = config.cities.iter().map(|c| c.display_name()).collect();
    let city_key = prompter.ask_valid(
        &format!("Would you like to see data for {}?\n", list_options(&city_names)),
        &config.city_tokens(),
    )?;
    let city = config
        .city(&city_key)
        .cloned()
        .ok_or_else(|| PromptError::Unmapped(city_key.clone()))?;

    let mode_tokens: Vec<String> = FilterMode::TOKENS.iter().map(|t| t.to_string()).collect();
    let mode_token = prompter.ask_valid(
        "Would you like to filter the data by month, day, both or not at all?\n",
        &mode_tokens,
    )?;
    let mode =
        FilterMode::from_token(&mode_token).ok_or(PromptError::Unmapped(mode_token))?;

    let mut request = FilterRequest::unfiltered(city);

    if mode.wants_month() {
        let names: Vec<String> = config.months.iter().map(|m| capitalize(m)).collect();
        let token = prompter.ask_valid(
            &format!("Which month - {}?\n", list_options(&names)),
            &config.month_tokens(),
        )?;
        let month = config
            .month_for(&token)
            .ok_or(PromptError::Unmapped(token))?;
        request = request.with_month(month);
    }

    if mode.wants_day() {
        let names: Vec<String> = config.days.iter().map(|d| capitalize(d)).collect();
        let first = config.weekday_for("1").map_or("", weekday_name);
        let token = prompter.ask_valid(
            &format!(
                "Which day - {}? Please enter an integer (i.e., 1 = {})\n",
                list_options(&names),
                first
            ),
            &config.day_tokens(),
        )?;
        let day = config
            .weekday_for(&token)
            .ok_or(PromptError::Unmapped(token))?;
        request = request.with_day(day);
    }

    prompter.say(SEPARATOR)?;
    tracing::debug!(filter = %request.describe(), "collected filters");

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::io::Cursor;

    fn run(input: &str) -> (Result<FilterRequest>, String) {
        let config = Config::default();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = collect_filters(&mut prompter, &config);
        let (_, out) = prompter.into_inner();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_filters() {
        let (result, out) = run("chicago\nnone\n");
        let request = result.unwrap();
        assert_eq!(request.city.key, "chicago");
        assert_eq!(request.month, None);
        assert_eq!(request.day, None);
        assert!(out.contains("Would you like to see data for Chicago, New York, or Washington?"));
        assert!(out.contains(SEPARATOR));
    }

    #[test]
    fn test_month_only() {
        let (result, _) = run("New York\nmonth\nMarch\n");
        let request = result.unwrap();
        assert_eq!(request.city.key, "new york");
        assert_eq!(request.month, Some(Month::March));
        assert_eq!(request.day, None);
    }

    #[test]
    fn test_day_only_digit_one_is_sunday() {
        let (result, out) = run("washington\nday\n1\n");
        let request = result.unwrap();
        assert_eq!(request.month, None);
        assert_eq!(request.day, Some(Weekday::Sun));
        assert!(out.contains("1 = Sunday"));
    }

    #[test]
    fn test_both_filters() {
        let (result, _) = run("chicago\nboth\njanuary\n3\n");
        let request = result.unwrap();
        assert_eq!(request.month, Some(Month::January));
        assert_eq!(request.day, Some(Weekday::Tue));
    }

    #[test]
    fn test_day_by_name() {
        let (result, _) = run("chicago\nday\nFriday\n");
        assert_eq!(result.unwrap().day, Some(Weekday::Fri));
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (result, out) = run("boston\nchicago\nweekly\nmonth\njuly\njune\n");
        let request = result.unwrap();
        assert_eq!(request.month, Some(Month::June));
        assert_eq!(out.matches("Sorry, that input was invalid").count(), 3);
    }

    #[test]
    fn test_input_closed_mid_collection() {
        let (result, _) = run("chicago\n");
        assert!(matches!(result, Err(PromptError::InputClosed)));
    }

    #[test]
    fn test_list_options() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(list_options(&items), "a, b, or c");
        assert_eq!(list_options(&items[..2]), "a or b");
        assert_eq!(list_options(&items[..1]), "a");
    }
}
