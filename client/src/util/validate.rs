//! Input validation run before any request is sent.
//!
//! Every helper trims its input and returns the cleaned value or the exact
//! message shown to the user.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{Credentials, NewGoal};

pub const EMPTY_CLAIM_MESSAGE: &str = "Please enter a claim to check.";
pub const EMPTY_ACHIEVEMENT_MESSAGE: &str = "Please enter an achievement.";
pub const EMPTY_GOAL_MESSAGE: &str = "Please enter a goal.";
pub const INVALID_DATE_MESSAGE: &str = "Please choose a valid target date (YYYY-MM-DD).";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required.";

/// Raw goal form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub goal: String,
    pub target_date: String,
}

fn non_empty(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Err(message) } else { Ok(trimmed.to_owned()) }
}

/// A claim query must contain something other than whitespace.
///
/// # Errors
///
/// Returns `EMPTY_CLAIM_MESSAGE` for blank input.
pub fn validate_claim_query(raw: &str) -> Result<String, &'static str> {
    non_empty(raw, EMPTY_CLAIM_MESSAGE)
}

/// # Errors
///
/// Returns `EMPTY_ACHIEVEMENT_MESSAGE` for blank input.
pub fn validate_achievement(raw: &str) -> Result<String, &'static str> {
    non_empty(raw, EMPTY_ACHIEVEMENT_MESSAGE)
}

/// A goal needs text and a calendar-valid `YYYY-MM-DD` target date.
///
/// # Errors
///
/// Returns `EMPTY_GOAL_MESSAGE` or `INVALID_DATE_MESSAGE`.
pub fn validate_goal(form: &GoalForm) -> Result<NewGoal, &'static str> {
    let goal = non_empty(&form.goal, EMPTY_GOAL_MESSAGE)?;
    let target_date = form.target_date.trim();
    Date::parse(target_date, format_description!("[year]-[month]-[day]")).map_err(|_| INVALID_DATE_MESSAGE)?;
    Ok(NewGoal { goal, target_date: target_date.to_owned() })
}

/// Username is trimmed; the password is sent exactly as typed but may not be blank.
///
/// # Errors
///
/// Returns `MISSING_CREDENTIALS_MESSAGE` when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = non_empty(username, MISSING_CREDENTIALS_MESSAGE)?;
    if password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(Credentials { username, password: password.to_owned() })
}
