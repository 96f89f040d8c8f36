//! Descriptors for every remote resource the pages use.
//!
//! ENVELOPES
//! =========
//! List endpoints answer `{ <field>: [...] }` at the top level of the body
//! (e.g. `{ "claims": [...] }`). A missing field or a non-array field is a
//! schema error; an empty array is a valid, empty result.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::types::{
    Acknowledgement, Article, Claim, Credentials, GoalBoard, Insights, ProgressEntry, TokenResponse,
    recommended_goal_text,
};
use crate::resource::{Method, Payload, ResourceDescriptor};
use crate::util::validate::{self, GoalForm};

pub static CLAIMS: ResourceDescriptor<String, Vec<Claim>> = ResourceDescriptor {
    name: "claims",
    endpoint: "/check_claim",
    method: Method::Get,
    authorized: false,
    validate: |query| {
        let query = validate::validate_claim_query(query)?;
        Ok(Payload::Query(vec![("query", query)]))
    },
    extract: |body| list_field(body, "claims"),
};

pub static ARTICLES: ResourceDescriptor<(), Vec<Article>> = ResourceDescriptor {
    name: "articles",
    endpoint: "/innovation_news",
    method: Method::Get,
    authorized: false,
    validate: no_input,
    extract: |body| list_field(body, "articles"),
};

pub static LOGIN: ResourceDescriptor<Credentials, TokenResponse> = ResourceDescriptor {
    name: "login",
    endpoint: "/login",
    method: Method::Post,
    authorized: false,
    validate: credentials_payload,
    extract: |body| {
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| "Login response did not include an access token.".to_owned())?;
        Ok(TokenResponse { access_token: token.to_owned() })
    },
};

pub static REGISTER: ResourceDescriptor<Credentials, Acknowledgement> = ResourceDescriptor {
    name: "register",
    endpoint: "/register",
    method: Method::Post,
    authorized: false,
    validate: credentials_payload,
    extract: acknowledgement,
};

pub static PROGRESS: ResourceDescriptor<(), Vec<ProgressEntry>> = ResourceDescriptor {
    name: "progress",
    endpoint: "/progress",
    method: Method::Get,
    authorized: true,
    validate: no_input,
    extract: |body| list_field(body, "progress"),
};

pub static ADD_PROGRESS: ResourceDescriptor<String, Acknowledgement> = ResourceDescriptor {
    name: "add_progress",
    endpoint: "/progress",
    method: Method::Post,
    authorized: true,
    validate: |achievement| {
        let achievement = validate::validate_achievement(achievement)?;
        Ok(Payload::Json(serde_json::json!({ "achievement": achievement })))
    },
    extract: |body| {
        if body.get("progress").is_some() {
            list_field::<ProgressEntry>(body, "progress")?;
        }
        acknowledgement(body)
    },
};

pub static COMMUNITY_PROGRESS: ResourceDescriptor<(), Vec<ProgressEntry>> = ResourceDescriptor {
    name: "community_progress",
    endpoint: "/progress/community",
    method: Method::Get,
    authorized: true,
    validate: no_input,
    extract: |body| list_field(body, "progress"),
};

pub static GOALS: ResourceDescriptor<(), GoalBoard> = ResourceDescriptor {
    name: "goals",
    endpoint: "/goals",
    method: Method::Get,
    authorized: true,
    validate: no_input,
    extract: |body| {
        let goals = list_field(body, "goals")?;
        let recommended = match body.get("recommended_goals") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries.iter().filter_map(recommended_goal_text).collect(),
            Some(_) => return Err("Expected `recommended_goals` to be a list.".to_owned()),
        };
        Ok(GoalBoard { goals, recommended })
    },
};

pub static ADD_GOAL: ResourceDescriptor<GoalForm, Acknowledgement> = ResourceDescriptor {
    name: "add_goal",
    endpoint: "/goal",
    method: Method::Post,
    authorized: true,
    validate: |form| {
        let goal = validate::validate_goal(form)?;
        serde_json::to_value(goal).map(Payload::Json).map_err(|e| e.to_string())
    },
    extract: acknowledgement,
};

pub static INSIGHTS: ResourceDescriptor<(), Insights> = ResourceDescriptor {
    name: "insights",
    endpoint: "/wolfram/progress_insights",
    method: Method::Get,
    authorized: true,
    validate: no_input,
    extract: |body| {
        list_field::<String>(body, "suggestions")?;
        serde_json::from_value(body.clone()).map_err(|e| format!("Malformed insights: {e}"))
    },
};

// =============================================================================
// SHARED VALIDATE / EXTRACT STEPS
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn no_input(_: &()) -> Result<Payload, String> {
    Ok(Payload::None)
}

fn credentials_payload(credentials: &Credentials) -> Result<Payload, String> {
    let credentials = validate::validate_credentials(&credentials.username, &credentials.password)?;
    serde_json::to_value(credentials).map(Payload::Json).map_err(|e| e.to_string())
}

/// Deserialize the array stored under `field`.
///
/// # Errors
///
/// Describes a missing field, a non-array field, or a malformed entry.
pub fn list_field<T: DeserializeOwned>(body: &Value, field: &str) -> Result<Vec<T>, String> {
    let raw = body
        .get(field)
        .ok_or_else(|| format!("Unexpected response: missing `{field}` list."))?;
    if !raw.is_array() {
        return Err(format!("Unexpected response: `{field}` is not a list."));
    }
    serde_json::from_value(raw.clone()).map_err(|e| format!("Unexpected response: malformed `{field}` entry ({e})."))
}

fn acknowledgement(body: &Value) -> Result<Acknowledgement, String> {
    let message = match body.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err("Unexpected response: `message` is not text.".to_owned()),
    };
    Ok(Acknowledgement { message })
}
