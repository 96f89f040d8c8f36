//! Wire DTOs for the Flow Innovation REST API.
//!
//! DESIGN
//! ======
//! Field names follow the upstream JSON exactly (`claimReview`,
//! `urlToImage`, snake_case progress fields) so `serde_json::from_value`
//! can deserialize extracted envelope fields without manual mapping.
//! Optional fields default instead of failing, because the upstream
//! fact-check and news providers omit them freely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// FACT CHECK
// =============================================================================

/// A claim returned by `GET /check_claim`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// The claim text as recorded by the fact-check provider.
    pub text: String,
    /// Who made the claim, when known.
    #[serde(default)]
    pub claimant: Option<String>,
    /// Reviews of this claim, most relevant first.
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

/// A single publisher review of a claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    /// Verdict label such as `"False"` or `"Mostly true"`.
    #[serde(default)]
    pub textual_rating: Option<String>,
    /// Link to the full review article.
    #[serde(default)]
    pub url: Option<String>,
    /// Review headline.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Publisher,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

// =============================================================================
// NEWS
// =============================================================================

/// An article returned by `GET /innovation_news`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

/// Body for `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Acknowledgement returned by write endpoints (`register`, `progress`, `goal`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// PROGRESS
// =============================================================================

/// One recorded achievement from `GET /progress` or `GET /progress/community`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub achievement: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A goal from `GET /goals`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: Option<i64>,
    pub goal: String,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /goal`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGoal {
    pub goal: String,
    pub target_date: String,
}

/// Extracted `GET /goals` envelope: the user's goals plus optional recommendations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalBoard {
    pub goals: Vec<Goal>,
    pub recommended: Vec<String>,
}

/// Summary from `GET /wolfram/progress_insights`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub next_milestone: Option<String>,
    /// Numeric or textual score; the upstream emits either.
    #[serde(default)]
    pub innovation_score: Option<Value>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Insights {
    /// Display label for the innovation score, `"N/A"` when absent.
    pub fn score_label(&self) -> String {
        match &self.innovation_score {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => "N/A".to_owned(),
        }
    }

    /// Display label for the next milestone, `"N/A"` when absent.
    pub fn milestone_label(&self) -> String {
        self.next_milestone
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("N/A")
            .to_owned()
    }
}

// =============================================================================
// VIEW MODELS
// =============================================================================

/// Render-ready summary of a claim's primary review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimVerdict {
    pub text: String,
    pub claimant: Option<String>,
    pub rating: String,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
}

impl From<&Claim> for ClaimVerdict {
    fn from(claim: &Claim) -> Self {
        let review = claim.claim_review.first();
        Self {
            text: claim.text.clone(),
            claimant: claim.claimant.clone(),
            rating: review
                .and_then(|r| r.textual_rating.clone())
                .unwrap_or_else(|| "Unrated".to_owned()),
            source_name: review.and_then(|r| r.publisher.name.clone().or_else(|| r.publisher.site.clone())),
            source_url: review.and_then(|r| r.url.clone()),
        }
    }
}

/// Pull a display string out of a recommended-goal entry, which the upstream
/// sends either as a bare string or as a goal-shaped object.
pub fn recommended_goal_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("goal")
            .or_else(|| map.get("text"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}
