//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their remote resources through `use_remote_resource` and
//! read the session from context. Pages only arrange them.

pub mod community_progress;
pub mod goal_tracker;
pub mod navbar;
pub mod news_card;
pub mod progress_insights;
pub mod results_box;
pub mod search_bar;
pub mod status_notice;
pub mod user_progress;
