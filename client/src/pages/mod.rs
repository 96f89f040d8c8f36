//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod coming_soon;
pub mod fact_check;
pub mod home;
pub mod innovation_news;
pub mod login;
pub mod progress_tracking;
pub mod register;
