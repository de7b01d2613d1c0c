use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed rotation of display colors handed to new members in order.
pub const MEMBER_COLORS: [&str; 7] = [
    "#87A96B", "#6B9DC2", "#E07A5F", "#FFB74D", "#81C784", "#E57373", "#FFB74D",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pet Care")]
    PetCare,
    Kitchen,
    Bathroom,
    Bedroom,
    #[serde(rename = "Living Room")]
    LivingRoom,
    Laundry,
    Outdoor,
    #[serde(rename = "General Cleaning")]
    GeneralCleaning,
    Maintenance,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::PetCare => "Pet Care",
            Category::Kitchen => "Kitchen",
            Category::Bathroom => "Bathroom",
            Category::Bedroom => "Bedroom",
            Category::LivingRoom => "Living Room",
            Category::Laundry => "Laundry",
            Category::Outdoor => "Outdoor",
            Category::GeneralCleaning => "General Cleaning",
            Category::Maintenance => "Maintenance",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::PetCare => "🐾",
            Category::Kitchen => "🍳",
            Category::Bathroom => "🛁",
            Category::Bedroom => "🛏️",
            Category::LivingRoom => "🛋️",
            Category::Laundry => "🧺",
            Category::Outdoor => "🌳",
            Category::GeneralCleaning => "🧹",
            Category::Maintenance => "🔧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    #[serde(rename = "Multiple Daily")]
    MultipleDaily,
    Weekly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    Monthly,
    Quarterly,
    #[serde(rename = "As Needed")]
    AsNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub frequency: Frequency,
    /// Only meaningful for `Frequency::MultipleDaily`; at least 2 when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completions_per_day: Option<u32>,
    /// Estimated minutes.
    pub estimated_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<DateTime<Local>>,
    pub next_due_date: DateTime<Local>,
    /// Same-day completion counter for Multiple Daily chores. Only touched by
    /// completion events, never by a background clock.
    #[serde(default)]
    pub completed_today: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreCompletion {
    pub id: String,
    pub chore_id: String,
    pub completed_by: String,
    pub completed_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMember {
    pub id: String,
    pub name: String,
    pub color: String,
    pub is_active: bool,
}

/// The authenticated session subject. There is exactly one real user (the
/// hardcoded admin); this exists so the session survives restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Local>>,
}

impl User {
    /// A stored session is honored only when the identifying fields are
    /// present and non-empty.
    pub fn is_valid_session(&self) -> bool {
        !self.id.is_empty() && !self.username.is_empty() && !self.role.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoreStatus {
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "due-soon")]
    DueSoon,
    #[serde(rename = "on-time")]
    OnTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionProgress {
    pub completed: u32,
    pub total: u32,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPerformance {
    pub completed: usize,
    pub total: usize,
}

/// Derived snapshot, recomputed from scratch on request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_chores: usize,
    pub completed_today: usize,
    pub completed_this_week: usize,
    pub overdue_chores: usize,
    pub due_soon_chores: usize,
    pub category_breakdown: BTreeMap<String, usize>,
    pub member_performance: BTreeMap<String, MemberPerformance>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreRequest {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub frequency: Frequency,
    #[serde(default)]
    pub completions_per_day: Option<u32>,
    pub estimated_time: u32,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteChoreRequest {
    pub completed_by: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub time_spent: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub name: String,
}

/// A chore decorated with its computed schedule state for the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreView {
    #[serde(flatten)]
    pub chore: Chore,
    pub status: ChoreStatus,
    pub progress: CompletionProgress,
    pub category_icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}
