//! Built-in default dataset. Used on first run, and as the fallback whenever
//! a persisted record turns out to be corrupted.

use crate::models::{Category, Chore, Frequency, HouseholdMember, MEMBER_COLORS, User};
use chrono::{DateTime, Local};

/// The single hardcoded login. Not a security system; it only gates the UI.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn admin_user(now: DateTime<Local>) -> User {
    User {
        id: "user-admin".into(),
        username: ADMIN_USERNAME.into(),
        email: "admin@household.local".into(),
        role: "admin".into(),
        is_active: true,
        created_at: now,
        last_login: None,
    }
}

pub fn default_members() -> Vec<HouseholdMember> {
    ["Alex", "Jordan", "Sam"]
        .iter()
        .enumerate()
        .map(|(index, name)| HouseholdMember {
            id: format!("member-{}", index + 1),
            name: (*name).into(),
            color: MEMBER_COLORS[index % MEMBER_COLORS.len()].into(),
            is_active: true,
        })
        .collect()
}

pub fn default_chores(now: DateTime<Local>) -> Vec<Chore> {
    let seed = |id: &str,
                name: &str,
                description: &str,
                category: Category,
                frequency: Frequency,
                completions_per_day: Option<u32>,
                estimated_time: u32,
                assignee: Option<&str>| Chore {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category,
        frequency,
        completions_per_day,
        estimated_time,
        assignee: assignee.map(Into::into),
        is_active: true,
        created_at: now,
        last_completed: None,
        next_due_date: now,
        completed_today: 0,
    };

    vec![
        seed(
            "chore-feed-pets",
            "Feed the pets",
            "Morning and evening meals, fresh water",
            Category::PetCare,
            Frequency::MultipleDaily,
            Some(2),
            10,
            Some("member-1"),
        ),
        seed(
            "chore-dishes",
            "Wash the dishes",
            "Everything left in the sink after dinner",
            Category::Kitchen,
            Frequency::Daily,
            None,
            20,
            Some("member-2"),
        ),
        seed(
            "chore-bathroom",
            "Clean the bathroom",
            "Sink, toilet, shower, and floor",
            Category::Bathroom,
            Frequency::Weekly,
            None,
            45,
            Some("member-3"),
        ),
        seed(
            "chore-sheets",
            "Change bed sheets",
            "All bedrooms",
            Category::Bedroom,
            Frequency::BiWeekly,
            None,
            20,
            None,
        ),
        seed(
            "chore-vacuum",
            "Vacuum the living room",
            "Include under the couch cushions",
            Category::LivingRoom,
            Frequency::Weekly,
            None,
            30,
            Some("member-1"),
        ),
        seed(
            "chore-laundry",
            "Do the laundry",
            "Wash, dry, fold, and put away",
            Category::Laundry,
            Frequency::Weekly,
            None,
            60,
            Some("member-2"),
        ),
        seed(
            "chore-lawn",
            "Mow the lawn",
            "Front and back yard",
            Category::Outdoor,
            Frequency::Monthly,
            None,
            90,
            None,
        ),
        seed(
            "chore-dusting",
            "Dust shelves and surfaces",
            "Living areas and bedrooms",
            Category::GeneralCleaning,
            Frequency::Monthly,
            None,
            25,
            Some("member-3"),
        ),
        seed(
            "chore-hvac",
            "Replace the HVAC filter",
            "Size 20x25x1, spares in the garage",
            Category::Maintenance,
            Frequency::Quarterly,
            None,
            15,
            None,
        ),
        seed(
            "chore-garage",
            "Organize the garage",
            "Whenever it gets out of hand",
            Category::Maintenance,
            Frequency::AsNeeded,
            None,
            120,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_assignees_reference_seed_members() {
        let now = Local::now();
        let members = default_members();
        for chore in default_chores(now) {
            if let Some(assignee) = &chore.assignee {
                assert!(members.iter().any(|m| &m.id == assignee), "{}", chore.name);
            }
        }
    }

    #[test]
    fn seed_multiple_daily_chores_carry_a_count() {
        let now = Local::now();
        for chore in default_chores(now) {
            if chore.frequency == Frequency::MultipleDaily {
                assert!(chore.completions_per_day.is_some_and(|n| n >= 2));
            } else {
                assert!(chore.completions_per_day.is_none());
            }
        }
    }
}
