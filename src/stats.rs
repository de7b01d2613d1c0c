//! Derived statistics over the chore, completion, and member collections.
//!
//! Pure aggregation: recomputed in full on every request, holds no state of
//! its own. The overdue and due-soon tallies use the raw predicates
//! independently rather than the exclusive status classification, so a single
//! chore can contribute to both.

use crate::models::{Chore, ChoreCompletion, HouseholdMember, MemberPerformance, Statistics};
use crate::recurrence::{is_due_soon, is_overdue};
use chrono::{DateTime, Duration, Local};
use std::collections::BTreeMap;

pub fn generate_statistics(
    chores: &[Chore],
    completions: &[ChoreCompletion],
    members: &[HouseholdMember],
) -> Statistics {
    generate_statistics_at(Local::now(), chores, completions, members)
}

pub fn generate_statistics_at(
    now: DateTime<Local>,
    chores: &[Chore],
    completions: &[ChoreCompletion],
    members: &[HouseholdMember],
) -> Statistics {
    let today = now.date_naive();
    let week_ago = today - Duration::days(7);

    let completed_today = completions
        .iter()
        .filter(|c| c.completed_at.date_naive() >= today)
        .count();

    let completed_this_week = completions
        .iter()
        .filter(|c| c.completed_at.date_naive() >= week_ago)
        .count();

    let overdue_chores = chores.iter().filter(|c| is_overdue(c, now)).count();
    let due_soon_chores = chores.iter().filter(|c| is_due_soon(c, now)).count();

    let mut category_breakdown = BTreeMap::new();
    for chore in chores {
        *category_breakdown
            .entry(chore.category.label().to_string())
            .or_insert(0) += 1;
    }

    let mut member_performance = BTreeMap::new();
    for member in members {
        let completed = completions
            .iter()
            .filter(|c| c.completed_by == member.id)
            .count();
        let total = chores
            .iter()
            .filter(|c| c.assignee.as_deref() == Some(member.id.as_str()))
            .count();
        member_performance.insert(member.name.clone(), MemberPerformance { completed, total });
    }

    Statistics {
        total_chores: chores.len(),
        completed_today,
        completed_this_week,
        overdue_chores,
        due_soon_chores,
        category_breakdown,
        member_performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Frequency};
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn chore(id: &str, category: Category, assignee: Option<&str>) -> Chore {
        let created = at(2026, 3, 1, 9, 0);
        Chore {
            id: id.into(),
            name: format!("chore {id}"),
            description: String::new(),
            category,
            frequency: Frequency::Daily,
            completions_per_day: None,
            estimated_time: 15,
            assignee: assignee.map(Into::into),
            is_active: true,
            created_at: created,
            last_completed: None,
            next_due_date: at(2026, 3, 10, 9, 0),
            completed_today: 0,
        }
    }

    fn completion(id: &str, chore_id: &str, by: &str, when: DateTime<Local>) -> ChoreCompletion {
        ChoreCompletion {
            id: id.into(),
            chore_id: chore_id.into(),
            completed_by: by.into(),
            completed_at: when,
            rating: None,
            notes: None,
            time_spent: None,
        }
    }

    fn member(id: &str, name: &str) -> HouseholdMember {
        HouseholdMember {
            id: id.into(),
            name: name.into(),
            color: "#87A96B".into(),
            is_active: true,
        }
    }

    #[test]
    fn counts_today_and_week_windows() {
        let now = at(2026, 3, 8, 12, 0);
        let completions = [
            completion("c1", "a", "m1", at(2026, 3, 8, 7, 0)),
            completion("c2", "a", "m1", at(2026, 3, 5, 7, 0)),
            completion("c3", "a", "m1", at(2026, 3, 1, 7, 0)),
            // Exactly on the 7-day boundary counts.
            completion("c4", "a", "m1", at(2026, 3, 1, 23, 59)),
        ];
        let stats = generate_statistics_at(now, &[], &completions, &[]);
        assert_eq!(stats.completed_today, 1);
        assert_eq!(stats.completed_this_week, 4);
    }

    #[test]
    fn overdue_and_due_soon_use_raw_predicates() {
        let now = at(2026, 3, 8, 12, 0);
        let mut past_due = chore("a", Category::Kitchen, None);
        // Past due by two hours: overdue, and still inside the ceil-zero
        // due-soon window, so it lands in both tallies.
        past_due.next_due_date = now - Duration::hours(2);
        let mut far_off = chore("b", Category::Kitchen, None);
        far_off.next_due_date = now + Duration::days(10);

        let stats = generate_statistics_at(now, &[past_due, far_off], &[], &[]);
        assert_eq!(stats.overdue_chores, 1);
        assert_eq!(stats.due_soon_chores, 1);
    }

    #[test]
    fn category_breakdown_only_contains_present_categories() {
        let chores = [
            chore("a", Category::PetCare, None),
            chore("b", Category::PetCare, None),
            chore("c", Category::Laundry, None),
        ];
        let stats = generate_statistics_at(at(2026, 3, 8, 12, 0), &chores, &[], &[]);
        assert_eq!(stats.category_breakdown.len(), 2);
        assert_eq!(stats.category_breakdown["Pet Care"], 2);
        assert_eq!(stats.category_breakdown["Laundry"], 1);
    }

    #[test]
    fn member_performance_counts_completions_and_assignments() {
        let now = at(2026, 3, 8, 12, 0);
        let chores = [
            chore("a", Category::Kitchen, Some("m1")),
            chore("b", Category::Bathroom, Some("m1")),
            chore("c", Category::Outdoor, None),
        ];
        let completions = [
            completion("c1", "a", "m1", now - Duration::days(1)),
            completion("c2", "c", "m1", now - Duration::days(2)),
            completion("c3", "a", "m2", now - Duration::days(1)),
        ];
        let members = [member("m1", "Alex"), member("m2", "Robin")];

        let stats = generate_statistics_at(now, &chores, &completions, &members);
        assert_eq!(
            stats.member_performance["Alex"],
            MemberPerformance { completed: 2, total: 2 }
        );
        assert_eq!(
            stats.member_performance["Robin"],
            MemberPerformance { completed: 1, total: 0 }
        );
    }

    #[test]
    fn removed_member_disappears_from_performance() {
        let now = at(2026, 3, 8, 12, 0);
        let members = [member("m1", "Alex")];
        let stats = generate_statistics_at(now, &[], &[], &members);
        assert!(stats.member_performance.contains_key("Alex"));

        let stats = generate_statistics_at(now, &[], &[], &[]);
        assert!(stats.member_performance.is_empty());
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let now = at(2026, 3, 8, 12, 0);
        let chores = [chore("a", Category::Kitchen, Some("m1"))];
        let completions = [completion("c1", "a", "m1", now - Duration::days(1))];
        let members = [member("m1", "Alex")];

        let first = generate_statistics_at(now, &chores, &completions, &members);
        let second = generate_statistics_at(now, &chores, &completions, &members);
        assert_eq!(first, second);
    }
}
