use crate::models::{Habit, Stats};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;

pub fn build_stats(habits: &[Habit]) -> Stats {
    build_stats_at(Local::now().date_naive(), habits)
}

pub fn build_stats_at(today: NaiveDate, habits: &[Habit]) -> Stats {
    Stats {
        total_progress: total_progress(habits),
        completed_today: completed_today_at(today, habits) as u32,
        best_habit: best_habit(habits).cloned(),
        total_habits: habits.len() as u32,
        streak: streak(habits),
    }
}

/// Mean progress across all habits, rounded to the nearest integer.
pub fn total_progress(habits: &[Habit]) -> u32 {
    if habits.is_empty() {
        return 0;
    }
    let total: u32 = habits.iter().map(|habit| u32::from(habit.progress)).sum();
    (f64::from(total) / habits.len() as f64).round() as u32
}

/// Habits whose last completion is exactly today's date string.
pub fn completed_today_at(today: NaiveDate, habits: &[Habit]) -> usize {
    let key = today.to_string();
    habits
        .iter()
        .filter(|habit| habit.last_completed.as_deref() == Some(key.as_str()))
        .count()
}

/// First habit holding the maximum progress; later ties never displace it.
pub fn best_habit(habits: &[Habit]) -> Option<&Habit> {
    habits.iter().reduce(|best, current| {
        if current.progress > best.progress {
            current
        } else {
            best
        }
    })
}

/// Consecutive-day run over completion dates shared by the whole list. A date
/// only survives the filter when it is every habit's current `lastCompleted`,
/// so lists whose habits carry different dates always score 0.
pub fn streak(habits: &[Habit]) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let mut dates = BTreeSet::new();
    for habit in habits {
        if let Some(date) = &habit.last_completed {
            dates.insert(date.clone());
        }
    }

    let mut common: Vec<NaiveDate> = dates
        .iter()
        .filter(|date| {
            habits
                .iter()
                .all(|habit| habit.last_completed.as_deref() == Some(date.as_str()))
        })
        .filter_map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .collect();
    common.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    let mut expected = None;
    for date in common {
        if let Some(want) = expected {
            if date != want {
                break;
            }
        }
        streak += 1;
        expected = Some(date - Duration::days(1));
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: u64, progress: u8, last_completed: Option<&str>) -> Habit {
        Habit {
            id,
            name: format!("habit-{id}"),
            description: None,
            category: None,
            progress,
            last_completed: last_completed.map(str::to_string),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_progress_is_rounded_mean() {
        let habits = vec![habit(1, 0, None), habit(2, 50, None)];
        assert_eq!(total_progress(&habits), 25);

        let habits = vec![habit(1, 50, None), habit(2, 25, None)];
        assert_eq!(total_progress(&habits), 38);

        let habits = vec![habit(1, 33, None), habit(2, 33, None), habit(3, 34, None)];
        assert_eq!(total_progress(&habits), 33);
    }

    #[test]
    fn total_progress_is_zero_for_empty_list() {
        assert_eq!(total_progress(&[]), 0);
    }

    #[test]
    fn completed_today_counts_exact_date_matches() {
        let today = day(2026, 8, 6);
        let habits = vec![
            habit(1, 10, Some("2026-08-06")),
            habit(2, 20, Some("2026-08-05")),
            habit(3, 30, None),
        ];
        assert_eq!(completed_today_at(today, &habits), 1);
    }

    #[test]
    fn best_habit_keeps_first_maximum_on_ties() {
        let habits = vec![habit(1, 40, None), habit(2, 70, None), habit(3, 70, None)];
        assert_eq!(best_habit(&habits).map(|habit| habit.id), Some(2));
    }

    #[test]
    fn best_habit_is_none_for_empty_list() {
        assert!(best_habit(&[]).is_none());
    }

    #[test]
    fn streak_counts_shared_completion_date() {
        let habits = vec![
            habit(1, 10, Some("2026-08-05")),
            habit(2, 20, Some("2026-08-05")),
        ];
        assert_eq!(streak(&habits), 1);
    }

    #[test]
    fn streak_is_zero_for_divergent_completion_dates() {
        // Each habit was completed on a recent day, but no single date is
        // shared by both, so no date survives the filter.
        let habits = vec![
            habit(1, 10, Some("2026-08-05")),
            habit(2, 20, Some("2026-08-04")),
        ];
        assert_eq!(streak(&habits), 0);
    }

    #[test]
    fn streak_is_zero_when_any_habit_never_completed() {
        let habits = vec![habit(1, 10, Some("2026-08-05")), habit(2, 20, None)];
        assert_eq!(streak(&habits), 0);
    }

    #[test]
    fn streak_is_zero_for_empty_list() {
        assert_eq!(streak(&[]), 0);
    }

    #[test]
    fn build_stats_at_assembles_all_fields() {
        let today = day(2026, 8, 6);
        let habits = vec![
            habit(1, 0, Some("2026-08-06")),
            habit(2, 50, Some("2026-08-06")),
        ];
        let stats = build_stats_at(today, &habits);
        assert_eq!(stats.total_progress, 25);
        assert_eq!(stats.completed_today, 2);
        assert_eq!(stats.best_habit.map(|habit| habit.id), Some(2));
        assert_eq!(stats.total_habits, 2);
        assert_eq!(stats.streak, 1);
    }
}
