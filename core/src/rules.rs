//! Profile state transitions.
//!
//! RULE: Every function here is pure. It takes the current record by
//! reference and returns a new one; persistence is the store's job.
//! Range checks on `day` and `score` are the caller's responsibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::{MockTestConfig, RoadmapConfig},
    profile::Profile,
    types::{Credits, Day, Percent},
};

/// Result of a checkpoint attempt.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayOutcome {
    pub passed:  bool,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MockEligibility {
    pub can_take: bool,
    pub reason:   String,
}

/// Record a checkpoint attempt on `day`.
///
/// A pass credits the day reward only the first time the day is
/// completed, but advances the streak on every pass, re-passes included.
pub fn complete_day(
    profile: &Profile,
    day:     Day,
    score:   Percent,
    now:     DateTime<Utc>,
    roadmap: &RoadmapConfig,
) -> DayOutcome {
    let mut next = profile.clone();
    let passed = score >= roadmap.pass_threshold;

    let best = next.day_scores.entry(day).or_insert(0);
    *best = (*best).max(score);

    if passed {
        if next.completed_days.insert(day) {
            next.hero_credits += roadmap.day_reward;
        }
        next.current_day = next.current_day.max(day.saturating_add(1));
        next.streak_count += 1;
        next.cooldown_until = None;
        next.last_failed_day = None;
    } else {
        next.cooldown_until = Some(now + roadmap.cooldown());
        next.last_failed_day = Some(day);
    }

    next.last_active_date = now.date_naive();
    DayOutcome { passed, profile: next }
}

/// Whether a mock test may be started, with a message for the player.
pub fn mock_eligibility(profile: &Profile, mock: &MockTestConfig) -> MockEligibility {
    if profile.free_mocks_remaining > 0 {
        return MockEligibility {
            can_take: true,
            reason:   format!("{} free mock(s) remaining", profile.free_mocks_remaining),
        };
    }
    if profile.hero_credits >= mock.cost {
        return MockEligibility {
            can_take: true,
            reason:   format!("Costs {} HC", mock.cost),
        };
    }
    MockEligibility {
        can_take: false,
        reason:   format!("Need {} HC (you have {})", mock.cost, profile.hero_credits),
    }
}

/// Spend one unit of mock-test eligibility: a free attempt if any are
/// left, otherwise `mock.cost` credits.
///
/// Precondition: `mock_eligibility(profile).can_take`. This is not
/// checked; calling it on an ineligible profile drives credits negative.
pub fn start_mock_test(profile: &Profile, mock: &MockTestConfig) -> Profile {
    let mut next = profile.clone();
    if next.free_mocks_remaining > 0 {
        next.free_mocks_remaining -= 1;
    } else {
        next.hero_credits -= mock.cost;
    }
    next
}

pub fn complete_mock_test(profile: &Profile, score: Percent) -> Profile {
    let mut next = profile.clone();
    next.mock_tests_taken += 1;
    next.mock_test_scores.push(score);
    next
}

pub fn record_battle(profile: &Profile, won: bool, credits_earned: Credits) -> Profile {
    let mut next = profile.clone();
    next.hero_credits += credits_earned;
    if won {
        next.battles_won += 1;
    }
    next.battles_played += 1;
    next
}

/// `None` when the achievement was already unlocked.
pub fn unlock_achievement(profile: &Profile, id: &str) -> Option<Profile> {
    if profile.unlocked_achievements.contains(id) {
        return None;
    }
    let mut next = profile.clone();
    next.unlocked_achievements.insert(id.to_string());
    Some(next)
}

/// Milliseconds until the cooldown expires; 0 when none is set or it
/// has already passed.
pub fn cooldown_remaining_ms(profile: &Profile, now: DateTime<Utc>) -> u64 {
    match profile.cooldown_until {
        Some(until) => (until - now).num_milliseconds().max(0) as u64,
        None => 0,
    }
}
