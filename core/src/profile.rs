//! The Profile record: one per installation, persisted whole.
//!
//! Field names serialize in camelCase so the stored JSON matches the
//! layout the presentation layer already reads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::ProviaConfig,
    types::{Credits, Day, Percent},
};

pub const DEFAULT_USER_ID: &str = "local_user";
pub const SPECIALTY: &str = "Pharmacist";

/// Licensing authorities the onboarding flow offers. `territory` is stored
/// as a free string, so unknown values still load.
pub const KNOWN_TERRITORIES: [&str; 4] = ["DHA", "MOH", "HAAD", "SCFHS"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectedMode {
    Challenge,
    MockCenter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // ── Identity ──────────────────────────────────
    pub user_id:      String,
    pub display_name: String,
    pub territory:    Option<String>,
    pub specialty:    String,

    // ── Roadmap ───────────────────────────────────
    /// Highest unlocked day; total_days + 1 once everything is cleared.
    pub current_day:    Day,
    pub completed_days: BTreeSet<Day>,
    /// Best score per day.
    pub day_scores:     BTreeMap<Day, Percent>,

    // ── Economy ───────────────────────────────────
    pub hero_credits:         Credits,
    pub free_mocks_remaining: u32,
    pub mock_tests_taken:     u32,
    pub mock_test_scores:     Vec<Percent>,

    // ── Streak ────────────────────────────────────
    pub streak_count:     u32,
    pub last_active_date: NaiveDate,

    // ── Battle ────────────────────────────────────
    pub battles_won:    u32,
    pub battles_played: u32,

    // ── Cooldown ──────────────────────────────────
    pub cooldown_until:  Option<DateTime<Utc>>,
    pub last_failed_day: Option<Day>,

    pub unlocked_achievements: BTreeSet<String>,

    // ── Meta ──────────────────────────────────────
    pub created_at:    DateTime<Utc>,
    pub selected_mode: Option<SelectedMode>,
}

impl Profile {
    /// A fresh profile as created on first launch.
    pub fn new(now: DateTime<Utc>, config: &ProviaConfig) -> Self {
        Self {
            user_id:      DEFAULT_USER_ID.into(),
            display_name: SPECIALTY.into(),
            territory:    None,
            specialty:    SPECIALTY.into(),

            current_day:    1,
            completed_days: BTreeSet::new(),
            day_scores:     BTreeMap::new(),

            hero_credits:         0,
            free_mocks_remaining: config.mock_test.free_mocks,
            mock_tests_taken:     0,
            mock_test_scores:     Vec::new(),

            streak_count:     0,
            last_active_date: now.date_naive(),

            battles_won:    0,
            battles_played: 0,

            cooldown_until:  None,
            last_failed_day: None,

            unlocked_achievements: BTreeSet::new(),

            created_at:    now,
            selected_mode: None,
        }
    }

    pub fn is_day_completed(&self, day: Day) -> bool {
        self.completed_days.contains(&day)
    }

    pub fn best_score(&self, day: Day) -> Option<Percent> {
        self.day_scores.get(&day).copied()
    }

    /// A day is playable once the roadmap has reached it.
    pub fn is_day_unlocked(&self, day: Day) -> bool {
        day >= 1 && day <= self.current_day
    }

    pub fn is_roadmap_complete(&self, total_days: Day) -> bool {
        self.current_day > total_days
    }

    /// Onboarding is finished once a territory and a mode are chosen.
    pub fn needs_onboarding(&self) -> bool {
        self.territory.is_none() || self.selected_mode.is_none()
    }

    /// Apply a partial update, returning the new record.
    pub fn with_update(&self, update: ProfileUpdate) -> Profile {
        let mut next = self.clone();
        update.apply_to(&mut next);
        next
    }
}

/// Shallow field replacement for `ProfileStore::update`.
///
/// `None` leaves a field untouched. Nullable fields use a nested option:
/// `Some(None)` clears the field, which in JSON is an explicit `null`
/// as opposed to the key being absent. Collections are replaced whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id:      Option<String>,
    pub display_name: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub territory:    Option<Option<String>>,

    pub current_day:    Option<Day>,
    pub completed_days: Option<BTreeSet<Day>>,
    pub day_scores:     Option<BTreeMap<Day, Percent>>,

    pub hero_credits:         Option<Credits>,
    pub free_mocks_remaining: Option<u32>,
    pub mock_tests_taken:     Option<u32>,
    pub mock_test_scores:     Option<Vec<Percent>>,

    pub streak_count:     Option<u32>,
    pub last_active_date: Option<NaiveDate>,

    pub battles_won:    Option<u32>,
    pub battles_played: Option<u32>,

    #[serde(deserialize_with = "deserialize_some")]
    pub cooldown_until:  Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "deserialize_some")]
    pub last_failed_day: Option<Option<Day>>,

    pub unlocked_achievements: Option<BTreeSet<String>>,

    #[serde(deserialize_with = "deserialize_some")]
    pub selected_mode: Option<Option<SelectedMode>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Names of the supplied fields, for logging.
    pub fn fields(&self) -> Vec<&'static str> {
        let supplied = [
            (self.user_id.is_some(), "userId"),
            (self.display_name.is_some(), "displayName"),
            (self.territory.is_some(), "territory"),
            (self.current_day.is_some(), "currentDay"),
            (self.completed_days.is_some(), "completedDays"),
            (self.day_scores.is_some(), "dayScores"),
            (self.hero_credits.is_some(), "heroCredits"),
            (self.free_mocks_remaining.is_some(), "freeMocksRemaining"),
            (self.mock_tests_taken.is_some(), "mockTestsTaken"),
            (self.mock_test_scores.is_some(), "mockTestScores"),
            (self.streak_count.is_some(), "streakCount"),
            (self.last_active_date.is_some(), "lastActiveDate"),
            (self.battles_won.is_some(), "battlesWon"),
            (self.battles_played.is_some(), "battlesPlayed"),
            (self.cooldown_until.is_some(), "cooldownUntil"),
            (self.last_failed_day.is_some(), "lastFailedDay"),
            (self.unlocked_achievements.is_some(), "unlockedAchievements"),
            (self.selected_mode.is_some(), "selectedMode"),
        ];
        supplied
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }

    fn apply_to(self, p: &mut Profile) {
        if let Some(v) = self.user_id { p.user_id = v; }
        if let Some(v) = self.display_name { p.display_name = v; }
        if let Some(v) = self.territory { p.territory = v; }
        if let Some(v) = self.current_day { p.current_day = v; }
        if let Some(v) = self.completed_days { p.completed_days = v; }
        if let Some(v) = self.day_scores { p.day_scores = v; }
        if let Some(v) = self.hero_credits { p.hero_credits = v; }
        if let Some(v) = self.free_mocks_remaining { p.free_mocks_remaining = v; }
        if let Some(v) = self.mock_tests_taken { p.mock_tests_taken = v; }
        if let Some(v) = self.mock_test_scores { p.mock_test_scores = v; }
        if let Some(v) = self.streak_count { p.streak_count = v; }
        if let Some(v) = self.last_active_date { p.last_active_date = v; }
        if let Some(v) = self.battles_won { p.battles_won = v; }
        if let Some(v) = self.battles_played { p.battles_played = v; }
        if let Some(v) = self.cooldown_until { p.cooldown_until = v; }
        if let Some(v) = self.last_failed_day { p.last_failed_day = v; }
        if let Some(v) = self.unlocked_achievements { p.unlocked_achievements = v; }
        if let Some(v) = self.selected_mode { p.selected_mode = v; }
    }
}

/// Maps a present JSON value (including `null`) to `Some(..)`, so an
/// absent key stays `None` via `#[serde(default)]`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
