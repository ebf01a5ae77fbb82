//! The Profile Store: loads, transitions and persists the Profile.
//!
//! Every mutating operation reads the full record, applies a pure rule
//! from `rules`, writes the full record back and returns it. There is
//! exactly one writer, so there is no merge or conflict handling.

use crate::{
    clock::{Clock, SystemClock},
    config::ProviaConfig,
    error::ProviaResult,
    profile::{Profile, ProfileUpdate},
    rules::{self, DayOutcome, MockEligibility},
    store::KvStore,
    types::{Credits, Day, Percent, StoreKey},
};

pub struct ProfileStore<K: KvStore, C: Clock = SystemClock> {
    kv:     K,
    clock:  C,
    config: ProviaConfig,
    key:    StoreKey,
}

impl<K: KvStore> ProfileStore<K, SystemClock> {
    /// A store on the real clock with default config.
    pub fn with_defaults(kv: K) -> Self {
        Self::new(kv, SystemClock, ProviaConfig::default())
    }
}

impl<K: KvStore, C: Clock> ProfileStore<K, C> {
    /// Bind a store to `config.profile_key`.
    pub fn new(kv: K, clock: C, config: ProviaConfig) -> Self {
        let key = config.profile_key.clone();
        Self::with_key(kv, clock, config, key)
    }

    /// Bind a store to an explicit key, so several profiles can share
    /// one adapter.
    pub fn with_key(kv: K, clock: C, config: ProviaConfig, key: impl Into<StoreKey>) -> Self {
        Self {
            kv,
            clock,
            config,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &ProviaConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    // ── Profile ───────────────────────────────────────────────────

    /// The persisted profile, or a fresh default one if nothing readable
    /// is stored. A fresh profile is saved before it is returned.
    pub fn load(&self) -> ProviaResult<Profile> {
        if let Some(raw) = self.kv.get(&self.key)? {
            match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => return Ok(profile),
                Err(e) => {
                    log::warn!("Discarding unreadable profile under '{}': {e}", self.key);
                }
            }
        }
        self.create_default()
    }

    fn create_default(&self) -> ProviaResult<Profile> {
        let profile = Profile::new(self.clock.now(), &self.config);
        self.save(&profile)?;
        log::info!("Created default profile under '{}'", self.key);
        Ok(profile)
    }

    pub fn save(&self, profile: &Profile) -> ProviaResult<()> {
        let json = serde_json::to_string(profile)?;
        self.kv.set(&self.key, &json)?;
        log::debug!("Saved profile under '{}' ({} bytes)", self.key, json.len());
        Ok(())
    }

    /// Overwrite only the supplied fields.
    pub fn update(&self, update: ProfileUpdate) -> ProviaResult<Profile> {
        let current = self.load()?;
        log::debug!("Updating profile fields: {:?}", update.fields());
        let next = current.with_update(update);
        self.save(&next)?;
        Ok(next)
    }

    /// Remove the stored record. The next `load` recreates defaults.
    pub fn reset(&self) -> ProviaResult<()> {
        self.kv.remove(&self.key)?;
        log::info!("Profile under '{}' reset", self.key);
        Ok(())
    }

    // ── Day completion ────────────────────────────────────────────

    pub fn complete_day(&self, day: Day, score: Percent) -> ProviaResult<DayOutcome> {
        let current = self.load()?;
        let outcome = rules::complete_day(
            &current,
            day,
            score,
            self.clock.now(),
            &self.config.roadmap,
        );
        self.save(&outcome.profile)?;

        if outcome.passed {
            log::info!(
                "Day {day} passed with {score}% (credits={}, current_day={}, streak={})",
                outcome.profile.hero_credits,
                outcome.profile.current_day,
                outcome.profile.streak_count,
            );
        } else {
            log::info!(
                "Day {day} failed with {score}%; cooldown for {} min",
                self.config.roadmap.cooldown_minutes,
            );
        }
        Ok(outcome)
    }

    // ── Mock tests ────────────────────────────────────────────────

    pub fn can_take_mock_test(&self, profile: &Profile) -> MockEligibility {
        rules::mock_eligibility(profile, &self.config.mock_test)
    }

    /// Debit one mock-test attempt from `profile` and persist it.
    ///
    /// Callers must gate this on `can_take_mock_test`; it is not
    /// re-checked here and an ineligible profile ends up with negative
    /// credits.
    pub fn start_mock_test(&self, profile: &Profile) -> ProviaResult<Profile> {
        let next = rules::start_mock_test(profile, &self.config.mock_test);
        self.save(&next)?;
        log::info!(
            "Mock test started (free_left={}, credits={})",
            next.free_mocks_remaining,
            next.hero_credits,
        );
        Ok(next)
    }

    pub fn complete_mock_test(&self, score: Percent) -> ProviaResult<Profile> {
        let current = self.load()?;
        let next = rules::complete_mock_test(&current, score);
        self.save(&next)?;
        log::info!("Mock test #{} recorded at {score}%", next.mock_tests_taken);
        Ok(next)
    }

    // ── Cooldown ──────────────────────────────────────────────────

    /// Milliseconds left on the failed-checkpoint cooldown.
    /// Recomputed from the stored timestamp on every call.
    pub fn cooldown_remaining(&self) -> ProviaResult<u64> {
        let profile = self.load()?;
        Ok(rules::cooldown_remaining_ms(&profile, self.clock.now()))
    }

    pub fn is_on_cooldown(&self) -> ProviaResult<bool> {
        Ok(self.cooldown_remaining()? > 0)
    }

    /// The cooldown only blocks the day that was failed.
    pub fn is_day_locked_by_cooldown(&self, day: Day) -> ProviaResult<bool> {
        let profile = self.load()?;
        let remaining = rules::cooldown_remaining_ms(&profile, self.clock.now());
        Ok(remaining > 0 && profile.last_failed_day == Some(day))
    }

    // ── Battles & achievements ────────────────────────────────────

    pub fn record_battle(&self, won: bool, credits_earned: Credits) -> ProviaResult<Profile> {
        let current = self.load()?;
        let next = rules::record_battle(&current, won, credits_earned);
        self.save(&next)?;
        log::info!(
            "Battle recorded: won={won}, earned={credits_earned} ({}W/{}P)",
            next.battles_won,
            next.battles_played,
        );
        Ok(next)
    }

    /// Returns true when `id` was newly unlocked.
    pub fn unlock_achievement(&self, id: &str) -> ProviaResult<bool> {
        let current = self.load()?;
        match rules::unlock_achievement(&current, id) {
            Some(next) => {
                self.save(&next)?;
                log::info!("Achievement unlocked: {id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
