use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::{Credits, Day, Percent};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    /// Number of days in the study roadmap.
    pub total_days: Day,
    /// Minimum score that clears a day's checkpoint.
    pub pass_threshold: Percent,
    /// Credits awarded the first time a day is passed.
    pub day_reward: Credits,
    /// Lock-out after a failed checkpoint.
    pub cooldown_minutes: i64,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            total_days: 45,
            pass_threshold: 80,
            day_reward: 20,
            cooldown_minutes: 15,
        }
    }
}

impl RoadmapConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::minutes(self.cooldown_minutes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockTestConfig {
    /// Free attempts granted to a new profile.
    pub free_mocks: u32,
    /// Credits debited per attempt once the free ones are spent.
    pub cost: Credits,
    /// Questions drawn from the full pool per attempt.
    pub question_count: usize,
}

impl Default for MockTestConfig {
    fn default() -> Self {
        Self {
            free_mocks: 2,
            cost: 100,
            question_count: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub question_count: usize,
    pub seconds_per_question: u32,
    /// Winner takes this many credits; the loser gets nothing.
    pub win_reward: Credits,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            question_count: 5,
            seconds_per_question: 15,
            win_reward: 100,
        }
    }
}

impl BattleConfig {
    pub fn reward_for(&self, won: bool) -> Credits {
        if won { self.win_reward } else { 0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviaConfig {
    /// Key the profile record is stored under.
    pub profile_key: String,
    pub roadmap:     RoadmapConfig,
    pub mock_test:   MockTestConfig,
    pub battle:      BattleConfig,
}

impl Default for ProviaConfig {
    fn default() -> Self {
        Self {
            profile_key: "provia_profile".into(),
            roadmap:     RoadmapConfig::default(),
            mock_test:   MockTestConfig::default(),
            battle:      BattleConfig::default(),
        }
    }
}

impl ProviaConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    /// In tests, use ProviaConfig::default().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ProviaConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!("Loaded config from {path}");
        Ok(config)
    }
}
