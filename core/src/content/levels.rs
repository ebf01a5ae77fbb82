//! Levels derived from Hero Credits.

use serde::Serialize;

use crate::types::Credits;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level:       u32,
    pub min_credits: Credits,
    pub title:       &'static str,
    pub badge:       &'static str,
}

/// Sorted by `min_credits`, first entry starts at zero.
pub static LEVELS: [Level; 8] = [
    Level { level: 1, min_credits: 0,    title: "Intern",          badge: "🌱" },
    Level { level: 2, min_credits: 100,  title: "Trainee",         badge: "💊" },
    Level { level: 3, min_credits: 250,  title: "Dispenser",       badge: "🧪" },
    Level { level: 4, min_credits: 450,  title: "Clinical Pharmacist", badge: "🩺" },
    Level { level: 5, min_credits: 700,  title: "Senior Pharmacist",   badge: "🔬" },
    Level { level: 6, min_credits: 1000, title: "Specialist",      badge: "⚕️" },
    Level { level: 7, min_credits: 1400, title: "Consultant",      badge: "🏅" },
    Level { level: 8, min_credits: 2000, title: "Licensed Hero",   badge: "🏆" },
];

impl Level {
    /// Highest level whose threshold `credits` reaches. A negative
    /// balance stays on level 1.
    pub fn for_credits(credits: Credits) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| credits >= l.min_credits)
            .unwrap_or(&LEVELS[0])
    }

    /// Next level up, `None` at the top.
    pub fn next(&self) -> Option<&'static Level> {
        LEVELS.iter().find(|l| l.level == self.level + 1)
    }

    pub fn max_level() -> u32 {
        LEVELS[LEVELS.len() - 1].level
    }
}

/// Whole-percent progress from the current level's threshold to the next.
/// 100 at max level, 0 for a negative balance.
pub fn progress_percent(credits: Credits) -> u32 {
    let current = Level::for_credits(credits);
    match current.next() {
        Some(next) => {
            let into = (credits - current.min_credits).max(0);
            let span = next.min_credits - current.min_credits;
            ((into * 100) / span) as u32
        }
        None => 100,
    }
}
