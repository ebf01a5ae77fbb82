//! Leaderboard: a canned roster ranked together with the current user.

use serde::Serialize;

use crate::{content::levels::Level, profile::Profile, types::Credits};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank:            usize,
    pub name:            String,
    pub avatar:          String,
    pub authority:       String,
    pub credits:         Credits,
    /// Derived from `credits`.
    pub level:           u32,
    pub streak:          u32,
    pub days_completed:  usize,
    pub is_current_user: bool,
}

/// (name, avatar, authority, credits, streak, days completed)
static ROSTER: [(&str, &str, &str, Credits, u32, usize); 9] = [
    ("Dr. Sarah K.", "👩‍⚕️", "DHA",   860, 21, 38),
    ("Layla H.",     "🔬",   "HAAD",  740, 17, 33),
    ("Priya M.",     "💊",   "HAAD",  620, 14, 29),
    ("Ahmed R.",     "👨‍⚕️", "MOH",   480, 9,  22),
    ("Fatima A.",    "🩺",   "DHA",   400, 12, 19),
    ("Omar F.",      "🧪",   "SCFHS", 300, 6,  14),
    ("Rahul S.",     "📚",   "MOH",   180, 4,  9),
    ("Noura B.",     "🌟",   "DHA",   120, 3,  6),
    ("Yusuf N.",     "⚗️",   "SCFHS", 40,  1,  2),
];

const CURRENT_USER_AVATAR: &str = "💊";
const FALLBACK_AUTHORITY: &str = "DHA";

/// All entries sorted by credits, highest first. On a tie the canned
/// entry ranks above the current user.
pub fn leaderboard(profile: &Profile) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = ROSTER
        .iter()
        .map(|&(name, avatar, authority, credits, streak, days)| LeaderboardEntry {
            rank: 0,
            name: name.into(),
            avatar: avatar.into(),
            authority: authority.into(),
            credits,
            level: Level::for_credits(credits).level,
            streak,
            days_completed: days,
            is_current_user: false,
        })
        .collect();

    entries.push(LeaderboardEntry {
        rank:            0,
        name:            profile.display_name.clone(),
        avatar:          CURRENT_USER_AVATAR.into(),
        authority:       profile
            .territory
            .clone()
            .unwrap_or_else(|| FALLBACK_AUTHORITY.into()),
        credits:         profile.hero_credits,
        level:           Level::for_credits(profile.hero_credits).level,
        streak:          profile.streak_count,
        days_completed:  profile.completed_days.len(),
        is_current_user: true,
    });

    // Stable sort keeps roster order for ties.
    entries.sort_by(|a, b| b.credits.cmp(&a.credits));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

pub fn current_user_rank(entries: &[LeaderboardEntry]) -> Option<usize> {
    entries.iter().find(|e| e.is_current_user).map(|e| e.rank)
}
