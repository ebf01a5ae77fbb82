//! Canned battle opponents. These are fixed data, not live peers.

use serde::Serialize;

use crate::rng::ContentRng;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpponentStatus {
    Online,
    Busy,
    Offline,
}

impl OpponentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online  => "Online",
            Self::Busy    => "In Battle",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opponent {
    pub id:        &'static str,
    pub name:      &'static str,
    pub avatar:    &'static str,
    pub level:     u32,
    pub authority: &'static str,
    pub status:    OpponentStatus,
    /// Percentage of battles won.
    pub win_rate:  u32,
}

impl Opponent {
    pub fn can_challenge(&self) -> bool {
        self.status == OpponentStatus::Online
    }
}

static ROSTER: [Opponent; 8] = [
    Opponent { id: "opp_1", name: "Dr. Sarah K.",  avatar: "👩‍⚕️", level: 12, authority: "DHA",   status: OpponentStatus::Online,  win_rate: 72 },
    Opponent { id: "opp_2", name: "Ahmed R.",      avatar: "👨‍⚕️", level: 9,  authority: "MOH",   status: OpponentStatus::Online,  win_rate: 64 },
    Opponent { id: "opp_3", name: "Priya M.",      avatar: "💊",   level: 15, authority: "HAAD",  status: OpponentStatus::Busy,    win_rate: 81 },
    Opponent { id: "opp_4", name: "Omar F.",       avatar: "🧪",   level: 7,  authority: "SCFHS", status: OpponentStatus::Online,  win_rate: 55 },
    Opponent { id: "opp_5", name: "Fatima A.",     avatar: "🩺",   level: 11, authority: "DHA",   status: OpponentStatus::Offline, win_rate: 68 },
    Opponent { id: "opp_6", name: "Rahul S.",      avatar: "📚",   level: 5,  authority: "MOH",   status: OpponentStatus::Online,  win_rate: 47 },
    Opponent { id: "opp_7", name: "Layla H.",      avatar: "🔬",   level: 18, authority: "HAAD",  status: OpponentStatus::Busy,    win_rate: 88 },
    Opponent { id: "opp_8", name: "Yusuf N.",      avatar: "⚗️",   level: 3,  authority: "SCFHS", status: OpponentStatus::Offline, win_rate: 39 },
];

pub fn roster() -> &'static [Opponent] {
    &ROSTER
}

pub fn find(id: &str) -> Option<&'static Opponent> {
    ROSTER.iter().find(|o| o.id == id)
}

pub fn online() -> Vec<&'static Opponent> {
    ROSTER.iter().filter(|o| o.can_challenge()).collect()
}

/// Uniform pick among online opponents; `None` if nobody is online.
pub fn random_online(rng: &mut ContentRng) -> Option<&'static Opponent> {
    let candidates = online();
    rng.pick(&candidates).copied()
}
