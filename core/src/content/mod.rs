//! Static content consumed read-only by the presentation layer.
//!
//! Nothing here holds state. Randomised lookups take a `ContentRng`
//! so callers choose between entropy and a fixed seed.

pub mod leaderboard;
pub mod levels;
pub mod opponents;
pub mod questions;
pub mod schedule;

pub use leaderboard::{leaderboard, LeaderboardEntry};
pub use levels::Level;
pub use opponents::{Opponent, OpponentStatus};
pub use questions::{score_percent, Answer, Question, QuestionBank, QuizResult};
pub use schedule::{topic_for_day, DayTopic};
