//! Question bank: per-day sets, mock-test sampling and grading.

use serde::{Deserialize, Serialize};

use crate::{
    rng::ContentRng,
    types::{Day, Percent},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id:             String,
    pub day:            Day,
    pub question:       String,
    pub options:        Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation:    Option<String>,
    #[serde(default)]
    pub category:       Option<String>,
}

impl Question {
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_answer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id:    String,
    pub selected_index: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuizResult {
    pub correct: usize,
    pub total:   usize,
    pub percent: Percent,
    pub passed:  bool,
}

#[derive(Debug, Clone, Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load `{"questions": [...]}` from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: QuestionFile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!("Loaded {} questions from {path}", file.questions.len());
        Ok(Self::new(file.questions))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// The fixed set for one roadmap day, in bank order.
    pub fn questions_for_day(&self, day: Day) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.day == day).collect()
    }

    /// A uniformly shuffled sample of up to `count` questions drawn from
    /// the whole pool.
    pub fn sample(&self, count: usize, rng: &mut ContentRng) -> Vec<Question> {
        let mut pool: Vec<&Question> = self.questions.iter().collect();
        rng.shuffle(&mut pool);
        pool.into_iter().take(count).cloned().collect()
    }

    /// Score a set of answers. Every answer counts toward the total; an
    /// answer to an unknown question counts as wrong.
    pub fn grade(&self, answers: &[Answer], pass_threshold: Percent) -> QuizResult {
        let correct = answers
            .iter()
            .filter(|a| {
                self.get(&a.question_id)
                    .is_some_and(|q| q.is_correct(a.selected_index))
            })
            .count();
        let total = answers.len();
        let percent = score_percent(correct, total);
        QuizResult {
            correct,
            total,
            percent,
            passed: percent >= pass_threshold,
        }
    }
}

/// `correct / total` as a whole percentage, rounded half up.
pub fn score_percent(correct: usize, total: usize) -> Percent {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as Percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_like_the_quiz_screen() {
        assert_eq!(score_percent(0, 0), 0);
        assert_eq!(score_percent(4, 5), 80);
        assert_eq!(score_percent(2, 3), 67);
        assert_eq!(score_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(score_percent(119, 120), 99);
    }
}
