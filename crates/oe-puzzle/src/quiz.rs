//! Sequential multiple-choice quizzes.

use oe_core::{InteractionResult, Inventory, Item, PuzzleId};
use tracing::debug;

use crate::puzzle::PuzzleResponse;

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question text.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
    /// Shown after a correct answer.
    pub feedback: String,
}

impl Question {
    /// Create a question.
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            feedback: feedback.into(),
        }
    }
}

/// Actions a quiz accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Answer the current question with a 0-based option index.
    Answer(usize),
    /// Move to the next question.
    Next,
    /// Ask for the reward.
    Complete,
    /// Start over from the first question.
    Reset,
}

#[derive(Debug, Clone)]
struct Reward {
    item: Item,
    announcement: String,
}

/// A fixed list of questions that must all be answered correctly.
///
/// Answering does not advance; the presenter calls [`QuizAction::Next`]
/// when it is done showing feedback. Each question scores at most once.
#[derive(Debug, Clone)]
pub struct QuizPuzzle {
    id: PuzzleId,
    description: String,
    questions: Vec<Question>,
    reward: Option<Reward>,
    repeat_message: String,
    current: usize,
    correct: usize,
    answered: Vec<bool>,
    solved: bool,
}

impl QuizPuzzle {
    /// Create an empty quiz.
    pub fn new(id: PuzzleId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            questions: Vec::new(),
            reward: None,
            repeat_message: "You have already completed this.".to_string(),
            current: 0,
            correct: 0,
            answered: Vec::new(),
            solved: false,
        }
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self.answered.push(false);
        self
    }

    /// Set the item handed out on completion and the line announcing it.
    pub fn with_reward(mut self, item: Item, announcement: impl Into<String>) -> Self {
        self.reward = Some(Reward {
            item,
            announcement: announcement.into(),
        });
        self
    }

    /// Set the message returned when completing an already-solved quiz.
    pub fn with_repeat_message(mut self, message: impl Into<String>) -> Self {
        self.repeat_message = message.into();
        self
    }

    /// Puzzle id.
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// Human-readable title.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the quiz has been completed.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// The question currently on screen, if any remain.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// 0-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of questions.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Running count of correct answers.
    pub fn correct_answers(&self) -> usize {
        self.correct
    }

    /// Whether the current question has been answered.
    pub fn current_answered(&self) -> bool {
        self.answered.get(self.current).copied().unwrap_or(false)
    }

    /// A quiz can't be restarted while the player still holds its reward.
    pub fn can_start(&self, inventory: &Inventory) -> bool {
        self.reward
            .as_ref()
            .is_none_or(|reward| !inventory.contains(reward.item.name()))
    }

    /// Apply an action.
    pub fn interact(&mut self, action: QuizAction) -> PuzzleResponse {
        let result = match action {
            QuizAction::Answer(index) => self.answer(index),
            QuizAction::Next => self.next(),
            QuizAction::Complete => self.complete(),
            QuizAction::Reset => {
                self.reset();
                InteractionResult::message("Quiz reset.")
            }
        };
        PuzzleResponse::open(result)
    }

    fn answer(&mut self, index: usize) -> InteractionResult {
        let Some(question) = self.questions.get(self.current) else {
            return InteractionResult::message("Quiz already completed.");
        };
        if self.answered[self.current] {
            return InteractionResult::message("You already answered this question.");
        }
        if index >= question.options.len() {
            return InteractionResult::message("Invalid option.");
        }

        self.answered[self.current] = true;
        debug!(puzzle = %self.id, question = self.current, index, "quiz answer");
        if index == question.correct {
            self.correct += 1;
            InteractionResult::message(question.feedback.clone())
        } else {
            InteractionResult::message("Wrong answer.")
        }
    }

    fn next(&mut self) -> InteractionResult {
        if self.current < self.questions.len() {
            self.current += 1;
        }
        if self.current < self.questions.len() {
            InteractionResult::message("Next question.")
        } else {
            InteractionResult::message("That was the last question.")
        }
    }

    fn complete(&mut self) -> InteractionResult {
        if self.solved {
            return InteractionResult::message(self.repeat_message.clone());
        }
        if self.correct != self.questions.len() {
            return InteractionResult::message("You need to answer all questions correctly.");
        }

        self.solved = true;
        let solved = InteractionResult::puzzle_solved(self.id);
        match &self.reward {
            Some(reward) => solved
                .with_dialogue(reward.announcement.clone())
                .with_item(reward.item.clone()),
            None => solved,
        }
    }

    /// Zero the question index and the score.
    pub fn reset(&mut self) {
        self.current = 0;
        self.correct = 0;
        self.answered.iter_mut().for_each(|a| *a = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oe_core::Outcome;

    fn two_question_quiz() -> QuizPuzzle {
        QuizPuzzle::new(PuzzleId::Ticket, "Get a ticket")
            .with_question(Question::new("1 + 1?", ["1", "2"], 1, "Yes."))
            .with_question(Question::new("Sky?", ["blue", "green", "red"], 0, "Right."))
            .with_reward(Item::new("ticketItem", "A ticket"), "You got ticket number 12!")
            .with_repeat_message("You already have a ticket.")
    }

    fn answer_all(quiz: &mut QuizPuzzle) {
        quiz.interact(QuizAction::Answer(1));
        quiz.interact(QuizAction::Next);
        quiz.interact(QuizAction::Answer(0));
    }

    #[test]
    fn reward_is_granted_exactly_once() {
        let mut quiz = two_question_quiz();
        answer_all(&mut quiz);

        let first = quiz.interact(QuizAction::Complete);
        assert!(first.solved);
        match &first.result.outcome {
            Outcome::PuzzleSolved { item, dialogue, .. } => {
                assert_eq!(item.as_ref().map(Item::name), Some("ticketItem"));
                assert_eq!(dialogue, &vec!["You got ticket number 12!".to_string()]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        let second = quiz.interact(QuizAction::Complete);
        assert!(!second.solved);
        assert_eq!(second.result.message_text(), Some("You already have a ticket."));
        assert!(quiz.is_solved());
    }

    #[test]
    fn wrong_answer_blocks_completion() {
        let mut quiz = two_question_quiz();
        quiz.interact(QuizAction::Answer(0));
        quiz.interact(QuizAction::Next);
        quiz.interact(QuizAction::Answer(0));

        let response = quiz.interact(QuizAction::Complete);
        assert_eq!(
            response.result.message_text(),
            Some("You need to answer all questions correctly.")
        );
        assert!(!quiz.is_solved());
    }

    #[test]
    fn answer_does_not_advance() {
        let mut quiz = two_question_quiz();
        let response = quiz.interact(QuizAction::Answer(1));
        assert_eq!(response.result.message_text(), Some("Yes."));
        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.current_answered());
    }

    #[test]
    fn same_question_scores_once() {
        let mut quiz = two_question_quiz();
        quiz.interact(QuizAction::Answer(1));
        let again = quiz.interact(QuizAction::Answer(1));
        assert_eq!(
            again.result.message_text(),
            Some("You already answered this question.")
        );
        assert_eq!(quiz.correct_answers(), 1);
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut quiz = two_question_quiz();
        let response = quiz.interact(QuizAction::Answer(9));
        assert_eq!(response.result.message_text(), Some("Invalid option."));
        assert!(!quiz.current_answered());
        assert_eq!(quiz.correct_answers(), 0);
    }

    #[test]
    fn next_saturates_at_end() {
        let mut quiz = two_question_quiz();
        for _ in 0..5 {
            quiz.interact(QuizAction::Next);
        }
        assert_eq!(quiz.current_index(), 2);
        assert!(quiz.current_question().is_none());
        let response = quiz.interact(QuizAction::Answer(0));
        assert_eq!(response.result.message_text(), Some("Quiz already completed."));
    }

    #[test]
    fn reset_clears_progress() {
        let mut quiz = two_question_quiz();
        answer_all(&mut quiz);
        quiz.interact(QuizAction::Reset);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.correct_answers(), 0);
        assert!(!quiz.current_answered());
    }

    #[test]
    fn cannot_start_while_holding_reward() {
        let quiz = two_question_quiz();
        let mut inventory = Inventory::new();
        assert!(quiz.can_start(&inventory));
        inventory.add(Item::new("ticketItem", "A ticket"));
        assert!(!quiz.can_start(&inventory));
    }
}
