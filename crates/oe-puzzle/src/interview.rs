//! Quizzes where some answers must be backed by a document.

use oe_core::{InteractionResult, Inventory, PuzzleId};
use tracing::debug;

use crate::puzzle::PuzzleResponse;

/// A question that may ask the player to show a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewQuestion {
    /// The question text.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
    /// Item name that must be shown with the answer.
    pub document: Option<String>,
    /// Shown after a correct answer.
    pub feedback: String,
}

impl InterviewQuestion {
    /// Create a question that needs no document.
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
            document: None,
            feedback: feedback.into(),
        }
    }

    /// Require a document to be shown with the answer.
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}

/// An answer plus the document shown with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSelection {
    /// 0-based option index.
    pub index: usize,
    /// Name of the item shown, if any.
    pub document: Option<String>,
}

impl AnswerSelection {
    /// An answer without a document.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            document: None,
        }
    }

    /// Show a document with the answer.
    pub fn showing(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}

/// Actions an interview accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewAction {
    /// Answer the current question and move on.
    Answer(AnswerSelection),
    /// Ask for a verdict now.
    Complete,
    /// Start over from the first question.
    Reset,
}

/// Rapid-fire questions followed by a document check.
///
/// Passing needs every required document in the inventory at verdict time
/// and at least `pass_mark` correct answers. A failed verdict restarts the
/// interview.
#[derive(Debug, Clone)]
pub struct DocumentQuiz {
    id: PuzzleId,
    description: String,
    questions: Vec<InterviewQuestion>,
    required_documents: Vec<String>,
    pass_mark: usize,
    approval_line: String,
    current: usize,
    correct: usize,
    solved: bool,
}

impl DocumentQuiz {
    /// Create an empty interview with a passing bar.
    pub fn new(id: PuzzleId, description: impl Into<String>, pass_mark: usize) -> Self {
        Self {
            id,
            description: description.into(),
            questions: Vec::new(),
            required_documents: Vec::new(),
            pass_mark,
            approval_line: String::new(),
            current: 0,
            correct: 0,
            solved: false,
        }
    }

    /// Append a question.
    pub fn with_question(mut self, question: InterviewQuestion) -> Self {
        self.questions.push(question);
        self
    }

    /// Add a document that must be carried at verdict time.
    pub fn with_required_document(mut self, document: impl Into<String>) -> Self {
        self.required_documents.push(document.into());
        self
    }

    /// Set the line spoken on a passing verdict.
    pub fn with_approval_line(mut self, line: impl Into<String>) -> Self {
        self.approval_line = line.into();
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

    /// Whether the interview was passed.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// The question being asked.
    pub fn current_question(&self) -> Option<&InterviewQuestion> {
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

    /// Documents checked at verdict time.
    pub fn required_documents(&self) -> &[String] {
        &self.required_documents
    }

    /// Correct answers needed to pass.
    pub fn pass_mark(&self) -> usize {
        self.pass_mark
    }

    /// Apply an action.
    pub fn interact(&mut self, action: InterviewAction, inventory: &Inventory) -> PuzzleResponse {
        let result = match action {
            InterviewAction::Answer(selection) => self.answer(&selection, inventory),
            InterviewAction::Complete => self.complete(inventory),
            InterviewAction::Reset => {
                self.reset();
                InteractionResult::message("Interview restarted.")
            }
        };
        PuzzleResponse::open(result)
    }

    fn answer(&mut self, selection: &AnswerSelection, inventory: &Inventory) -> InteractionResult {
        if self.solved {
            return InteractionResult::message("The interview is already over.");
        }
        let Some(question) = self.questions.get(self.current) else {
            return InteractionResult::none();
        };
        if selection.index >= question.options.len() {
            return InteractionResult::message("Invalid option.");
        }

        let document_ok = match &question.document {
            None => true,
            Some(required) => selection
                .document
                .as_deref()
                .is_some_and(|shown| shown == required && inventory.contains(shown)),
        };
        let is_correct = selection.index == question.correct && document_ok;
        debug!(
            puzzle = %self.id,
            question = self.current,
            is_correct,
            shown = ?selection.document,
            "interview answer"
        );

        let feedback = if is_correct {
            self.correct += 1;
            question.feedback.clone()
        } else {
            "That's not quite right. Let's continue.".to_string()
        };
        self.current += 1;

        if self.current >= self.questions.len() {
            self.complete(inventory)
        } else {
            InteractionResult::message(feedback)
        }
    }

    fn complete(&mut self, inventory: &Inventory) -> InteractionResult {
        if self.solved {
            return InteractionResult::message("The interview is already over.");
        }
        let has_documents =
            inventory.contains_all(self.required_documents.iter().map(String::as_str));
        if has_documents && self.correct >= self.pass_mark {
            self.solved = true;
            return InteractionResult::puzzle_solved(self.id).with_dialogue(self.approval_line.clone());
        }

        debug!(puzzle = %self.id, has_documents, correct = self.correct, "interview failed");
        self.reset();
        InteractionResult::message(
            "I'm sorry, but you're missing some required documents or didn't answer correctly. \
             Please gather all necessary documents and try again.",
        )
    }

    /// Back to the first question with a zero score.
    pub fn reset(&mut self) {
        self.current = 0;
        self.correct = 0;
    }
}
