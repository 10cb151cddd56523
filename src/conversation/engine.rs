use super::questions::{acceptance_message, Question, QuestionBank};
use super::UserId;
use crate::utils::logging::{log_conversation_end, log_conversation_event};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Where a conversation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Waiting for the answer to the question at this index.
    AwaitingAnswer(usize),
    Rejected,
    Accepted,
}

impl ConversationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConversationState::Rejected | ConversationState::Accepted)
    }
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub state: ConversationState,
    pub answers: Vec<bool>,
    pub started_at: DateTime<Utc>,
}

impl Conversation {
    fn new() -> Self {
        Self {
            state: ConversationState::AwaitingAnswer(0),
            answers: Vec::new(),
            started_at: Utc::now(),
        }
    }
}

/// What the engine wants sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Prompt {
        index: usize,
        question: &'static Question,
    },
    Rejected {
        index: usize,
        question: &'static Question,
    },
    Accepted {
        form_url: String,
    },
}

impl Output {
    pub fn text(&self) -> String {
        match self {
            Output::Prompt { question, .. } => question.prompt.to_string(),
            Output::Rejected { question, .. } => question.rejection_message(),
            Output::Accepted { form_url } => acceptance_message(form_url),
        }
    }

    /// Prompts are sent with a Yes/No keyboard.
    pub fn expects_answer(&self) -> bool {
        matches!(self, Output::Prompt { .. })
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Output::Accepted { .. })
    }
}

/// Drives one linear yes/no questionnaire per user.
///
/// Conversations are independent records in a single map; each event holds
/// the lock only for the duration of its transition.
pub struct ConversationEngine {
    bank: QuestionBank,
    form_url: String,
    conversations: Mutex<HashMap<UserId, Conversation>>,
}

impl ConversationEngine {
    pub fn new(bank: QuestionBank, form_url: impl Into<String>) -> Self {
        Self {
            bank,
            form_url: form_url.into(),
            conversations: Mutex::new(HashMap::new()),
        }
    }

    pub fn form_url(&self) -> &str {
        &self.form_url
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, Conversation>> {
        self.conversations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts (or restarts) the questionnaire for `user`.
    pub fn on_start(&self, user: UserId) -> Output {
        self.lock().insert(user, Conversation::new());
        log_conversation_event("CONV_START", user, None);
        self.prompt(0)
    }

    /// Applies an answer to the user's current question.
    pub fn on_answer(&self, user: UserId, answer: bool) -> Output {
        let mut conversations = self.lock();

        let index = match conversations.get(&user).map(|c| c.state) {
            Some(ConversationState::AwaitingAnswer(index)) => index,
            other => {
                tracing::warn!(
                    "Stray answer from user {} (state: {:?}), restarting conversation",
                    user,
                    other
                );
                conversations.insert(user, Conversation::new());
                return self.prompt(0);
            }
        };

        let Some(conversation) = conversations.get_mut(&user) else {
            return self.prompt(0);
        };
        conversation.answers.push(answer);
        log_conversation_event(
            "CONV_ANSWER",
            user,
            Some(&format!("question {} answered {}", index + 1, answer)),
        );

        if !answer {
            conversation.state = ConversationState::Rejected;
            log_conversation_end(user, "rejected", index);
            return Output::Rejected {
                index,
                question: self.bank.question_at(index),
            };
        }

        if self.bank.is_last(index) {
            conversation.state = ConversationState::Accepted;
            log_conversation_end(user, "accepted", index);
            return Output::Accepted {
                form_url: self.form_url.clone(),
            };
        }

        conversation.state = ConversationState::AwaitingAnswer(index + 1);
        self.prompt(index + 1)
    }

    fn prompt(&self, index: usize) -> Output {
        Output::Prompt {
            index,
            question: self.bank.question_at(index),
        }
    }

    pub fn state_of(&self, user: UserId) -> Option<ConversationState> {
        self.lock().get(&user).map(|c| c.state)
    }

    pub fn conversation(&self, user: UserId) -> Option<Conversation> {
        self.lock().get(&user).cloned()
    }

    /// Number of conversations still waiting for an answer.
    pub fn active_count(&self) -> usize {
        self.lock()
            .values()
            .filter(|c| !c.state.is_terminal())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ConversationEngine {
        ConversationEngine::new(QuestionBank::standard(), "https://example.com/form")
    }

    #[test]
    fn test_answers_are_recorded_in_order() {
        let engine = engine();
        let user = UserId(7);
        engine.on_start(user);
        engine.on_answer(user, true);
        engine.on_answer(user, false);

        let conversation = engine.conversation(user).unwrap();
        assert_eq!(conversation.answers, vec![true, false]);
        assert_eq!(conversation.state, ConversationState::Rejected);
    }

    #[test]
    fn test_active_count_ignores_terminal_conversations() {
        let engine = engine();
        engine.on_start(UserId(1));
        engine.on_start(UserId(2));
        engine.on_answer(UserId(2), false);

        assert_eq!(engine.active_count(), 1);
    }

    #[test]
    fn test_output_keyboard_only_for_prompts() {
        let engine = engine();
        let user = UserId(3);
        assert!(engine.on_start(user).expects_answer());
        assert!(engine.on_answer(user, true).expects_answer());
        let accepted = engine.on_answer(user, true);
        assert!(!accepted.expects_answer());
        assert!(accepted.is_accepted());
        assert_eq!(
            accepted.text(),
            "Great! Here's the form to fill out: https://example.com/form"
        );
    }
}
