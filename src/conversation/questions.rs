/// A yes/no screening question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    /// Completes "this role ..." when the answer is no.
    pub rejection: &'static str,
}

impl Question {
    pub fn rejection_message(&self) -> String {
        format!(
            "I'm sorry, but this role {} Thank you for your interest!",
            self.rejection
        )
    }
}

static SCREENING_QUESTIONS: [Question; 2] = [
    Question {
        prompt: "Do you have chatting experience?",
        rejection: "requires prior chatting experience.",
    },
    Question {
        prompt: "Are you available for 5-7 days per week for 8-hour shifts?",
        rejection: "requires availability for 5-7 days per week.",
    },
];

/// Ordered, immutable list of screening questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    /// The two questions asked by the bot.
    pub fn standard() -> Self {
        Self::new(&SCREENING_QUESTIONS)
    }

    /// Panics on an out-of-range index; callers only walk `0..count()`.
    pub fn question_at(&self, index: usize) -> &'static Question {
        &self.questions[index]
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.count()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn acceptance_message(form_url: &str) -> String {
    format!("Great! Here's the form to fill out: {form_url}")
}

pub fn reminder_message(form_url: &str) -> String {
    format!(
        "Hey! Just a reminder to fill out the application form if you haven't already: {form_url}"
    )
}
