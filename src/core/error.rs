use thiserror::Error;

pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("questionnaire is not waiting for an answer")]
    NotAnswering,

    #[error("question {question} has no option {option} ({available} available)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        available: usize,
    },

    #[error("questionnaire expects {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("questionnaire has no result to apply")]
    NoRecommendation,

    #[error("horizon of {horizon} years exceeds the maximum of {max}")]
    HorizonTooLong { horizon: i32, max: i32 },
}
