use serde::Serialize;

use super::error::{PlannerError, PlannerResult};
use super::types::StrategyName;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub label: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [AnswerOption],
}

const fn option(label: &'static str, score: u32) -> AnswerOption {
    AnswerOption { label, score }
}

pub const QUESTION_COUNT: usize = 13;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        text: "Welches Anlageziel steht für Sie im Vordergrund?",
        options: &[
            option("Laufendes Einkommen", 0),
            option("Langfristiger Kapitalerhalt", 3),
            option("Vermögenszuwachs", 6),
            option("Spekulation", 9),
        ],
    },
    Question {
        text: "Müssen Sie regelmässig oder im Notfall auf das investierte Kapital zugreifen?",
        options: &[
            option("Ja", 0),
            option("Unter Umständen", 3),
            option("Kaum", 6),
        ],
    },
    Question {
        text: "Über welchen Zeitraum kann das Kapital angelegt werden?",
        options: &[
            option("0–5 Jahre", 0),
            option("5–10 Jahre", 3),
            option(">10 Jahre", 6),
        ],
    },
    Question {
        text: "Wie hoch ist Ihr gesamtes Vermögen (CHF)?",
        options: &[
            option("0–3 Mio.", 0),
            option("3–10 Mio.", 2),
            option("10–25 Mio.", 4),
            option(">25 Mio.", 6),
        ],
    },
    Question {
        text: "Wie hoch sind Ihre bankmässig verwahrten Vermögenswerte (CHF)?",
        options: &[
            option("0–2 Mio.", 0),
            option("2–10 Mio.", 3),
            option(">10 Mio.", 6),
        ],
    },
    Question {
        text: "Wie hoch ist Ihr jährliches Gesamtnettoeinkommen (CHF)?",
        options: &[
            option("0–250'000", 0),
            option("250'000–1 Mio.", 3),
            option(">1 Mio.", 6),
        ],
    },
    Question {
        text: "Sind Sie nebst Ihrem Einkommen auf zusätzliches Einkommen aus dem Vermögen angewiesen?",
        options: &[option("Ja", 0), option("Nein", 4)],
    },
    Question {
        text: "Wie ist Ihre Risikoeinstellung?",
        options: &[
            option("Risikoavers", 2),
            option("Risikobereit", 4),
            option("Risikofreudig", 6),
        ],
    },
    Question {
        text: "Innerhalb welcher Bandbreite sollten sich Rendite und Schwankungen bewegen?",
        options: &[
            option("-5% bis +10%", 2),
            option("-10% bis +20%", 4),
            option("-20% bis +35%", 6),
        ],
    },
    Question {
        text: "Wie reagieren Sie bei einem Verlust von 15%?",
        options: &[
            option("Verkaufen", 2),
            option("Abwarten", 4),
            option("Erhöhen", 6),
        ],
    },
    Question {
        text: "Kenntnisse über Finanzprodukte und Risiken?",
        options: &[option("Kenntnisse vorhanden", 2), option("Gut informiert", 4)],
    },
    Question {
        text: "Erfahrung mit Kreditfinanzierungen?",
        options: &[option("Keine", 0), option("Wenig", 3), option("Grosse", 6)],
    },
    Question {
        text: "Überwachen Sie die Wertentwicklung Ihrer Anlagen?",
        options: &[
            option("Praktisch nie", 0),
            option("1x pro Quartal", 2),
            option("Monatlich", 4),
            option("Täglich", 6),
        ],
    },
];

const CAPACITY_END: usize = 7;
const WILLINGNESS_END: usize = 10;

// Exclusive upper bounds of stages 1..=4; anything above is stage 5.
const CAPACITY_THRESHOLDS: [u32; 4] = [9, 18, 27, 36];
const WILLINGNESS_THRESHOLDS: [u32; 4] = [9, 12, 16, 18];
const KNOWLEDGE_THRESHOLDS: [u32; 4] = [5, 10, 13, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Stage(u8);

impl Stage {
    fn from_sum(sum: u32, thresholds: &[u32; 4]) -> Self {
        let below = thresholds.iter().position(|limit| sum < *limit);
        Stage(below.map_or(5, |idx| idx as u8 + 1))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn strategy(self) -> StrategyName {
        match self.0 {
            1 => StrategyName::Zinsertrag,
            2 => StrategyName::Conservative,
            3 => StrategyName::Balanced,
            4 => StrategyName::Growth,
            _ => StrategyName::Aggressive,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} von 5", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub capacity_score: u32,
    pub willingness_score: u32,
    pub knowledge_score: u32,
    pub capacity: Stage,
    pub willingness: Stage,
    pub knowledge: Stage,
    pub recommended: StrategyName,
}

pub fn score_answers(scores: &[u32]) -> PlannerResult<QuizOutcome> {
    if scores.len() != QUESTION_COUNT {
        return Err(PlannerError::AnswerCount {
            expected: QUESTION_COUNT,
            actual: scores.len(),
        });
    }

    let capacity_score = dimension_sum(&scores[..CAPACITY_END]);
    let willingness_score = dimension_sum(&scores[CAPACITY_END..WILLINGNESS_END]);
    let knowledge_score = dimension_sum(&scores[WILLINGNESS_END..]);

    let capacity = Stage::from_sum(capacity_score, &CAPACITY_THRESHOLDS);
    let willingness = Stage::from_sum(willingness_score, &WILLINGNESS_THRESHOLDS);
    let knowledge = Stage::from_sum(knowledge_score, &KNOWLEDGE_THRESHOLDS);
    let weakest = capacity.min(willingness).min(knowledge);

    Ok(QuizOutcome {
        capacity_score,
        willingness_score,
        knowledge_score,
        capacity,
        willingness,
        knowledge,
        recommended: weakest.strategy(),
    })
}

fn dimension_sum(scores: &[u32]) -> u32 {
    scores.iter().fold(0, |sum, score| sum.saturating_add(*score))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum QuizPhase {
    #[default]
    Closed,
    Answering {
        index: usize,
    },
    Finished {
        outcome: QuizOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub phase: QuizPhase,
    pub scores: Vec<u32>,
}

impl QuizState {
    pub fn open() -> Self {
        Self {
            phase: QuizPhase::Answering { index: 0 },
            scores: Vec::with_capacity(QUESTION_COUNT),
        }
    }

    pub fn cancel(self) -> Self {
        Self::default()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.phase {
            QuizPhase::Answering { index } => QUESTIONS.get(index),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        match &self.phase {
            QuizPhase::Finished { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn answer(mut self, option_index: usize) -> PlannerResult<Self> {
        let QuizPhase::Answering { index } = self.phase else {
            return Err(PlannerError::NotAnswering);
        };
        let options = QUESTIONS
            .get(index)
            .ok_or(PlannerError::NotAnswering)?
            .options;
        let chosen = options
            .get(option_index)
            .ok_or(PlannerError::OptionOutOfRange {
                question: index,
                option: option_index,
                available: options.len(),
            })?;

        self.scores.push(chosen.score);
        self.phase = if index + 1 < QUESTION_COUNT {
            QuizPhase::Answering { index: index + 1 }
        } else {
            QuizPhase::Finished {
                outcome: score_answers(&self.scores)?,
            }
        };
        Ok(self)
    }
}

pub fn evaluate_choices(choices: &[usize]) -> PlannerResult<QuizOutcome> {
    if choices.len() != QUESTION_COUNT {
        return Err(PlannerError::AnswerCount {
            expected: QUESTION_COUNT,
            actual: choices.len(),
        });
    }
    let state = choices
        .iter()
        .try_fold(QuizState::open(), |state, choice| state.answer(*choice))?;
    state.outcome().copied().ok_or(PlannerError::NotAnswering)
}
