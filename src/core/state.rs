use serde::Serialize;
use tracing::debug;

use super::allocation::{
    basket_shares, currency_shares, detailed_shares, resolve, set_custom_share, split_is_complete,
    split_total,
};
use super::catalog::strategy;
use super::engine::{annual_contribution, run_forecast};
use super::error::{PlannerError, PlannerResult};
use super::questionnaire::QuizState;
use super::types::{
    Allocation, AssetClass, Baskets, ContributionCadence, Forecast, ForecastInputs, SliceShare,
    StrategyName, Weights,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    pub starting_capital: f64,
    pub horizon: i32,
    pub contribution: f64,
    pub cadence: ContributionCadence,
    pub strategy: StrategyName,
    pub custom_split: Baskets,
    pub crisis_mode: bool,
    pub quiz: QuizState,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            starting_capital: 100_000.0,
            horizon: 20,
            contribution: 5_000.0,
            cadence: ContributionCadence::Monthly,
            strategy: StrategyName::Balanced,
            custom_split: strategy(StrategyName::Custom).baskets,
            crisis_mode: false,
            quiz: QuizState::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlannerEvent {
    SetStartingCapital(f64),
    SetHorizon(i32),
    SetContribution(f64),
    SetCadence(ContributionCadence),
    SelectStrategy(StrategyName),
    SetCustomShare { class: AssetClass, value: i32 },
    SetCrisisMode(bool),
    OpenQuestionnaire,
    AnswerQuestion(usize),
    CancelQuestionnaire,
    ApplyRecommendation,
}

impl PlannerState {
    pub fn apply(&self, event: PlannerEvent) -> PlannerResult<Self> {
        self.clone().reduce(event)
    }

    fn reduce(self, event: PlannerEvent) -> PlannerResult<Self> {
        let next = match event {
            PlannerEvent::SetStartingCapital(starting_capital) => Self {
                starting_capital,
                ..self
            },
            PlannerEvent::SetHorizon(horizon) => Self { horizon, ..self },
            PlannerEvent::SetContribution(contribution) => Self {
                contribution,
                ..self
            },
            PlannerEvent::SetCadence(cadence) => Self { cadence, ..self },
            PlannerEvent::SelectStrategy(strategy) => Self { strategy, ..self },
            PlannerEvent::SetCustomShare { class, value } => Self {
                custom_split: set_custom_share(self.custom_split, class, value),
                ..self
            },
            PlannerEvent::SetCrisisMode(crisis_mode) => Self {
                crisis_mode,
                ..self
            },
            PlannerEvent::OpenQuestionnaire => Self {
                quiz: QuizState::open(),
                ..self
            },
            PlannerEvent::AnswerQuestion(option) => {
                let quiz = self.quiz.answer(option)?;
                if let Some(outcome) = quiz.outcome() {
                    debug!(recommended = %outcome.recommended, "questionnaire finished");
                }
                Self { quiz, ..self }
            }
            PlannerEvent::CancelQuestionnaire => Self {
                quiz: self.quiz.cancel(),
                ..self
            },
            PlannerEvent::ApplyRecommendation => {
                let recommended = self
                    .quiz
                    .outcome()
                    .map(|outcome| outcome.recommended)
                    .ok_or(PlannerError::NoRecommendation)?;
                Self {
                    strategy: recommended,
                    quiz: QuizState::default(),
                    ..self
                }
            }
        };
        Ok(next)
    }

    pub fn forecast_inputs(&self, allocation: &Allocation) -> ForecastInputs {
        ForecastInputs {
            starting_capital: self.starting_capital,
            horizon: self.horizon,
            annual_contribution: annual_contribution(self.contribution, self.cadence),
            weights: Weights::from_baskets(allocation.baskets),
            crisis_mode: self.crisis_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub strategy: StrategyName,
    pub description: Option<&'static str>,
    pub allocation: Allocation,
    pub annual_contribution: f64,
    pub forecast: Forecast,
    pub basket_shares: Vec<SliceShare>,
    pub currency_shares: Vec<SliceShare>,
    pub detailed_shares: Vec<SliceShare>,
    pub custom_split_total: i64,
    pub custom_split_complete: bool,
}

impl PlanView {
    pub fn derive(state: &PlannerState) -> Self {
        let allocation = resolve(state.strategy, state.custom_split, state.crisis_mode);
        let inputs = state.forecast_inputs(&allocation);
        debug!(
            strategy = %state.strategy,
            horizon = state.horizon,
            crisis = state.crisis_mode,
            "deriving plan view"
        );

        Self {
            strategy: state.strategy,
            description: strategy(state.strategy).description,
            annual_contribution: inputs.annual_contribution,
            forecast: run_forecast(&inputs),
            basket_shares: basket_shares(allocation.baskets),
            currency_shares: currency_shares(allocation.baskets),
            detailed_shares: detailed_shares(allocation.baskets),
            custom_split_total: split_total(state.custom_split),
            custom_split_complete: split_is_complete(state.custom_split),
            allocation,
        }
    }
}
