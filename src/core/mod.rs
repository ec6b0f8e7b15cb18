mod allocation;
mod catalog;
mod engine;
mod error;
mod questionnaire;
mod state;
mod types;

pub use allocation::{
    basket_shares, currency_shares, detailed_shares, resolve, risk_score, set_custom_share,
    split_is_complete, split_total,
};
pub use catalog::{MAX_HORIZON, asset_class_params, strategies, strategy};
pub use engine::{annual_contribution, run_forecast};
pub use error::{PlannerError, PlannerResult};
pub use questionnaire::{
    AnswerOption, QUESTION_COUNT, QUESTIONS, Question, QuizOutcome, QuizPhase, QuizState, Stage,
    evaluate_choices, score_answers,
};
pub use state::{PlanView, PlannerEvent, PlannerState};
pub use types::{
    Allocation, AssetClass, AssetClassParams, Baskets, ContributionCadence, Forecast,
    ForecastInputs, ForecastPoint, SliceShare, Strategy, StrategyName, StrategyParams, Weights,
};
