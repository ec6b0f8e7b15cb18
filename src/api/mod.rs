use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::core::{
    AssetClass, Baskets, ContributionCadence, MAX_HORIZON, PlanView, PlannerError,
    PlannerResult, PlannerState, QUESTIONS, Question, QuizOutcome, StrategyName, StrategyParams, evaluate_choices, risk_score,
    set_custom_share, split_is_complete, split_total, strategies, strategy,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Planner(#[from] PlannerError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliStrategy {
    Zinsertrag,
    Conservative,
    Balanced,
    Growth,
    Aggressive,
    Custom,
}

impl From<CliStrategy> for StrategyName {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Zinsertrag => StrategyName::Zinsertrag,
            CliStrategy::Conservative => StrategyName::Conservative,
            CliStrategy::Balanced => StrategyName::Balanced,
            CliStrategy::Growth => StrategyName::Growth,
            CliStrategy::Aggressive => StrategyName::Aggressive,
            CliStrategy::Custom => StrategyName::Custom,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCadence {
    Monthly,
    Yearly,
}

impl From<CliCadence> for ContributionCadence {
    fn from(value: CliCadence) -> Self {
        match value {
            CliCadence::Monthly => ContributionCadence::Monthly,
            CliCadence::Yearly => ContributionCadence::Yearly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
enum ApiStrategy {
    #[serde(alias = "zinsertrag")]
    Zinsertrag,
    #[serde(alias = "conservative")]
    Conservative,
    #[serde(alias = "balanced")]
    Balanced,
    #[serde(alias = "growth")]
    Growth,
    #[serde(alias = "aggressive")]
    Aggressive,
    #[serde(rename = "Individuelle Strategie", alias = "Custom", alias = "custom")]
    Custom,
}

impl From<ApiStrategy> for CliStrategy {
    fn from(value: ApiStrategy) -> Self {
        match value {
            ApiStrategy::Zinsertrag => CliStrategy::Zinsertrag,
            ApiStrategy::Conservative => CliStrategy::Conservative,
            ApiStrategy::Balanced => CliStrategy::Balanced,
            ApiStrategy::Growth => CliStrategy::Growth,
            ApiStrategy::Aggressive => CliStrategy::Aggressive,
            ApiStrategy::Custom => CliStrategy::Custom,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiCadence {
    #[serde(alias = "monatlich")]
    Monthly,
    #[serde(alias = "jährlich", alias = "annual")]
    Yearly,
}

impl From<ApiCadence> for CliCadence {
    fn from(value: ApiCadence) -> Self {
        match value {
            ApiCadence::Monthly => CliCadence::Monthly,
            ApiCadence::Yearly => CliCadence::Yearly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiAssetClass {
    #[serde(alias = "fixedIncome", alias = "fixed")]
    FixedIncome,
    #[serde(alias = "equityPlus", alias = "equity")]
    EquityPlus,
    #[serde(alias = "digitalAssets", alias = "digital")]
    DigitalAssets,
}

impl From<ApiAssetClass> for AssetClass {
    fn from(value: ApiAssetClass) -> Self {
        match value {
            ApiAssetClass::FixedIncome => AssetClass::FixedIncome,
            ApiAssetClass::EquityPlus => AssetClass::EquityPlus,
            ApiAssetClass::DigitalAssets => AssetClass::DigitalAssets,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "wealthplan",
    about = "Investment planner: strategy allocation, wealth forecast and risk questionnaire"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Serve the JSON API")]
    Serve(ServeArgs),
    #[command(about = "Print the forecast for one set of inputs")]
    Forecast(ForecastArgs),
    #[command(about = "Score questionnaire answers given as option indices")]
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[derive(Args, Debug)]
struct ForecastArgs {
    #[command(flatten)]
    plan: PlanArgs,
    #[arg(long, help = "Print the full plan as JSON")]
    json: bool,
}

#[derive(Args, Debug)]
struct QuizArgs {
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        help = "Chosen option index for each question, e.g. 0,1,2,..."
    )]
    answers: Vec<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct PlanArgs {
    #[arg(long, default_value_t = 100_000.0, help = "Starting capital in CHF")]
    starting_capital: f64,
    #[arg(
        long,
        default_value_t = 20,
        allow_negative_numbers = true,
        help = "Investment horizon in years (at most 60)"
    )]
    horizon: i32,
    #[arg(long, default_value_t = 5_000.0, help = "Recurring contribution")]
    contribution: f64,
    #[arg(long, value_enum, default_value_t = CliCadence::Monthly)]
    cadence: CliCadence,
    #[arg(long, value_enum, default_value_t = CliStrategy::Balanced)]
    strategy: CliStrategy,
    #[arg(
        long,
        default_value_t = 50,
        help = "Fixed Income percent for the custom strategy"
    )]
    custom_fixed: i32,
    #[arg(
        long,
        default_value_t = 40,
        help = "Equity+ percent for the custom strategy"
    )]
    custom_equity: i32,
    #[arg(
        long,
        default_value_t = 10,
        help = "Digital Assets percent for the custom strategy"
    )]
    custom_digital: i32,
    #[arg(
        long,
        help = "Stress every 10th year and halve/double the displayed return/volatility"
    )]
    crisis_mode: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    starting_capital: Option<f64>,
    horizon: Option<i32>,
    contribution: Option<f64>,
    contribution_cadence: Option<ApiCadence>,
    strategy: Option<ApiStrategy>,
    custom_fixed: Option<i32>,
    custom_equity: Option<i32>,
    custom_digital: Option<i32>,
    crisis_mode: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomSplitPayload {
    #[serde(default = "default_custom_split")]
    split: Baskets,
    asset_class: ApiAssetClass,
    value: i32,
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StrategyResponse {
    name: StrategyName,
    baskets: Baskets,
    expected_return: Option<f64>,
    volatility: Option<f64>,
    risk_score: f64,
    description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomSplitResponse {
    split: Baskets,
    total: i64,
    complete: bool,
}

#[derive(Debug, Serialize)]
struct QuestionnaireResponse {
    questions: &'static [Question],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizResponse {
    #[serde(flatten)]
    outcome: QuizOutcome,
    description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_state(args: PlanArgs) -> PlannerResult<PlannerState> {
    if args.horizon > MAX_HORIZON {
        return Err(PlannerError::HorizonTooLong {
            horizon: args.horizon,
            max: MAX_HORIZON,
        });
    }
    Ok(PlannerState {
        starting_capital: args.starting_capital,
        horizon: args.horizon,
        contribution: args.contribution,
        cadence: args.cadence.into(),
        strategy: args.strategy.into(),
        custom_split: [args.custom_fixed, args.custom_equity, args.custom_digital],
        crisis_mode: args.crisis_mode,
        ..PlannerState::default()
    })
}

fn default_plan_args() -> PlanArgs {
    let defaults = PlannerState::default();
    PlanArgs {
        starting_capital: defaults.starting_capital,
        horizon: defaults.horizon,
        contribution: defaults.contribution,
        cadence: CliCadence::Monthly,
        strategy: CliStrategy::Balanced,
        custom_fixed: defaults.custom_split[0],
        custom_equity: defaults.custom_split[1],
        custom_digital: defaults.custom_split[2],
        crisis_mode: defaults.crisis_mode,
    }
}

fn default_custom_split() -> Baskets {
    PlannerState::default().custom_split
}

fn plan_state_from_payload(payload: PlanPayload) -> PlannerResult<PlannerState> {
    let mut args = default_plan_args();

    if let Some(v) = payload.starting_capital {
        args.starting_capital = v;
    }
    if let Some(v) = payload.horizon {
        args.horizon = v;
    }
    if let Some(v) = payload.contribution {
        args.contribution = v;
    }
    if let Some(v) = payload.contribution_cadence {
        args.cadence = v.into();
    }
    if let Some(v) = payload.strategy {
        args.strategy = v.into();
    }
    if let Some(v) = payload.custom_fixed {
        args.custom_fixed = v;
    }
    if let Some(v) = payload.custom_equity {
        args.custom_equity = v;
    }
    if let Some(v) = payload.custom_digital {
        args.custom_digital = v;
    }
    if let Some(v) = payload.crisis_mode {
        args.crisis_mode = v;
    }

    build_state(args)
}

#[cfg(test)]
fn plan_state_from_json(json: &str) -> Result<PlannerState, String> {
    let payload = serde_json::from_str::<PlanPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    plan_state_from_payload(payload).map_err(|e| e.to_string())
}

fn strategy_catalog() -> Vec<StrategyResponse> {
    strategies()
        .iter()
        .map(|entry| {
            let (expected_return, volatility) = match entry.params {
                StrategyParams::Fixed {
                    expected_return,
                    volatility,
                } => (Some(expected_return), Some(volatility)),
                StrategyParams::Weighted => (None, None),
            };
            StrategyResponse {
                name: entry.name,
                baskets: entry.baskets,
                expected_return,
                volatility,
                risk_score: risk_score(entry.baskets),
                description: entry.description,
            }
        })
        .collect()
}

fn quiz_response(outcome: QuizOutcome) -> QuizResponse {
    QuizResponse {
        description: strategy(outcome.recommended).description,
        outcome,
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/api/strategies", get(strategies_handler))
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .route("/api/custom-split", post(custom_split_handler))
        .route("/api/questionnaire", get(questionnaire_handler))
        .route("/api/questionnaire/evaluate", post(evaluate_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("planner API listening on http://{addr}");
    info!("local access: http://127.0.0.1:{}/api/plan", addr.port());

    axum::serve(listener, router()).await
}

async fn strategies_handler() -> Response {
    json_response(StatusCode::OK, strategy_catalog())
}

async fn plan_get_handler(Query(payload): Query<PlanPayload>) -> Response {
    plan_handler_impl(payload)
}

async fn plan_post_handler(Json(payload): Json<PlanPayload>) -> Response {
    plan_handler_impl(payload)
}

fn plan_handler_impl(payload: PlanPayload) -> Response {
    match plan_state_from_payload(payload) {
        Ok(state) => json_response(StatusCode::OK, PlanView::derive(&state)),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

async fn custom_split_handler(Json(payload): Json<CustomSplitPayload>) -> Response {
    let split = set_custom_share(payload.split, payload.asset_class.into(), payload.value);
    json_response(
        StatusCode::OK,
        CustomSplitResponse {
            split,
            total: split_total(split),
            complete: split_is_complete(split),
        },
    )
}

async fn questionnaire_handler() -> Response {
    json_response(
        StatusCode::OK,
        QuestionnaireResponse {
            questions: &QUESTIONS,
        },
    )
}

async fn evaluate_handler(Json(payload): Json<QuizPayload>) -> Response {
    match evaluate_choices(&payload.answers) {
        Ok(outcome) => {
            debug!(recommended = %outcome.recommended, "questionnaire evaluated");
            json_response(StatusCode::OK, quiz_response(outcome))
        }
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Serve(args) => {
            run_http_server(SocketAddr::new(args.host, args.port)).await?;
        }
        Command::Forecast(args) => {
            let view = PlanView::derive(&build_state(args.plan)?);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_plan(&view));
            }
        }
        Command::Quiz(args) => {
            let response = quiz_response(evaluate_choices(&args.answers)?);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", render_quiz(&response));
            }
        }
    }
    Ok(())
}

fn render_plan(view: &PlanView) -> String {
    let allocation = &view.allocation;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Strategy: {} [{} / {} / {}]",
        view.strategy, allocation.baskets[0], allocation.baskets[1], allocation.baskets[2]
    );
    let _ = writeln!(
        out,
        "Return: {:.1}%  Volatility: {:.1}%  Risk score: {:.2}",
        allocation.expected_return * 100.0,
        allocation.volatility * 100.0,
        allocation.risk_score
    );
    if !view.custom_split_complete && view.strategy == StrategyName::Custom {
        let _ = writeln!(
            out,
            "Warning: custom split sums to {}%",
            view.custom_split_total
        );
    }
    let _ = writeln!(
        out,
        "{:>5} {:>15} {:>15} {:>15}",
        "year", "expected", "worst", "best"
    );
    let rows = view
        .forecast
        .expected
        .iter()
        .zip(&view.forecast.worst)
        .zip(&view.forecast.best);
    for ((expected, worst), best) in rows {
        let _ = writeln!(
            out,
            "{:>5} {:>15.0} {:>15.0} {:>15.0}",
            expected.year, expected.value, worst.value, best.value
        );
    }
    out
}

fn render_quiz(response: &QuizResponse) -> String {
    let outcome = &response.outcome;
    let mut out = String::new();
    let _ = writeln!(out, "Risikofähigkeit:           {}", outcome.capacity);
    let _ = writeln!(out, "Risikobereitschaft:        {}", outcome.willingness);
    let _ = writeln!(out, "Kenntnisse & Erfahrungen:  {}", outcome.knowledge);
    let _ = writeln!(out, "Empfohlene Strategie:      {}", outcome.recommended);
    if let Some(description) = response.description {
        let _ = writeln!(out, "{description}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QUESTION_COUNT;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    async fn call(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        let json = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, json)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    #[test]
    fn empty_payload_uses_planner_defaults() {
        let state = plan_state_from_json("{}").expect("json should parse");
        assert_eq!(state, PlannerState::default());
    }

    #[test]
    fn plan_state_from_json_parses_web_keys() {
        let json = r#"{
          "startingCapital": 250000,
          "horizon": 30,
          "contribution": 800,
          "contributionCadence": "monatlich",
          "strategy": "Individuelle Strategie",
          "customFixed": 20,
          "customEquity": 50,
          "customDigital": 20,
          "crisisMode": true
        }"#;
        let state = plan_state_from_json(json).expect("json should parse");

        assert_approx(state.starting_capital, 250_000.0);
        assert_eq!(state.horizon, 30);
        assert_approx(state.contribution, 800.0);
        assert_eq!(state.cadence, ContributionCadence::Monthly);
        assert_eq!(state.strategy, StrategyName::Custom);
        assert_eq!(state.custom_split, [20, 50, 20]);
        assert!(state.crisis_mode);
    }

    #[test]
    fn plan_state_accepts_negative_inputs_unchanged() {
        let state = plan_state_from_json(r#"{"startingCapital": -5, "horizon": -2}"#)
            .expect("json should parse");
        let view = PlanView::derive(&state);
        assert_eq!(view.forecast.expected.len(), 1);
        assert_approx(view.forecast.expected[0].value, -5.0);
    }

    #[test]
    fn plan_state_rejects_horizon_beyond_limit() {
        let state = plan_state_from_json(r#"{"horizon": 60}"#).expect("limit is inclusive");
        assert_eq!(PlanView::derive(&state).forecast.best.len(), 61);

        let err = plan_state_from_json(r#"{"horizon": 2147483647}"#).expect_err("too long");
        assert!(err.contains("exceeds the maximum of 60"));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = plan_state_from_json(r#"{"strategy": "Moonshot"}"#).expect_err("unknown");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn strategy_catalog_exposes_custom_without_fixed_rates() {
        let catalog = strategy_catalog();
        assert_eq!(catalog.len(), 6);
        let custom = catalog
            .iter()
            .find(|s| s.name == StrategyName::Custom)
            .expect("custom strategy listed");
        assert!(custom.expected_return.is_none());
        assert!(custom.volatility.is_none());

        let zins = &catalog[0];
        assert_eq!(zins.name, StrategyName::Zinsertrag);
        assert_approx(zins.risk_score, 2.0);
    }

    #[test]
    fn cli_parses_forecast_flags() {
        let cli = Cli::try_parse_from([
            "wealthplan",
            "forecast",
            "--starting-capital",
            "50000",
            "--horizon",
            "10",
            "--cadence",
            "yearly",
            "--strategy",
            "custom",
            "--custom-fixed",
            "60",
            "--crisis-mode",
        ])
        .expect("flags should parse");
        let Command::Forecast(args) = cli.command else {
            panic!("expected forecast command");
        };
        let state = build_state(args.plan).expect("horizon within range");
        assert_approx(state.starting_capital, 50_000.0);
        assert_eq!(state.horizon, 10);
        assert_eq!(state.cadence, ContributionCadence::Yearly);
        assert_eq!(state.strategy, StrategyName::Custom);
        assert_eq!(state.custom_split, [60, 40, 10]);
        assert!(state.crisis_mode);
    }

    #[test]
    fn cli_parses_comma_separated_answers() {
        let cli = Cli::try_parse_from(["wealthplan", "quiz", "--answers", "0,1,2"])
            .expect("answers should parse");
        let Command::Quiz(args) = cli.command else {
            panic!("expected quiz command");
        };
        assert_eq!(args.answers, vec![0, 1, 2]);
    }

    #[test]
    fn render_plan_lists_every_year() {
        let mut args = default_plan_args();
        args.horizon = 3;
        let state = build_state(args).expect("horizon within range");
        let text = render_plan(&PlanView::derive(&state));
        assert!(text.starts_with("Strategy: Balanced [50 / 40 / 10]"));
        assert!(text.contains("Risk score: 3.60"));
        // header lines plus four rows
        assert_eq!(text.lines().count(), 3 + 4);
    }

    #[test]
    fn render_quiz_shows_stages_and_description() {
        let outcome = evaluate_choices(&[0; QUESTION_COUNT]).expect("valid");
        let text = render_quiz(&quiz_response(outcome));
        assert!(text.contains("Risikofähigkeit:           1 von 5"));
        assert!(text.contains("Empfohlene Strategie:      Zinsertrag"));
        assert!(text.contains("100% Fixed Income"));
    }

    #[tokio::test]
    async fn plan_endpoint_returns_forecast_series() {
        let request = Request::get("/api/plan?horizon=2&contribution=0&strategy=Zinsertrag")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = call(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["strategy"], "Zinsertrag");
        assert_eq!(json["allocation"]["baskets"], serde_json::json!([100, 0, 0]));
        let expected = json["forecast"]["expected"].as_array().expect("array");
        assert_eq!(expected.len(), 3);
        assert_eq!(expected[1]["year"], 1);
        assert_eq!(expected[1]["value"].as_f64(), Some(104_400.0));
        assert_eq!(json["detailedShares"].as_array().map(Vec::len), Some(9));
    }

    #[tokio::test]
    async fn custom_split_endpoint_rescales_other_classes() {
        let request = post_json(
            "/api/custom-split",
            r#"{"split": [50, 40, 10], "assetClass": "fixed-income", "value": 60}"#,
        );
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["split"], serde_json::json!([60, 32, 8]));
        assert_eq!(json["total"], 100);
        assert_eq!(json["complete"], true);
    }

    #[tokio::test]
    async fn plan_endpoint_rejects_oversized_horizon() {
        let request = Request::get("/api/plan?horizon=2147483647")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["error"]
                .as_str()
                .is_some_and(|msg| msg.contains("horizon of 2147483647 years"))
        );
    }

    #[tokio::test]
    async fn custom_split_endpoint_accepts_out_of_range_value() {
        let request = post_json(
            "/api/custom-split",
            r#"{"split": [50, 40, 10], "assetClass": "fixed-income", "value": -2147483648}"#,
        );
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["split"][0], i32::MIN);
        assert!(json["total"].is_i64());
    }

    #[tokio::test]
    async fn questionnaire_endpoint_lists_all_questions() {
        let request = Request::get("/api/questionnaire")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        let questions = json["questions"].as_array().expect("array");
        assert_eq!(questions.len(), QUESTION_COUNT);
        assert_eq!(questions[0]["options"][3]["score"], 9);
    }

    #[tokio::test]
    async fn evaluate_endpoint_scores_answers() {
        let answers = vec!["0"; QUESTION_COUNT].join(",");
        let request = post_json(
            "/api/questionnaire/evaluate",
            &format!(r#"{{"answers": [{answers}]}}"#),
        );
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recommended"], "Zinsertrag");
        assert_eq!(json["capacity"], 1);
        assert_eq!(json["willingnessScore"], 6);
        assert!(json["description"].is_string());
    }

    #[tokio::test]
    async fn evaluate_endpoint_rejects_bad_option() {
        let request = post_json(
            "/api/questionnaire/evaluate",
            r#"{"answers": [0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0]}"#,
        );
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["error"]
                .as_str()
                .is_some_and(|msg| msg.contains("question 6 has no option 5"))
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let request = Request::get("/nope").body(Body::empty()).expect("valid");
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Not found");
    }
}
