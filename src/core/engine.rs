use super::catalog::{
    CRISIS_CYCLE, CRISIS_DIGITAL_RETURN, CRISIS_EQUITY_RETURN, CRISIS_WORST_HAIRCUT,
    DIGITAL_ASSETS, EQUITY_PLUS, FIXED_INCOME,
};
use super::types::{ContributionCadence, Forecast, ForecastInputs, ForecastPoint, Weights};

#[derive(Debug, Clone, Copy, PartialEq)]
struct YearReturns {
    expected: f64,
    worst: f64,
    best: f64,
}

#[derive(Debug, Clone, Copy)]
struct Totals {
    expected: f64,
    worst: f64,
    best: f64,
}

impl Totals {
    fn starting_at(capital: f64) -> Self {
        Self {
            expected: capital,
            worst: capital,
            best: capital,
        }
    }

    fn grow(self, returns: YearReturns, contribution: f64) -> Self {
        Self {
            expected: self.expected * (1.0 + returns.expected) + contribution,
            worst: self.worst * (1.0 + returns.worst) + contribution,
            best: self.best * (1.0 + returns.best) + contribution,
        }
    }
}

pub fn annual_contribution(amount: f64, cadence: ContributionCadence) -> f64 {
    match cadence {
        ContributionCadence::Monthly => amount * 12.0,
        ContributionCadence::Yearly => amount,
    }
}

// Year 0 keeps the unrounded starting capital.
pub fn run_forecast(inputs: &ForecastInputs) -> Forecast {
    let start = ForecastPoint {
        year: 0,
        value: inputs.starting_capital,
    };
    let seed = (
        Totals::starting_at(inputs.starting_capital),
        Forecast {
            expected: vec![start],
            worst: vec![start],
            best: vec![start],
        },
    );

    let (_, forecast) = (1..=inputs.horizon).fold(seed, |(totals, mut forecast), year| {
        let returns = year_returns(year, inputs.weights, inputs.crisis_mode);
        let totals = totals.grow(returns, inputs.annual_contribution);
        forecast.expected.push(point(year, totals.expected));
        forecast.worst.push(point(year, totals.worst));
        forecast.best.push(point(year, totals.best));
        (totals, forecast)
    });
    forecast
}

fn point(year: i32, value: f64) -> ForecastPoint {
    ForecastPoint {
        year,
        value: round_half_up(value),
    }
}

fn is_crisis_year(year: i32, crisis_mode: bool) -> bool {
    crisis_mode && year % CRISIS_CYCLE == 0
}

fn year_returns(year: i32, weights: Weights, crisis_mode: bool) -> YearReturns {
    let crisis = is_crisis_year(year, crisis_mode);

    let fixed_part = weights.fixed * FIXED_INCOME.base_return;
    let (equity_return, digital_return) = if crisis {
        (CRISIS_EQUITY_RETURN, CRISIS_DIGITAL_RETURN)
    } else {
        (EQUITY_PLUS.base_return, DIGITAL_ASSETS.base_return)
    };
    let risk_part = weights.equity * equity_return + weights.digital * digital_return;
    // Spread always uses the calm volatilities, even in a crisis year.
    let risk_volatility = weights.equity * EQUITY_PLUS.base_volatility
        + weights.digital * DIGITAL_ASSETS.base_volatility;

    let expected = fixed_part + risk_part;
    if crisis {
        YearReturns {
            expected,
            worst: fixed_part + (risk_part - CRISIS_WORST_HAIRCUT),
            best: expected.max(0.0),
        }
    } else {
        YearReturns {
            expected,
            worst: fixed_part + (risk_part - risk_volatility),
            best: fixed_part + risk_part + risk_volatility,
        }
    }
}

pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
