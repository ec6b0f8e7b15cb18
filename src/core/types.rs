use serde::Serialize;

// Nothing forces the three to sum to 100.
pub type Baskets = [i32; 3];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    FixedIncome,
    EquityPlus,
    DigitalAssets,
}

impl AssetClass {
    pub const ALL: [AssetClass; 3] = [
        AssetClass::FixedIncome,
        AssetClass::EquityPlus,
        AssetClass::DigitalAssets,
    ];

    pub fn index(self) -> usize {
        match self {
            AssetClass::FixedIncome => 0,
            AssetClass::EquityPlus => 1,
            AssetClass::DigitalAssets => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::EquityPlus => "Equity+",
            AssetClass::DigitalAssets => "Digital Assets",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassParams {
    pub base_return: f64,
    pub base_volatility: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum StrategyName {
    Zinsertrag,
    Conservative,
    Balanced,
    Growth,
    Aggressive,
    #[serde(rename = "Individuelle Strategie")]
    Custom,
}

impl StrategyName {
    pub const ALL: [StrategyName; 6] = [
        StrategyName::Zinsertrag,
        StrategyName::Conservative,
        StrategyName::Balanced,
        StrategyName::Growth,
        StrategyName::Aggressive,
        StrategyName::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyName::Zinsertrag => "Zinsertrag",
            StrategyName::Conservative => "Conservative",
            StrategyName::Balanced => "Balanced",
            StrategyName::Growth => "Growth",
            StrategyName::Aggressive => "Aggressive",
            StrategyName::Custom => "Individuelle Strategie",
        }
    }
}

impl std::fmt::Display for StrategyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrategyParams {
    Fixed {
        expected_return: f64,
        volatility: f64,
    },
    Weighted,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Strategy {
    pub name: StrategyName,
    pub baskets: Baskets,
    pub params: StrategyParams,
    pub description: Option<&'static str>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionCadence {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub baskets: Baskets,
    pub expected_return: f64,
    pub volatility: f64,
    pub risk_score: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub fixed: f64,
    pub equity: f64,
    pub digital: f64,
}

impl Weights {
    pub fn from_baskets(baskets: Baskets) -> Self {
        Self {
            fixed: baskets[0] as f64 / 100.0,
            equity: baskets[1] as f64 / 100.0,
            digital: baskets[2] as f64 / 100.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForecastInputs {
    pub starting_capital: f64,
    pub horizon: i32,
    pub annual_contribution: f64,
    pub weights: Weights,
    pub crisis_mode: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub expected: Vec<ForecastPoint>,
    pub worst: Vec<ForecastPoint>,
    pub best: Vec<ForecastPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceShare {
    pub label: &'static str,
    pub value: f64,
}
