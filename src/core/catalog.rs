use super::types::{AssetClass, AssetClassParams, Strategy, StrategyName, StrategyParams};

pub const FIXED_INCOME: AssetClassParams = AssetClassParams {
    base_return: 0.044,
    base_volatility: 0.035,
};

pub const EQUITY_PLUS: AssetClassParams = AssetClassParams {
    base_return: 0.087,
    base_volatility: 0.1,
};

pub const DIGITAL_ASSETS: AssetClassParams = AssetClassParams {
    base_return: 0.3,
    base_volatility: 0.5,
};

pub const CRISIS_CYCLE: i32 = 10;
pub const CRISIS_EQUITY_RETURN: f64 = -0.4;
pub const CRISIS_DIGITAL_RETURN: f64 = -0.6;
pub const CRISIS_WORST_HAIRCUT: f64 = 0.2;
pub const CRISIS_RETURN_FACTOR: f64 = 0.5;
pub const CRISIS_VOLATILITY_FACTOR: f64 = 2.0;

// Upper bound of the horizon input; the engine itself takes any value.
pub const MAX_HORIZON: i32 = 60;

pub const RISK_COEFFICIENTS: [f64; 3] = [2.0, 5.0, 6.0];

pub fn asset_class_params(class: AssetClass) -> AssetClassParams {
    match class {
        AssetClass::FixedIncome => FIXED_INCOME,
        AssetClass::EquityPlus => EQUITY_PLUS,
        AssetClass::DigitalAssets => DIGITAL_ASSETS,
    }
}

const STRATEGIES: [Strategy; 6] = [
    Strategy {
        name: StrategyName::Zinsertrag,
        baskets: [100, 0, 0],
        params: StrategyParams::Fixed {
            expected_return: 0.02,
            volatility: 0.01,
        },
        description: Some(
            "Zinsertrag: Sehr defensiv, 100% Fixed Income – ideal für risikoscheue Anleger mit Fokus auf stabile Zinsen.",
        ),
    },
    Strategy {
        name: StrategyName::Conservative,
        baskets: [70, 30, 0],
        params: StrategyParams::Fixed {
            expected_return: 0.04,
            volatility: 0.03,
        },
        description: Some(
            "Konservativ: Kapitalerhalt steht im Vordergrund, geringes Risiko, moderate Rendite.",
        ),
    },
    Strategy {
        name: StrategyName::Balanced,
        baskets: [50, 40, 10],
        params: StrategyParams::Fixed {
            expected_return: 0.06,
            volatility: 0.05,
        },
        description: Some(
            "Ausgewogen: Gute Balance aus Sicherheit und Wachstum, für Anleger mit mittlerem Risikoappetit.",
        ),
    },
    Strategy {
        name: StrategyName::Growth,
        baskets: [20, 70, 10],
        params: StrategyParams::Fixed {
            expected_return: 0.08,
            volatility: 0.08,
        },
        description: Some(
            "Wachstum: Stärkere Aktiengewichtung für mehr Renditechancen, aber auch mehr Schwankung.",
        ),
    },
    Strategy {
        name: StrategyName::Aggressive,
        baskets: [0, 70, 30],
        params: StrategyParams::Fixed {
            expected_return: 0.12,
            volatility: 0.12,
        },
        description: Some(
            "Aggressiv: Für renditeorientierte Anleger mit hoher Risikobereitschaft.",
        ),
    },
    Strategy {
        name: StrategyName::Custom,
        baskets: [50, 40, 10],
        params: StrategyParams::Weighted,
        description: None,
    },
];

pub fn strategies() -> &'static [Strategy] {
    &STRATEGIES
}

pub fn strategy(name: StrategyName) -> &'static Strategy {
    match name {
        StrategyName::Zinsertrag => &STRATEGIES[0],
        StrategyName::Conservative => &STRATEGIES[1],
        StrategyName::Balanced => &STRATEGIES[2],
        StrategyName::Growth => &STRATEGIES[3],
        StrategyName::Aggressive => &STRATEGIES[4],
        StrategyName::Custom => &STRATEGIES[5],
    }
}
