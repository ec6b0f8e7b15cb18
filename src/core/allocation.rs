use super::catalog::{
    CRISIS_RETURN_FACTOR, CRISIS_VOLATILITY_FACTOR, RISK_COEFFICIENTS, asset_class_params,
    strategy,
};
use super::engine::round_half_up;
use super::types::{
    Allocation, AssetClass, Baskets, SliceShare, StrategyName, StrategyParams, Weights,
};

pub fn resolve(name: StrategyName, custom_split: Baskets, crisis_mode: bool) -> Allocation {
    let entry = strategy(name);
    let (baskets, mut r, mut v) = match entry.params {
        StrategyParams::Fixed {
            expected_return,
            volatility,
        } => (entry.baskets, expected_return, volatility),
        StrategyParams::Weighted => {
            let weights = Weights::from_baskets(custom_split);
            let (r, v) = weighted_rates(weights);
            (custom_split, r, v)
        }
    };

    if crisis_mode {
        r *= CRISIS_RETURN_FACTOR;
        v *= CRISIS_VOLATILITY_FACTOR;
    }

    Allocation {
        baskets,
        expected_return: r,
        volatility: v,
        risk_score: risk_score(baskets),
    }
}

fn weighted_rates(weights: Weights) -> (f64, f64) {
    let shares = [weights.fixed, weights.equity, weights.digital];
    AssetClass::ALL
        .iter()
        .zip(shares)
        .fold((0.0, 0.0), |(r, v), (class, weight)| {
            let params = asset_class_params(*class);
            (
                r + weight * params.base_return,
                v + weight * params.base_volatility,
            )
        })
}

pub fn risk_score(baskets: Baskets) -> f64 {
    baskets
        .iter()
        .zip(RISK_COEFFICIENTS)
        .map(|(pct, coefficient)| *pct as f64 * coefficient)
        .sum::<f64>()
        / 100.0
}

pub fn set_custom_share(split: Baskets, class: AssetClass, value: i32) -> Baskets {
    let target = class.index();
    let others: Vec<usize> = (0..3).filter(|idx| *idx != target).collect();
    // f64 keeps out-of-range inputs from overflowing; `as i32` saturates.
    let remaining = 100.0 - value as f64;
    let others_total = split[others[0]] as f64 + split[others[1]] as f64;

    let mut next = split;
    next[target] = value;
    if others_total > 0.0 {
        for idx in others {
            let share = split[idx] as f64 / others_total * remaining;
            next[idx] = round_half_up(share) as i32;
        }
    } else {
        // both others empty: the first takes the whole remainder
        next[others[0]] = remaining as i32;
        next[others[1]] = 0;
    }
    next
}

pub fn split_total(split: Baskets) -> i64 {
    split.iter().map(|pct| i64::from(*pct)).sum()
}

pub fn split_is_complete(split: Baskets) -> bool {
    split_total(split) == 100
}

pub fn basket_shares(baskets: Baskets) -> Vec<SliceShare> {
    AssetClass::ALL
        .iter()
        .map(|class| SliceShare {
            label: class.label(),
            value: baskets[class.index()] as f64,
        })
        .collect()
}

pub fn currency_shares(baskets: Baskets) -> Vec<SliceShare> {
    let [fixed, equity, digital] = baskets.map(|pct| pct as f64);
    vec![
        SliceShare {
            label: "CHF",
            value: fixed,
        },
        SliceShare {
            label: "USD",
            value: equity * 0.7,
        },
        SliceShare {
            label: "Digital",
            value: equity * 0.3 + digital,
        },
    ]
}

// Cash is a fixed 2 on top of the basket-derived slices.
pub fn detailed_shares(baskets: Baskets) -> Vec<SliceShare> {
    const BREAKDOWN: [(&str, usize, f64); 8] = [
        ("GrundpfandbesicherteDarlehen", 0, 0.79),
        ("AlternativeDarlehen", 0, 0.21),
        ("Aktien", 1, 0.72),
        ("Anleihen", 1, 0.07),
        ("Gold", 1, 0.11),
        ("HedgeFonds", 1, 0.1),
        ("Bitcoin", 2, 0.65),
        ("Altcoins", 2, 0.35),
    ];

    let mut shares = Vec::with_capacity(BREAKDOWN.len() + 1);
    shares.push(SliceShare {
        label: "Cash",
        value: 2.0,
    });
    shares.extend(BREAKDOWN.iter().map(|(label, basket, factor)| SliceShare {
        label: *label,
        value: baskets[*basket] as f64 * factor,
    }));
    shares
}
