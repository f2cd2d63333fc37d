use crate::profile::Classification;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One step of the individual schedule: an inclusive upper bound on net
/// income and the flat rate applied to the entire amount. `upper: None` is
/// the open top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

/// Individual annual income exemption threshold
pub fn exempt_threshold() -> Decimal {
    dec!(800000)
}

/// Simplified flat rate for small businesses
pub fn business_rate() -> Decimal {
    dec!(0.21)
}

/// Individual step bands (Nigerian 2024 reform, simplified), ascending
pub fn individual_bands() -> Vec<Band> {
    vec![
        Band {
            upper: Some(dec!(800000)),
            rate: Decimal::ZERO,
        },
        Band {
            upper: Some(dec!(3200000)),
            rate: dec!(0.07),
        },
        Band {
            upper: Some(dec!(5000000)),
            rate: dec!(0.11),
        },
        Band {
            upper: Some(dec!(16000000)),
            rate: dec!(0.15),
        },
        Band {
            upper: Some(dec!(32000000)),
            rate: dec!(0.19),
        },
        Band {
            upper: None,
            rate: dec!(0.21),
        },
    ]
}

/// Rate applied to the entire net income for the given classification.
///
/// The individual schedule is a step schedule, not a marginal one: bounds are
/// checked in ascending order, each bound is inclusive, and the first match
/// selects a single rate for the whole amount. Net income of exactly 800,000
/// is exempt; 800,000.01 pays 7% on all of it.
pub fn rate_for(net_income: Decimal, classification: Classification) -> Decimal {
    match classification {
        Classification::Business => business_rate(),
        Classification::Individual => {
            if net_income <= dec!(800000) {
                Decimal::ZERO
            } else if net_income <= dec!(3200000) {
                dec!(0.07)
            } else if net_income <= dec!(5000000) {
                dec!(0.11)
            } else if net_income <= dec!(16000000) {
                dec!(0.15)
            } else if net_income <= dec!(32000000) {
                dec!(0.19)
            } else {
                dec!(0.21)
            }
        }
    }
}
