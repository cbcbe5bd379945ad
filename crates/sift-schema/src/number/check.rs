//! Number check registry entries.

use sift_core::{display_number, MAX_SAFE_INTEGER};

/// Whether the bounds of [`NumberRule::Between`] are part of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bound {
    #[default]
    Inclusive,
    Exclusive,
}

impl Bound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bound::Inclusive => "inclusive",
            Bound::Exclusive => "exclusive",
        }
    }
}

/// Validating number predicates. Comparisons are exact IEEE-754
/// comparisons; only [`Step`](NumberRule::Step) tolerates rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberRule {
    /// `v >= n`.
    Min(f64),
    /// `v <= n`.
    Max(f64),
    Int,
    /// Not an integer.
    Float,
    Finite,
    Positive,
    Negative,
    NonNegative,
    NonPositive,
    Equal(f64),
    NonEqual(f64),
    Greater(f64),
    GreaterEqual(f64),
    Less(f64),
    LessEqual(f64),
    /// `v % n == 0`, exact.
    MultipleOf(f64),
    /// Integer within ±(2^53 − 1).
    Safe,
    Between { min: f64, max: f64, bound: Bound },
    /// `|v − round(v / s) · s| < ε`.
    Step(f64),
}

fn is_integer(v: f64) -> bool {
    v.is_finite() && v.trunc() == v
}

/// Rounds half toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl NumberRule {
    pub fn kind(&self) -> &'static str {
        match self {
            NumberRule::Min(_) => "min",
            NumberRule::Max(_) => "max",
            NumberRule::Int => "int",
            NumberRule::Float => "float",
            NumberRule::Finite => "finite",
            NumberRule::Positive => "positive",
            NumberRule::Negative => "negative",
            NumberRule::NonNegative => "nonNegative",
            NumberRule::NonPositive => "nonPositive",
            NumberRule::Equal(_) => "equal",
            NumberRule::NonEqual(_) => "nonEqual",
            NumberRule::Greater(_) => "greater",
            NumberRule::GreaterEqual(_) => "greaterEqual",
            NumberRule::Less(_) => "less",
            NumberRule::LessEqual(_) => "lessEqual",
            NumberRule::MultipleOf(_) => "multipleOf",
            NumberRule::Safe => "safe",
            NumberRule::Between { .. } => "between",
            NumberRule::Step(_) => "step",
        }
    }

    /// Whether `v` satisfies the rule. `v` is never NaN here.
    pub fn accepts(&self, v: f64) -> bool {
        match *self {
            NumberRule::Min(n) => v >= n,
            NumberRule::Max(n) => v <= n,
            NumberRule::Int => is_integer(v),
            NumberRule::Float => !is_integer(v),
            NumberRule::Finite => v.is_finite(),
            NumberRule::Positive => v > 0.0,
            NumberRule::Negative => v < 0.0,
            NumberRule::NonNegative => v >= 0.0,
            NumberRule::NonPositive => v <= 0.0,
            NumberRule::Equal(n) => v == n,
            NumberRule::NonEqual(n) => v != n,
            NumberRule::Greater(n) => v > n,
            NumberRule::GreaterEqual(n) => v >= n,
            NumberRule::Less(n) => v < n,
            NumberRule::LessEqual(n) => v <= n,
            NumberRule::MultipleOf(n) => v % n == 0.0,
            NumberRule::Safe => is_integer(v) && v.abs() <= MAX_SAFE_INTEGER,
            NumberRule::Between { min, max, bound } => match bound {
                Bound::Inclusive => v >= min && v <= max,
                Bound::Exclusive => v > min && v < max,
            },
            NumberRule::Step(step) => {
                (v - round_half_up(v / step) * step).abs() < f64::EPSILON
            }
        }
    }

    /// Remediation hint reported when the rule fails.
    pub fn suggestion(&self) -> String {
        let n = display_number;
        match *self {
            NumberRule::Min(x) | NumberRule::Greater(x) => {
                format!("value must be greater than {}", n(x))
            }
            NumberRule::Max(x) | NumberRule::Less(x) => format!("value must be less than {}", n(x)),
            NumberRule::Int => "value must be an integer".into(),
            NumberRule::Float => "value must be a float".into(),
            NumberRule::Finite => "value must be a finite number".into(),
            NumberRule::Positive => "value must be a positive number".into(),
            NumberRule::Negative => "value must be a negative number".into(),
            NumberRule::NonNegative => "value must be a non-negative number".into(),
            NumberRule::NonPositive => "value must be a non-positive number".into(),
            NumberRule::Equal(x) => format!("value must be equal to {}", n(x)),
            NumberRule::NonEqual(x) => format!("value must not be equal to {}", n(x)),
            NumberRule::GreaterEqual(x) => {
                format!("value must be greater than or equal to {}", n(x))
            }
            NumberRule::LessEqual(x) => format!("value must be less than or equal to {}", n(x)),
            NumberRule::MultipleOf(x) | NumberRule::Step(x) => {
                format!("value must be a multiple of {}", n(x))
            }
            NumberRule::Safe => "value must be a safe integer".into(),
            NumberRule::Between { min, max, bound } => format!(
                "value must be between ({}) {} and {}",
                bound.as_str(),
                n(min),
                n(max)
            ),
        }
    }
}

/// One configured number check with the message it reports.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCheck {
    pub rule: NumberRule,
    pub message: String,
}
