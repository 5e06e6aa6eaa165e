//! Arithmetic folds over container values

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use typed_arrays_core::{CalcPolicy, Error, Number, Result, Value};

use super::Container;
use crate::policy::Operation;

/// Arithmetic operator accepted by [`Container::calc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `/`
    Div,
    /// `*`
    Mul,
    /// `**`
    Pow,
}

impl Operator {
    /// Operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
            Operator::Mul => "*",
            Operator::Pow => "**",
        }
    }

    /// Apply the operator.
    ///
    /// Integer results stay integers while they fit; overflow, inexact
    /// division and negative exponents promote to float. Division by zero
    /// yields the IEEE result (`inf`, `-inf` or `NaN`).
    pub fn apply(self, a: Number, b: Number) -> Number {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => self.apply_int(x, y),
            _ => Number::Float(self.apply_float(a.to_f64(), b.to_f64())),
        }
    }

    fn apply_int(self, x: i64, y: i64) -> Number {
        let exact = match self {
            Operator::Add => x.checked_add(y),
            Operator::Sub => x.checked_sub(y),
            Operator::Mul => x.checked_mul(y),
            Operator::Div => match x.checked_rem(y) {
                Some(0) => x.checked_div(y),
                _ => None,
            },
            Operator::Pow => u32::try_from(y).ok().and_then(|e| x.checked_pow(e)),
        };
        match exact {
            Some(n) => Number::Int(n),
            None => Number::Float(self.apply_float(x as f64, y as f64)),
        }
    }

    fn apply_float(self, x: f64, y: f64) -> f64 {
        match self {
            Operator::Add => x + y,
            Operator::Sub => x - y,
            Operator::Div => x / y,
            Operator::Mul => x * y,
            Operator::Pow => x.powf(y),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "/" => Ok(Operator::Div),
            "*" => Ok(Operator::Mul),
            "**" => Ok(Operator::Pow),
            other => Err(Error::operation(format!("Unknown operator {} given", other))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a fold: the folded value (none when nothing was eligible)
/// and how many values took part
#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult {
    /// Folded value
    pub value: Option<Value>,
    /// Number of folded values
    pub count: usize,
}

impl CalcResult {
    /// `value / count`, none when nothing was folded
    pub fn average(&self) -> Option<f64> {
        let total = self.value.as_ref()?.as_number()?.to_f64();
        Some(total / self.count as f64)
    }
}

/// Numeric addition of two values; non-numeric operands count as zero
pub(crate) fn add_values(a: &Value, b: &Value) -> Value {
    let zero = Number::Int(0);
    let a = a.as_number().unwrap_or(zero);
    let b = b.as_number().unwrap_or(zero);
    Operator::Add.apply(a, b).into()
}

// =============================================================================
// Folds
// =============================================================================

impl Container {
    /// Fold values left to right with `op` (`+ - / * **`).
    ///
    /// The first eligible value seeds the fold. With `numerics_only` every
    /// non-numeric value is filtered out first; otherwise the container's
    /// [`CalcPolicy`] decides between skipping it and failing.
    pub fn calc(&self, op: &str, numerics_only: bool) -> Result<CalcResult> {
        self.gate(Operation::Calc)?;
        let op: Operator = op.parse()?;
        self.fold(op, numerics_only)
    }

    /// Average of [`calc`](Self::calc): folded value divided by the number
    /// of folded values
    pub fn calc_avg(&self, op: &str, numerics_only: bool) -> Result<Option<f64>> {
        self.gate(Operation::CalcAvg)?;
        let op: Operator = op.parse()?;
        Ok(self.fold(op, numerics_only)?.average())
    }

    /// Sum of values
    pub fn sum(&self, numerics_only: bool) -> Result<CalcResult> {
        self.gate(Operation::Sum)?;
        self.fold(Operator::Add, numerics_only)
    }

    /// Arithmetic mean of values
    pub fn sum_avg(&self, numerics_only: bool) -> Result<Option<f64>> {
        self.gate(Operation::SumAvg)?;
        Ok(self.fold(Operator::Add, numerics_only)?.average())
    }

    fn fold(&self, op: Operator, numerics_only: bool) -> Result<CalcResult> {
        let strict = !numerics_only && self.options.calc_policy == CalcPolicy::Strict;
        let mut acc: Option<Number> = None;
        let mut count = 0;
        for (offset, value) in self.store.values().enumerate() {
            let n = match value.as_number() {
                Some(n) => n,
                None if strict => {
                    debug!(
                        target: "typed_arrays::container",
                        container = self.name(),
                        operator = op.as_str(),
                        offset,
                        "Non-numeric value in strict fold"
                    );
                    return Err(Error::operation(format!(
                        "Non-numeric value {} given (offset: {})",
                        value.export(),
                        offset
                    )));
                }
                None => continue,
            };
            acc = Some(match acc {
                Some(a) => op.apply(a, n),
                None => n,
            });
            count += 1;
        }
        Ok(CalcResult {
            value: acc.map(Value::from),
            count,
        })
    }
}
