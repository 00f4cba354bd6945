use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    choreo::style::StyleFrame,
    foundation::{
        error::{ScrollfxError, ScrollfxResult},
        math::{clamp, lerp, range_t},
    },
};

/// One sub-interval of progress driving one numeric range.
///
/// `sample(p) = lerp(from, to, ease(range_t(p, start, end)))`: exactly `from` at `start`,
/// exactly `to` at `end`, held outside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseRange {
    /// Progress where the phase begins.
    pub start: f64,
    /// Progress where the phase ends.
    pub end: f64,
    /// Value at and before `start`.
    pub from: f64,
    /// Value at and after `end`.
    pub to: f64,
    /// Curve applied to the normalized phase position.
    #[serde(default)]
    pub ease: Ease,
}

impl PhaseRange {
    /// Linear range.
    pub fn new(start: f64, end: f64, from: f64, to: f64) -> Self {
        Self {
            start,
            end,
            from,
            to,
            ease: Ease::Linear,
        }
    }

    /// Same range with a different ease.
    pub fn eased(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Normalized 0..1 position of `p` in this phase, after easing.
    pub fn t(&self, p: f64) -> f64 {
        self.ease.apply(range_t(p, self.start, self.end))
    }

    /// Interpolated value at progress `p`.
    pub fn sample(&self, p: f64) -> f64 {
        lerp(self.from, self.to, self.t(p))
    }

    /// Bounds must be finite with `start < end`.
    pub fn validate(&self) -> ScrollfxResult<()> {
        let finite = [self.start, self.end, self.from, self.to]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ScrollfxError::validation("phase range values must be finite"));
        }
        if self.start >= self.end {
            return Err(ScrollfxError::validation(format!(
                "phase range start ({}) must be < end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// Expression tree over phase ranges.
///
/// Most properties are a single [`PhaseRange`]; the combinators cover the shapes that show
/// up in practice (a fade-in multiplied by a later fade-out, a dimming overlay capped below
/// 1, pointer events switched on past the middle of a phase).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseExpr {
    /// Constant value.
    Const(f64),
    /// Interpolated range.
    Range(PhaseRange),
    /// Product of all factors (empty product is 1).
    Product(Vec<PhaseExpr>),
    /// `1 - inner`.
    Complement(Box<PhaseExpr>),
    /// `clamp(inner, min, max)`.
    Clamped {
        /// Expression to bound.
        inner: Box<PhaseExpr>,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// `1` when `inner > threshold`, else `0`.
    Above {
        /// Expression to test.
        inner: Box<PhaseExpr>,
        /// Strict threshold.
        threshold: f64,
    },
}

impl PhaseExpr {
    /// Shorthand for [`PhaseExpr::Range`].
    pub fn range(start: f64, end: f64, from: f64, to: f64) -> Self {
        Self::Range(PhaseRange::new(start, end, from, to))
    }

    /// Shorthand for [`PhaseExpr::Range`] with an ease.
    pub fn eased(start: f64, end: f64, from: f64, to: f64, ease: Ease) -> Self {
        Self::Range(PhaseRange::new(start, end, from, to).eased(ease))
    }

    /// Evaluate at progress `p`. Pure: no state survives between calls.
    pub fn eval(&self, p: f64) -> f64 {
        match self {
            Self::Const(v) => *v,
            Self::Range(r) => r.sample(p),
            Self::Product(factors) => factors.iter().map(|f| f.eval(p)).product(),
            Self::Complement(inner) => 1.0 - inner.eval(p),
            Self::Clamped { inner, min, max } => clamp(inner.eval(p), *min, *max),
            Self::Above { inner, threshold } => {
                if inner.eval(p) > *threshold {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Validate every nested range and bound.
    pub fn validate(&self) -> ScrollfxResult<()> {
        match self {
            Self::Const(v) => {
                if !v.is_finite() {
                    return Err(ScrollfxError::validation("phase const must be finite"));
                }
                Ok(())
            }
            Self::Range(r) => r.validate(),
            Self::Product(factors) => factors.iter().try_for_each(PhaseExpr::validate),
            Self::Complement(inner) => inner.validate(),
            Self::Clamped { inner, min, max } => {
                if !(min.is_finite() && max.is_finite()) || min > max {
                    return Err(ScrollfxError::validation(
                        "phase clamp bounds must be finite with min <= max",
                    ));
                }
                inner.validate()
            }
            Self::Above { inner, threshold } => {
                if !threshold.is_finite() {
                    return Err(ScrollfxError::validation(
                        "phase threshold must be finite",
                    ));
                }
                inner.validate()
            }
        }
    }
}

/// Binds a style property (`"<element>.<property>"`) to an expression.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseBinding {
    /// Property key, e.g. `"hero.opacity"`.
    pub property: String,
    /// Expression producing the value.
    pub expr: PhaseExpr,
}

impl PhaseBinding {
    /// Bind `property` to `expr`.
    pub fn new(property: impl Into<String>, expr: PhaseExpr) -> Self {
        Self {
            property: property.into(),
            expr,
        }
    }
}

/// Declarative table of phase bindings evaluated together every frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PhaseMapper {
    bindings: Vec<PhaseBinding>,
}

impl PhaseMapper {
    /// Validated mapper; property keys must be unique and well-formed.
    pub fn new(bindings: Vec<PhaseBinding>) -> ScrollfxResult<Self> {
        let mapper = Self { bindings };
        mapper.validate()?;
        Ok(mapper)
    }

    /// Bindings in declaration order.
    pub fn bindings(&self) -> &[PhaseBinding] {
        &self.bindings
    }

    /// Check keys and every expression.
    pub fn validate(&self) -> ScrollfxResult<()> {
        let mut seen = BTreeMap::new();
        for (i, b) in self.bindings.iter().enumerate() {
            let Some((element, prop)) = b.property.split_once('.') else {
                return Err(ScrollfxError::validation(format!(
                    "phase property '{}' must look like '<element>.<property>'",
                    b.property
                )));
            };
            if element.trim().is_empty() || prop.trim().is_empty() {
                return Err(ScrollfxError::validation(format!(
                    "phase property '{}' has an empty element or property name",
                    b.property
                )));
            }
            if let Some(prev) = seen.insert(b.property.as_str(), i) {
                return Err(ScrollfxError::validation(format!(
                    "phase property '{}' bound twice (bindings {prev} and {i})",
                    b.property
                )));
            }
            b.expr.validate()?;
        }
        Ok(())
    }

    /// Resolve every binding at progress `p`.
    pub fn evaluate(&self, p: f64) -> StyleFrame {
        let values = self
            .bindings
            .iter()
            .map(|b| (b.property.clone(), b.expr.eval(p)))
            .collect();
        StyleFrame::new(p, values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/phase.rs"]
mod tests;
