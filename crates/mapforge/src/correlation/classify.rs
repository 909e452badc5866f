//! Relationship-shape decision tree and confidence heuristic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::CorrelationConfig;
use super::metrics::CorrelationMetrics;

/// Shape of the detected relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "non-linear monotonic")]
    NonLinearMonotonic,
    #[serde(rename = "non-linear complex")]
    NonLinearComplex,
    #[serde(rename = "none")]
    None,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Linear => "linear",
            RelationshipType::NonLinearMonotonic => "non-linear monotonic",
            RelationshipType::NonLinearComplex => "non-linear complex",
            RelationshipType::None => "none",
        }
    }

    pub fn is_non_linear(&self) -> bool {
        matches!(
            self,
            RelationshipType::NonLinearMonotonic | RelationshipType::NonLinearComplex
        )
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Magnitude bucket of the dominant metric. Ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Moderate,
    #[serde(rename = "Moderate-Strong")]
    ModerateStrong,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::ModerateStrong => "Moderate-Strong",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    fn of(value: f64) -> Self {
        if value < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
        }
    }
}

/// Presentation-level trust in the headline reading. Ordered lowest first.
///
/// This is a display heuristic over sample size, p-value, strength and
/// outlier influence. It is not a statistical guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// One level lower, saturating at `Low`.
    pub fn downgrade(self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Outcome of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    /// Absent when no relationship was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub significant: bool,
    pub confidence: Confidence,
}

impl Classification {
    /// The metric that drives strength and direction for this shape.
    pub fn dominant(&self, metrics: &CorrelationMetrics) -> f64 {
        if self.kind.is_non_linear() {
            metrics.spearman
        } else {
            metrics.pearson
        }
    }
}

/// Run the decision tree over `metrics`.
///
/// Branches are tested in order: no relationship, monotonic non-linear,
/// complex non-linear, linear.
pub fn classify(metrics: &CorrelationMetrics, influential: bool, config: &CorrelationConfig) -> Classification {
    let pearson = metrics.pearson.abs();
    let spearman = metrics.spearman.abs();
    let significant = metrics.p_value <= config.significance;

    let kind = if pearson < config.none_pearson
        && spearman < config.none_spearman
        && metrics.mutual_info < config.none_mutual_info
    {
        RelationshipType::None
    } else if spearman - pearson > config.nonlinear_gap {
        RelationshipType::NonLinearMonotonic
    } else if metrics.mutual_info > config.complex_mutual_info && pearson < config.complex_pearson {
        RelationshipType::NonLinearComplex
    } else {
        RelationshipType::Linear
    };

    if kind == RelationshipType::None {
        return Classification {
            kind,
            strength: None,
            direction: None,
            significant,
            confidence: confidence(metrics, None, influential, config),
        };
    }

    let dominant = if kind.is_non_linear() {
        metrics.spearman
    } else {
        metrics.pearson
    };
    let strength = strength(dominant.abs(), config);

    Classification {
        kind,
        strength: Some(strength),
        direction: Some(Direction::of(dominant)),
        significant,
        confidence: confidence(metrics, Some(strength), influential, config),
    }
}

fn strength(magnitude: f64, config: &CorrelationConfig) -> Strength {
    if magnitude > config.strong {
        Strength::Strong
    } else if magnitude > config.moderate_strong {
        Strength::ModerateStrong
    } else if magnitude > config.moderate {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

fn confidence(
    metrics: &CorrelationMetrics,
    strength: Option<Strength>,
    influential: bool,
    config: &CorrelationConfig,
) -> Confidence {
    let base = if metrics.n < config.low_confidence_n || metrics.p_value > config.significance {
        Confidence::Low
    } else if metrics.n < config.medium_confidence_n
        || strength.is_none_or(|s| s <= Strength::Moderate)
    {
        Confidence::Medium
    } else {
        Confidence::High
    };

    if influential { base.downgrade() } else { base }
}
