//! Markdown narrative for a correlation result.

use std::fmt::Write;

use super::classify::{Classification, Direction, RelationshipType};
use super::metrics::CorrelationMetrics;
use super::outliers::OutlierReport;

/// Render the headline sentence, outlier note, metrics table and confidence line.
pub fn render(
    x_name: &str,
    y_name: &str,
    metrics: &CorrelationMetrics,
    classification: &Classification,
    outliers: &OutlierReport,
) -> String {
    if classification.kind == RelationshipType::None {
        return format!("No clear correlation found between {x_name} and {y_name}.");
    }

    let mut text = String::new();
    let dominant = classification.dominant(metrics);
    let symbol = if classification.kind.is_non_linear() { "ρ" } else { "r" };
    let strength = classification.strength.map(|s| s.as_str()).unwrap_or_default();
    let direction = classification.direction.unwrap_or(Direction::Positive);

    let _ = writeln!(
        text,
        "Found a **{strength} {} {} relationship** ({symbol} = {dominant:.2}) between {x_name} and {y_name}.",
        direction.as_str(),
        classification.kind,
    );

    let tendency = match direction {
        Direction::Positive => "higher",
        Direction::Negative => "lower",
    };
    let _ = match classification.kind {
        RelationshipType::Linear => writeln!(
            text,
            "Regions with higher {x_name} tend to have {tendency} {y_name}, at a roughly constant rate."
        ),
        RelationshipType::NonLinearMonotonic => writeln!(
            text,
            "Regions with higher {x_name} tend to have {tendency} {y_name}, but not along a straight line; \
             the rank correlation captures it better than Pearson r ({:.2}).",
            metrics.pearson
        ),
        _ => writeln!(
            text,
            "{x_name} and {y_name} share a dependency (mutual information {:.2}) that neither linear \
             nor rank correlation captures well.",
            metrics.mutual_info
        ),
    };

    if !outliers.is_empty() {
        text.push('\n');
        let count = outliers.len();
        let plural = if count == 1 { "" } else { "s" };
        let _ = match (outliers.pearson_without, outliers.delta) {
            (Some(without), Some(delta)) if outliers.influential => writeln!(
                text,
                "**Influential outliers:** excluding {count} flagged point{plural} moves Pearson r from \
                 {:.2} to {without:.2} (change {delta:.2}). Treat the headline figure with care.",
                metrics.pearson
            ),
            (Some(without), Some(_)) => writeln!(
                text,
                "{count} outlier{plural} flagged; excluding them leaves Pearson r almost unchanged ({without:.2})."
            ),
            _ => writeln!(
                text,
                "{count} outlier{plural} flagged; too few points would remain to measure their influence."
            ),
        };
    }

    text.push('\n');
    text.push_str("| Metric | Value |\n|---|---|\n");
    let _ = writeln!(text, "| Pearson r | {:.3} |", metrics.pearson);
    let _ = writeln!(text, "| Spearman ρ | {:.3} |", metrics.spearman);
    let _ = writeln!(text, "| Kendall τ | {:.3} |", metrics.kendall);
    let _ = writeln!(text, "| Mutual information | {:.3} |", metrics.mutual_info);
    let _ = writeln!(text, "| p-value | {:.4} |", metrics.p_value);
    let _ = writeln!(text, "| n | {} |", metrics.n);

    text.push('\n');
    let significance = if classification.significant {
        "statistically significant"
    } else {
        "not statistically significant"
    };
    let _ = write!(
        text,
        "Confidence: **{}** ({significance}).",
        classification.confidence.as_str()
    );

    text
}
