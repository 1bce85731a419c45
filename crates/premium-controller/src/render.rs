//! Plain-text rendering of an estimate for the terminal.

use std::fmt::Write;

use premium_protocol::explanation_for;
use premium_state::{Direction, Estimate};

const BAR_WIDTH: usize = 30;

/// Render the estimate, breakdown and contribution bars. With
/// `show_details`, each feature's explanation follows its bar.
pub fn render_estimate(estimate: &Estimate, show_details: bool) -> String {
    let mut out = String::new();
    let b = &estimate.breakdown;

    let _ = writeln!(out, "Estimated annual premium: ${:.2}", b.annual);
    let _ = writeln!(out, "  Monthly:   ${:.0}", b.monthly);
    let _ = writeln!(out, "  Quarterly: ${:.0}", b.quarterly);
    let _ = writeln!(out);
    let _ = writeln!(out, "Feature impact:");

    let name_width = estimate
        .normalized
        .iter()
        .map(|c| c.feature.len())
        .max()
        .unwrap_or(0);

    for c in &estimate.normalized {
        let sign = if c.direction == Direction::Increases {
            "+"
        } else if c.raw_value < 0.0 {
            "-"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<width$}  {}  {:>6.2}%  {}${:.0} ({})",
            c.feature,
            bar(c.percent),
            c.percent,
            sign,
            c.raw_value.abs(),
            c.direction,
            width = name_width,
        );
        if show_details {
            let _ = writeln!(out, "  {:<width$}  {}", "", explanation_for(&c.feature), width = name_width);
        }
    }

    out
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }
}
