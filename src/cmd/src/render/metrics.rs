use std::io::Write;

use common::format::format_signed;
use common::format::format_signed_usd;
use common::format::format_whole_usd;
use common::format::group_thousands;
use uplift_gen::totals::MetricGroup;
use uplift_gen::totals::MetricValue;

use crate::error::Result;
use crate::render::Paint;

/// `(value, delta)` as shown on a card.
pub fn format_metric(m: &MetricValue) -> (String, Option<String>) {
    let (plain, signed): (fn(i64) -> String, fn(i64) -> String) = match m.metric.group() {
        MetricGroup::Flows => (group_thousands, format_signed),
        MetricGroup::Revenue => (format_whole_usd, format_signed_usd),
    };

    let value = if m.metric.is_signed() {
        signed(m.value)
    } else {
        plain(m.value)
    };

    (value, m.delta.map(signed))
}

/// Draws one row of side-by-side metric cards.
pub fn render_metrics<W: Write>(w: &mut W, metrics: &[MetricValue], paint: Paint) -> Result<()> {
    let cards = metrics
        .iter()
        .map(|m| {
            let (value, delta) = format_metric(m);
            (m.metric.to_string(), value, delta, m.delta.unwrap_or(0) < 0)
        })
        .collect::<Vec<_>>();
    let width = cards
        .iter()
        .map(|(label, value, delta, _)| {
            label
                .chars()
                .count()
                .max(value.chars().count())
                .max(delta.as_ref().map(|d| d.chars().count() + 2).unwrap_or(0))
        })
        .max()
        .unwrap_or(0);

    let border = vec![format!("+{}+", "-".repeat(width + 2)); cards.len()].join(" ");
    let line = |cells: Vec<String>| -> String {
        cells
            .into_iter()
            .map(|c| format!("| {c} |"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    writeln!(w, "{border}")?;
    writeln!(
        w,
        "{}",
        line(cards.iter().map(|(l, ..)| format!("{l:<width$}")).collect())
    )?;
    writeln!(
        w,
        "{}",
        line(
            cards
                .iter()
                .map(|(_, v, ..)| paint.bold(&format!("{v:<width$}")))
                .collect()
        )
    )?;
    writeln!(
        w,
        "{}",
        line(
            cards
                .iter()
                .map(|(_, _, delta, negative)| match delta {
                    Some(d) => {
                        let arrow = if *negative { '↓' } else { '↑' };
                        paint.delta(&format!("{:<width$}", format!("{arrow} {d}")), *negative)
                    }
                    None => " ".repeat(width),
                })
                .collect()
        )
    )?;
    writeln!(w, "{border}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use uplift_gen::totals::Metric;
    use uplift_gen::SeriesTotals;

    use super::*;

    fn totals() -> SeriesTotals {
        SeriesTotals {
            total_flows_baseline: 27000,
            total_flows_uplifted: 37800,
            total_revenue_baseline: 45000,
            total_revenue_uplifted: 54900,
            additional_flows: 10800,
            additional_revenue: 9900,
        }
    }

    #[test]
    fn test_format_metric() {
        let t = totals();
        assert_eq!(
            format_metric(&t.metric(Metric::FlowsWithoutSonar)),
            ("27,000".to_string(), None)
        );
        assert_eq!(
            format_metric(&t.metric(Metric::FlowsWithSonar)),
            ("37,800".to_string(), Some("+10,800".to_string()))
        );
        assert_eq!(
            format_metric(&t.metric(Metric::AdditionalFlows)),
            ("+10,800".to_string(), None)
        );
        assert_eq!(
            format_metric(&t.metric(Metric::RevenueWithoutSonar)),
            ("$45,000".to_string(), None)
        );
        assert_eq!(
            format_metric(&t.metric(Metric::RevenueWithSonar)),
            ("$54,900".to_string(), Some("+$9,900".to_string()))
        );
        assert_eq!(
            format_metric(&t.metric(Metric::AdditionalRevenue)),
            ("+$9,900".to_string(), None)
        );
    }

    #[test]
    fn test_render_row() -> Result<()> {
        let metrics = totals().metrics();
        let mut out = Vec::new();
        render_metrics(&mut out, &metrics[..3], Paint::Plain)?;
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Total Flows Triggered (Without Sonar)"));
        assert!(lines[1].contains("Additional Flows Triggered"));
        assert!(lines[2].contains("37,800"));
        assert!(lines[3].contains("↑ +10,800"));
        assert_eq!(lines[0], lines[4]);

        Ok(())
    }
}
