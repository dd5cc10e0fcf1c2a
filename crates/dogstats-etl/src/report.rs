//! Text rendering of aggregate results
//!
//! Consumers of the aggregate queries: a plain line-per-row report and a
//! text bar chart of the lifespan extremes (the 30 shortest-lived and 30
//! longest-lived breeds, taken from the midpoint values sorted ascending).

use crate::model::{BreedAvgLifespan, OwnerDogCount};

/// How many breeds each end of the extremes chart shows
pub const EXTREMES_PER_END: usize = 30;

/// Render ownership counts, one line per owner
pub fn render_ownership(rows: &[OwnerDogCount]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{} {} owns {} dog(s).",
                row.first_name, row.last_name, row.dog_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render average lifespans, one line per breed
pub fn render_average_lifespans(rows: &[BreedAvgLifespan]) -> String {
    rows.iter()
        .map(|row| format!("{}: {:.1} years", row.breed_name, row.avg_lifespan))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The two ends of the lifespan distribution, each ascending by midpoint
#[derive(Debug, Clone, Default)]
pub struct LifespanExtremes {
    pub lowest: Vec<BreedAvgLifespan>,
    pub highest: Vec<BreedAvgLifespan>,
}

/// Partition average-lifespan rows into the [`EXTREMES_PER_END`] lowest and
/// highest values.
///
/// Rows are sorted ascending by midpoint first; with fewer than twice
/// [`EXTREMES_PER_END`] rows, the highest partition draws only from rows
/// not already claimed by the lowest, so no breed appears twice.
pub fn lifespan_extremes(rows: &[BreedAvgLifespan]) -> LifespanExtremes {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.avg_lifespan.total_cmp(&b.avg_lifespan));

    let low_len = sorted.len().min(EXTREMES_PER_END);
    let rest = &sorted[low_len..];
    let high_len = rest.len().min(EXTREMES_PER_END);

    LifespanExtremes {
        lowest: sorted[..low_len].to_vec(),
        highest: rest[rest.len() - high_len..].to_vec(),
    }
}

/// Render the extremes as a horizontal text bar chart
pub fn render_extremes(extremes: &LifespanExtremes) -> String {
    let mut out = String::new();

    out.push_str("Shortest-lived breeds:\n");
    for row in &extremes.lowest {
        out.push_str(&bar_line(row));
    }

    out.push_str("\nLongest-lived breeds:\n");
    for row in &extremes.highest {
        out.push_str(&bar_line(row));
    }

    out
}

fn bar_line(row: &BreedAvgLifespan) -> String {
    let bar = "#".repeat(row.avg_lifespan.round().max(0.0) as usize);
    format!("{:<28} {} {:.1}\n", row.breed_name, bar, row.avg_lifespan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, avg: f64) -> BreedAvgLifespan {
        BreedAvgLifespan {
            breed_name: name.to_string(),
            avg_lifespan: avg,
        }
    }

    #[test]
    fn test_render_ownership_one_line_per_owner() {
        let rows = vec![
            OwnerDogCount {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                dog_count: 2,
            },
            OwnerDogCount {
                first_name: "Bob".to_string(),
                last_name: "Johnson".to_string(),
                dog_count: 0,
            },
        ];

        let text = render_ownership(&rows);
        assert_eq!(
            text,
            "Alice Smith owns 2 dog(s).\nBob Johnson owns 0 dog(s)."
        );
    }

    #[test]
    fn test_render_average_lifespans_formats_one_decimal() {
        let text = render_average_lifespans(&[row("Bulldog", 9.0), row("Beagle", 13.5)]);
        assert_eq!(text, "Bulldog: 9.0 years\nBeagle: 13.5 years");
    }

    #[test]
    fn test_extremes_sorted_ascending_and_capped() {
        let rows: Vec<_> = (0..80).map(|i| row(&format!("B{i}"), i as f64)).collect();

        let extremes = lifespan_extremes(&rows);
        assert_eq!(extremes.lowest.len(), EXTREMES_PER_END);
        assert_eq!(extremes.highest.len(), EXTREMES_PER_END);

        assert_eq!(extremes.lowest[0].avg_lifespan, 0.0);
        assert_eq!(extremes.lowest[29].avg_lifespan, 29.0);
        assert_eq!(extremes.highest[0].avg_lifespan, 50.0);
        assert_eq!(extremes.highest[29].avg_lifespan, 79.0);

        for pair in extremes.lowest.windows(2) {
            assert!(pair[0].avg_lifespan <= pair[1].avg_lifespan);
        }
        for pair in extremes.highest.windows(2) {
            assert!(pair[0].avg_lifespan <= pair[1].avg_lifespan);
        }
    }

    #[test]
    fn test_extremes_short_input_has_no_overlap() {
        let rows: Vec<_> = (0..40).map(|i| row(&format!("B{i}"), i as f64)).collect();

        let extremes = lifespan_extremes(&rows);
        assert_eq!(extremes.lowest.len(), 30);
        assert_eq!(extremes.highest.len(), 10);

        let max_low = extremes.lowest.last().unwrap().avg_lifespan;
        let min_high = extremes.highest.first().unwrap().avg_lifespan;
        assert!(min_high > max_low);
    }

    #[test]
    fn test_extremes_empty_input() {
        let extremes = lifespan_extremes(&[]);
        assert!(extremes.lowest.is_empty());
        assert!(extremes.highest.is_empty());
    }
}
