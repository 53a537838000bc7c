//! Terminal visualization for statistics.
//!
//! ASCII bars and sparklines used by the weekly progress view.

/// Characters for sparkline rendering, lowest to highest.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - Vec of (label, value) pairs
/// * `max_value` - Value that fills the whole bar (0 auto-scales to the max)
/// * `bar_width` - Width of the bar portion
///
/// # Returns
///
/// A multi-line string with the chart.
#[must_use]
pub fn render_bar_chart(data: &[(String, usize)], max_value: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let scale = if max_value > 0 {
        max_value
    } else {
        data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1)
    };

    let label_width = data.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut lines = Vec::new();

    for (label, value) in data {
        let bar_length =
            ((*value as f64 / scale as f64) * bar_width as f64).round() as usize;
        let bar_length = bar_length.min(bar_width);
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!(
            "{label:label_width$} |{bar}{padding} {value}"
        ));
    }

    lines.join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = *values.iter().max().unwrap_or(&1);
    let max_value = max_value.max(1);

    values
        .iter()
        .map(|&v| {
            let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[normalized.min(7)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_empty() {
        assert_eq!(render_bar_chart(&[], 0, 10), "");
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        let data = vec![("Mon".to_string(), 2), ("Tue".to_string(), 1)];
        let chart = render_bar_chart(&data, 2, 4);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("████"));
        assert!(lines[0].ends_with('2'));
        assert!(lines[1].contains("██"));
        assert!(lines[1].ends_with('1'));
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(render_sparkline(&[]), "");

        let line = render_sparkline(&[0, 1, 2]);
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line.chars().next(), Some(' '));
    }
}
