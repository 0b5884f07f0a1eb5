//! SVG bar chart rendering of tag frequencies

use scriptorium_domain::traits::Visualizer;
use scriptorium_domain::PosFrequencies;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Horizontal bar chart, most frequent tag on top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgBarChart {
    /// Width of the longest bar in pixels
    pub bar_width: u32,
    /// Height of one bar in pixels
    pub bar_height: u32,
    /// Width reserved for tag labels in pixels
    pub label_width: u32,
}

impl Default for SvgBarChart {
    fn default() -> Self {
        Self {
            bar_width: 400,
            bar_height: 20,
            label_width: 80,
        }
    }
}

const MARGIN: u32 = 10;
const GAP: u32 = 4;
const COUNT_WIDTH: u32 = 60;

impl SvgBarChart {
    /// Render the chart as an SVG document
    ///
    /// Bars are ordered by descending count, ties by tag name.
    pub fn render(&self, frequencies: &PosFrequencies) -> String {
        let mut bars: Vec<(&String, &u64)> = frequencies.iter().collect();
        bars.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let max = bars.first().map(|(_, count)| **count).unwrap_or(0);
        let rows = bars.len().max(1) as u32;
        let width = MARGIN * 2 + self.label_width + self.bar_width + COUNT_WIDTH;
        let height = MARGIN * 2 + rows * (self.bar_height + GAP);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

        if bars.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="12">no tags</text>"#,
                MARGIN,
                MARGIN + self.bar_height / 2 + 4
            );
        }

        for (row, (tag, count)) in bars.iter().enumerate() {
            let y = MARGIN + row as u32 * (self.bar_height + GAP);
            let text_y = y + self.bar_height / 2 + 4;
            let length = if max == 0 {
                0
            } else {
                ((**count as f64 / max as f64) * self.bar_width as f64).round() as u32
            };
            let bar_x = MARGIN + self.label_width;

            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
                MARGIN,
                text_y,
                escape(tag)
            );
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="steelblue"/>"#,
                bar_x, y, length, self.bar_height
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
                bar_x + length + GAP,
                text_y,
                count
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Visualizer for SvgBarChart {
    type Error = io::Error;

    fn visualize(&self, frequencies: &PosFrequencies, path: &Path) -> Result<(), Self::Error> {
        fs::write(path, self.render(frequencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn frequencies(pairs: &[(&str, u64)]) -> PosFrequencies {
        pairs.iter().map(|(tag, n)| (tag.to_string(), *n)).collect()
    }

    #[test]
    fn test_bars_sorted_by_count() {
        let svg = SvgBarChart::default().render(&frequencies(&[("ADJ", 1), ("NOUN", 3), ("ADV", 1)]));
        let noun = svg.find(">NOUN<").unwrap();
        let adj = svg.find(">ADJ<").unwrap();
        let adv = svg.find(">ADV<").unwrap();
        assert!(noun < adj && adj < adv);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_longest_bar_has_full_width() {
        let chart = SvgBarChart::default();
        let svg = chart.render(&frequencies(&[("NOUN", 4), ("VERB", 2)]));
        assert!(svg.contains(r#"width="400" height="20""#));
        assert!(svg.contains(r#"width="200" height="20""#));
    }

    #[test]
    fn test_empty_frequencies_render() {
        let svg = SvgBarChart::default().render(&PosFrequencies::new());
        assert!(svg.contains("no tags"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = SvgBarChart::default().render(&frequencies(&[("A<B", 1)]));
        assert!(svg.contains("A&lt;B"));
    }

    #[test]
    fn test_visualize_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1_image.svg");
        SvgBarChart::default()
            .visualize(&frequencies(&[("NOUN", 1)]), &path)
            .unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("NOUN"));
    }
}
