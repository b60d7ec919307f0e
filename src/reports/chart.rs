//! Expense pie chart
//!
//! Slice geometry lives on a 100x100 canvas: radius-40 circle centred at
//! (50, 50), angles measured clockwise from twelve o'clock. The chart can be
//! rendered as an SVG donut with a legend.

use std::path::Path;

use svg::node::element::{Circle, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::totals::{ranked, CategoryTotal};

pub const PALETTE: [&str; 10] = [
    "#4F46E5", "#06B6D4", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#6366F1",
    "#14B8A6", "#F97316",
];

const CENTER: f64 = 50.0;
const RADIUS: f64 = 40.0;
const INNER_RADIUS: f64 = 25.0;

/// Stable palette colour for a category name
///
/// Hashes UTF-16 code units with `h = c + ((h << 5) - h)`, where only the
/// shift operand is truncated to 32 bits.
pub fn category_color(name: &str) -> &'static str {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = unit as i64 + (shifted - hash);
    }
    PALETTE[(hash.unsigned_abs() % PALETTE.len() as u64) as usize]
}

/// Point on the outer circle at `angle` degrees from twelve o'clock
pub fn point_on_circle(angle: f64) -> (f64, f64) {
    let radians = (angle - 90.0).to_radians();
    (
        CENTER + RADIUS * radians.cos(),
        CENTER + RADIUS * radians.sin(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
    /// Degrees
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl PieSlice {
    /// A lone slice covers the whole circle and cannot be drawn as an arc
    pub fn is_full_circle(&self) -> bool {
        self.percentage >= 100.0
    }

    /// SVG path data for the wedge
    pub fn path_data(&self) -> String {
        let (x1, y1) = point_on_circle(self.start_angle);
        let (x2, y2) = point_on_circle(self.end_angle);
        let large_arc = u8::from(self.percentage > 50.0);

        format!(
            "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
            c = CENTER,
            r = RADIUS,
        )
    }

    /// "Food $450.00 (45.0%)"
    pub fn legend_label(&self) -> String {
        format!("{} {} ({:.1}%)", self.category, self.amount, self.percentage)
    }
}

/// Pie chart over category totals, largest slice first
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: Money,
}

impl PieChart {
    pub fn from_totals(totals: &[CategoryTotal]) -> Self {
        let totals = ranked(totals.to_vec());
        let total: Money = totals.iter().map(|t| t.amount).sum();

        let mut cumulative = 0.0;
        let slices = totals
            .into_iter()
            .filter(|_| total.is_positive())
            .map(|t| {
                let percentage = t.amount.percent_of(total);
                let start_angle = cumulative * 3.6;
                cumulative += percentage;
                PieSlice {
                    color: category_color(&t.category),
                    category: t.category,
                    amount: t.amount,
                    percentage,
                    start_angle,
                    end_angle: cumulative * 3.6,
                }
            })
            .collect();

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Donut chart with the legend to its right
    pub fn to_document(&self) -> Document {
        let mut document = Document::new()
            .set("viewBox", (0, 0, 220, 100))
            .set("width", 660)
            .set("height", 300);

        for slice in &self.slices {
            if slice.is_full_circle() {
                document = document.add(
                    Circle::new()
                        .set("cx", CENTER)
                        .set("cy", CENTER)
                        .set("r", RADIUS)
                        .set("fill", slice.color),
                );
            } else {
                document = document.add(
                    SvgPath::new()
                        .set("d", slice.path_data())
                        .set("fill", slice.color)
                        .set("stroke", "#fff")
                        .set("stroke-width", 0.5),
                );
            }
        }

        document = document.add(
            Circle::new()
                .set("cx", CENTER)
                .set("cy", CENTER)
                .set("r", INNER_RADIUS)
                .set("fill", "white"),
        );

        for (i, slice) in self.slices.iter().enumerate() {
            let y = 10.0 + i as f64 * 8.0;
            document = document
                .add(
                    Rectangle::new()
                        .set("x", 105)
                        .set("y", y - 4.0)
                        .set("width", 4)
                        .set("height", 4)
                        .set("fill", slice.color),
                )
                .add(
                    Text::new()
                        .set("x", 112)
                        .set("y", y)
                        .set("font-size", 5)
                        .set("font-family", "sans-serif")
                        .add(svg::node::Text::new(slice.legend_label())),
                );
        }

        document
    }

    /// Write the SVG document to `path`
    pub fn save(&self, path: &Path) -> BudgetResult<()> {
        svg::save(path, &self.to_document()).map_err(|e| {
            BudgetError::Export(format!("Failed to write chart {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn total(category: &str, cents: i64) -> CategoryTotal {
        CategoryTotal {
            category: category.into(),
            amount: Money::from_cents(cents),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_category_color_is_stable() {
        assert_eq!(category_color("Food"), "#10B981");
        assert_eq!(category_color("Housing"), "#F59E0B");
        assert_eq!(category_color("Entertainment"), "#4F46E5");
        assert_eq!(category_color("Salary"), "#EC4899");
        assert_eq!(category_color(""), "#4F46E5");
        assert_eq!(category_color("Food"), category_color("Food"));
    }

    #[test]
    fn test_slices_sorted_with_cumulative_angles() {
        let chart = PieChart::from_totals(&[total("Food", 2500), total("Housing", 7500)]);

        assert_eq!(chart.total, Money::from_cents(10000));
        let first = &chart.slices[0];
        assert_eq!(first.category, "Housing");
        assert!(close(first.percentage, 75.0));
        assert!(close(first.start_angle, 0.0));
        assert!(close(first.end_angle, 270.0));

        let second = &chart.slices[1];
        assert!(close(second.start_angle, 270.0));
        assert!(close(second.end_angle, 360.0));
    }

    #[test]
    fn test_path_geometry() {
        let chart = PieChart::from_totals(&[total("Food", 2500), total("Housing", 7500)]);

        // Housing starts at twelve o'clock and takes the large arc
        let d = chart.slices[0].path_data();
        assert!(d.starts_with("M 50 50 L 50 10 A 40 40 0 1 1 "));
        assert!(chart.slices[1].path_data().contains(" 0 0 1 "));

        let (x, y) = point_on_circle(90.0);
        assert!(close(x, 90.0) && close(y, 50.0));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let chart = PieChart::from_totals(&[total("Food", 1234)]);
        assert!(chart.slices[0].is_full_circle());

        let svg = chart.to_document().to_string();
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_legend_and_save() {
        let chart = PieChart::from_totals(&[total("Food", 45000), total("Fun", 55000)]);
        assert_eq!(chart.slices[1].legend_label(), "Food $450.00 (45.0%)");

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chart.svg");
        chart.save(&path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Food $450.00 (45.0%)"));
        assert!(svg.contains("#10B981"));
    }

    #[test]
    fn test_empty_chart() {
        assert!(PieChart::from_totals(&[]).is_empty());
    }
}
