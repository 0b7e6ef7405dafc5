use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
pub mod bars;
pub mod line;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const PAGE_WIDTH_IN: f64 = 10.0;
pub const PAGE_HEIGHT_IN: f64 = 7.0;
pub const DPI: f64 = 72.0;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("malformed table: {0}")]
    MalformedTable(String),
    #[error("column '{column}' holds non-numeric value '{value}' for sample '{sample}'")]
    TypeMismatch {
        column: String,
        sample: String,
        value: String,
    },
    #[error("render failed: {0}")]
    Render(String),
    #[error("cannot write {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

/// A table cell, typed once when the file is loaded and never re-inferred.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    Text(String),
}

impl Value {
    /// A field is numeric iff it parses as a float with a plain decimal point.
    pub fn parse(field: &str) -> Value {
        match field.parse::<f64>() {
            Ok(v) => Value::Num(v),
            Err(_) => Value::Text(field.to_string()),
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Num(v) => write!(f, "{}", v),
            Value::Text(t) => write!(f, "{}", t),
        }
    }
}

/// One long-format observation: the first column of the wide row names the
/// sample, the wide column name becomes the category.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub sample: String,
    pub category: String,
    pub value: f64,
}

/// The main struct for the whitespace-delimited input table.
/// The first line gives the column names and the first column holds
/// the row identifiers.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Table, PlotError> {
        let content = std::fs::read_to_string(path).map_err(|source| PlotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Table::parse(&content)
    }

    /// Parses the table text: first retained line is the header, blank lines
    /// and lines starting with '#' are skipped, every data line must split
    /// into exactly as many whitespace-separated fields as the header.
    pub fn parse(content: &str) -> Result<Table, PlotError> {
        let mut lines = content.lines().enumerate().filter(|(_, l)| {
            let t = l.trim_start();
            !t.is_empty() && !t.starts_with('#')
        });
        let (_, header) = match lines.next() {
            Some(h) => h,
            None => return Err(PlotError::MalformedTable("empty input, no header line".to_string())),
        };
        let headers: Vec<String> = header.split_whitespace().map(str::to_string).collect();
        for (i, h) in headers.iter().enumerate() {
            if headers[..i].contains(h) {
                return Err(PlotError::MalformedTable(format!(
                    "duplicate column name '{}'",
                    h
                )));
            }
        }
        let mut rows: Vec<Vec<Value>> = Vec::new();
        for (lineno, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != headers.len() {
                return Err(PlotError::MalformedTable(format!(
                    "line {}: found {} fields, header has {} columns",
                    lineno + 1,
                    fields.len(),
                    headers.len()
                )));
            }
            rows.push(fields.into_iter().map(Value::parse).collect());
        }
        Ok(Table { headers, rows })
    }

    /// Reshapes the wide table into long records, one per (row, non-identifier
    /// column) pair: rows in file order, columns in header order.
    /// Zero data rows give zero records without error.
    pub fn to_long(&self) -> Result<Vec<LongRecord>, PlotError> {
        let ncat = self.headers.len().saturating_sub(1);
        let mut records: Vec<LongRecord> = Vec::with_capacity(self.rows.len() * ncat);
        for row in self.rows.iter() {
            let sample = row[0].to_string();
            for (header, cell) in self.headers.iter().zip(row.iter()).skip(1) {
                match cell {
                    Value::Num(v) => records.push(LongRecord {
                        sample: sample.clone(),
                        category: header.clone(),
                        value: *v,
                    }),
                    Value::Text(t) => {
                        return Err(PlotError::TypeMismatch {
                            column: header.clone(),
                            sample: sample.clone(),
                            value: t.clone(),
                        })
                    }
                }
            }
        }
        Ok(records)
    }

    /// Takes the first two columns as (x, y) pairs; both must be numeric.
    /// Columns beyond the second are ignored.
    pub fn to_points(&self) -> Result<Vec<(f64, f64)>, PlotError> {
        if self.headers.len() < 2 {
            return Err(PlotError::MalformedTable(format!(
                "need two columns for an xy plot, found {}",
                self.headers.len()
            )));
        }
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(self.rows.len());
        for row in self.rows.iter() {
            match (row[0].as_num(), row[1].as_num()) {
                (Some(x), Some(y)) => points.push((x, y)),
                _ => {
                    return Err(PlotError::MalformedTable(format!(
                        "non-numeric value in xy row: {} {}",
                        row[0], row[1]
                    )))
                }
            }
        }
        Ok(points)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n", self.headers.join(" "))?;
        for row in self.rows.iter() {
            let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "{}\n", fields.join(" "))?
        }
        Ok(())
    }
}

/// Fixed axis tick positions: min..=max every step, independent of the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breaks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Breaks {
    pub fn new(min: f64, max: f64, step: f64) -> Breaks {
        Breaks { min, max, step }
    }

    pub fn count(&self) -> usize {
        if self.step <= 0.0 || self.max < self.min {
            return 0;
        }
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// The explicit tick positions, both endpoints included. The last point
    /// is clamped to max so step accumulation error cannot push it past the
    /// end of the axis.
    pub fn points(&self) -> Vec<f64> {
        (0..self.count())
            .map(|i| (self.min + i as f64 * self.step).min(self.max))
            .collect()
    }
}

/// Axis coordinate that places ticks exactly at the break positions.
/// `WithKeyPoints<RangedCoordf64>` forwards `NoDefaultFormatting` without a
/// `ValueFormatter` impl, so `configure_mesh` cannot be called on it; this
/// newtype keeps `DefaultFormatting` and delegates the value mapping to
/// `RangedCoordf64` (the label text itself comes from the explicit
/// `x_label_formatter`/`y_label_formatter` closures).
struct FixedTicks(Breaks);

impl plotters::coord::ranged1d::Ranged for FixedTicks {
    type FormatOption = plotters::coord::ranged1d::DefaultFormatting;
    type ValueType = f64;

    fn range(&self) -> std::ops::Range<f64> {
        self.0.min..self.0.max
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        plotters::coord::types::RangedCoordf64::from(self.0.min..self.0.max).map(value, limit)
    }

    fn key_points<Hint: plotters::coord::ranged1d::KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.0.points()
    }
}

/// Immutable per-invocation chart configuration, built once in the binary
/// and consumed by a renderer.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub pdfout: PathBuf,
    pub width_in: f64,
    pub height_in: f64,
    pub x_label: String,
    pub y_label: String,
    pub x_breaks: Option<Breaks>,
    pub y_breaks: Option<Breaks>,
}

impl ChartSpec {
    pub fn stacked_bars(pdfout: PathBuf) -> ChartSpec {
        ChartSpec {
            pdfout,
            width_in: PAGE_WIDTH_IN,
            height_in: PAGE_HEIGHT_IN,
            x_label: "Samples".to_string(),
            y_label: "Ancestry".to_string(),
            x_breaks: None,
            y_breaks: None,
        }
    }

    pub fn xy_line(pdfout: PathBuf, x_label: String, y_label: String) -> ChartSpec {
        ChartSpec {
            pdfout,
            width_in: PAGE_WIDTH_IN,
            height_in: PAGE_HEIGHT_IN,
            x_label,
            y_label,
            x_breaks: Some(Breaks::new(0.0, 10.0, 1.0)),
            y_breaks: Some(Breaks::new(0.0, 3.0, 0.1)),
        }
    }

    fn size_px(&self) -> (u32, u32) {
        ((self.width_in * DPI) as u32, (self.height_in * DPI) as u32)
    }
}

/// Plots the long records as one stacked bar per sample and writes a
/// single-page pdf at the spec's output path.
/// Samples appear on the x axis in first-seen order, categories stack
/// bottom-up in header order, each category filled with a palette color.
pub fn plot_stacked_bars(records: &[LongRecord], spec: &ChartSpec) -> Result<(), PlotError> {
    let svg =
        render_stacked_bars_svg(records, spec).map_err(|e| PlotError::Render(e.to_string()))?;
    write_pdf(&svg, &spec.pdfout)
}

fn render_stacked_bars_svg(
    records: &[LongRecord],
    spec: &ChartSpec,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut samples: Vec<&str> = Vec::new();
    let mut categories: Vec<&str> = Vec::new();
    for r in records.iter() {
        if !samples.contains(&r.sample.as_str()) {
            samples.push(&r.sample);
        }
        if !categories.contains(&r.category.as_str()) {
            categories.push(&r.category);
        }
    }
    // segment heights per (category, sample); duplicates sum, non-finite
    // values contribute nothing
    let mut heights = vec![vec![0f64; samples.len()]; categories.len()];
    for r in records.iter() {
        if !r.value.is_finite() {
            continue;
        }
        let ci = categories.iter().position(|c| *c == r.category);
        let si = samples.iter().position(|s| *s == r.sample);
        if let (Some(ci), Some(si)) = (ci, si) {
            heights[ci][si] += r.value;
        }
    }
    let mut ymax = 0f64;
    for si in 0..samples.len() {
        let total: f64 = heights.iter().map(|h| h[si]).sum();
        if total > ymax {
            ymax = total;
        }
    }
    if ymax <= 0.0 {
        ymax = 1.0;
    }

    let mut svg = String::new();
    let mut tick_labels: Vec<(i32, i32, String)> = Vec::new();
    {
        let root = SVGBackend::with_string(&mut svg, spec.size_px()).into_drawing_area();
        root.fill(&WHITE)?;
        // an empty record set still gives a blank page
        if !samples.is_empty() {
            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(80)
                .y_label_area_size(70)
                .build_cartesian_2d(0f64..samples.len() as f64, 0f64..ymax)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(0)
                .set_all_tick_mark_size(2)
                .label_style(("sans-serif", 14))
                .axis_desc_style(("sans-serif", 18))
                .x_desc(spec.x_label.as_str())
                .y_desc(spec.y_label.as_str())
                .draw()?;
            // TODO: sort the samples by population/similarity and draw
            // population name labels instead of leaving file order
            let mut base = vec![0f64; samples.len()];
            for (ci, cat) in categories.iter().enumerate() {
                let color = Palette99::pick(ci).to_rgba();
                let segments: Vec<_> = (0..samples.len())
                    .map(|si| {
                        let y0 = base[si];
                        let y1 = y0 + heights[ci][si];
                        Rectangle::new([(si as f64, y0), (si as f64 + 1.0, y1)], color.filled())
                    })
                    .collect();
                for si in 0..samples.len() {
                    base[si] += heights[ci][si];
                }
                chart
                    .draw_series(segments)?
                    .label(*cat)
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                    });
            }
            chart
                .configure_series_labels()
                .border_style(&TRANSPARENT)
                .background_style(&TRANSPARENT)
                .label_font(("sans-serif", 14))
                .draw()?;
            for (si, sample) in samples.iter().enumerate() {
                let (x, y) = chart.backend_coord(&(si as f64 + 0.5, 0.0));
                tick_labels.push((x, y + 14, sample.to_string()));
            }
        }
        root.present()?;
    }
    // plotters only rotates text by right angles, so the 45 degree sample
    // labels go in as raw svg text nodes anchored at the tick positions
    if let Some(end) = svg.rfind("</svg>") {
        let mut nodes = String::new();
        for (x, y, name) in tick_labels.iter() {
            nodes.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"13\" \
                 text-anchor=\"end\" transform=\"rotate(-45 {} {})\">{}</text>\n",
                x,
                y,
                x,
                y,
                escape_xml(name)
            ));
        }
        svg.insert_str(end, &nodes);
    }
    Ok(svg)
}

/// Plots the points as markers connected by a line in row order and writes a
/// single-page pdf at the spec's output path.
/// The tick grids are fixed by the spec's breaks, not by the data extent,
/// so points outside the window simply fall off the page.
pub fn plot_xy_line(points: &[(f64, f64)], spec: &ChartSpec) -> Result<(), PlotError> {
    let svg = render_xy_line_svg(points, spec).map_err(|e| PlotError::Render(e.to_string()))?;
    write_pdf(&svg, &spec.pdfout)
}

fn render_xy_line_svg(
    points: &[(f64, f64)],
    spec: &ChartSpec,
) -> Result<String, Box<dyn std::error::Error>> {
    let xb = spec.x_breaks.unwrap_or(Breaks::new(0.0, 10.0, 1.0));
    let yb = spec.y_breaks.unwrap_or(Breaks::new(0.0, 3.0, 0.1));
    let style = RGBColor(80, 80, 160);
    let pts: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, spec.size_px()).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(FixedTicks(xb), FixedTicks(yb))?;
        chart
            .configure_mesh()
            .disable_mesh()
            .set_all_tick_mark_size(2)
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| format!("{:.1}", y))
            .label_style(("sans-serif", 12))
            .axis_desc_style(("sans-serif", 18))
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()?;
        chart.draw_series(LineSeries::new(pts.iter().copied(), style.stroke_width(2)))?;
        chart.draw_series(
            pts.iter()
                .map(|&(x, y)| Circle::new((x, y), 4, style.filled())),
        )?;
        // TODO: highlight the N lowest points
        chart
            .configure_series_labels()
            .border_style(&TRANSPARENT)
            .background_style(&TRANSPARENT)
            .draw()?;
        root.present()?;
    }
    Ok(svg)
}

/// Converts the finished svg to a single-page pdf at 72 dpi, so a canvas of
/// inches * 72 pixels lands on a page of exactly that many inches.
fn write_pdf(svg: &str, path: &Path) -> Result<(), PlotError> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &options)
        .map_err(|e| PlotError::Render(format!("svg parse failed: {}", e)))?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| PlotError::Render(format!("pdf conversion failed: {}", e)))?;
    std::fs::write(path, pdf).map_err(|source| PlotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: &str = "Samples PopA PopB\nS1 0.3 0.7\nS2 0.6 0.4\n";

    #[test]
    fn parse_wide_table() {
        let t = Table::parse(WIDE).unwrap();
        assert_eq!(t.headers, vec!["Samples", "PopA", "PopB"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0][0], Value::Text("S1".to_string()));
        assert_eq!(t.rows[0][1], Value::Num(0.3));
        assert_eq!(t.rows[1][2], Value::Num(0.4));
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let t = Table::parse("# generated\n\nSamples PopA\n  # note\nS1 0.5\n\n").unwrap();
        assert_eq!(t.headers, vec!["Samples", "PopA"]);
        assert_eq!(t.rows.len(), 1);
    }

    #[test]
    fn parse_rejects_short_row() {
        let err = Table::parse("Samples PopA PopB\nS1 0.3\n").unwrap_err();
        match err {
            PlotError::MalformedTable(msg) => assert!(msg.contains("line 2"), "{}", msg),
            other => panic!("expected MalformedTable, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            Table::parse("").unwrap_err(),
            PlotError::MalformedTable(_)
        ));
        assert!(matches!(
            Table::parse("\n# only comments\n").unwrap_err(),
            PlotError::MalformedTable(_)
        ));
    }

    #[test]
    fn parse_rejects_duplicate_headers() {
        assert!(matches!(
            Table::parse("Samples PopA PopA\nS1 0.5 0.5\n").unwrap_err(),
            PlotError::MalformedTable(_)
        ));
    }

    #[test]
    fn cell_typing_resolved_at_load() {
        assert_eq!(Value::parse("1e-3"), Value::Num(0.001));
        assert_eq!(Value::parse("-2.5"), Value::Num(-2.5));
        assert_eq!(Value::parse("S1"), Value::Text("S1".to_string()));
    }

    #[test]
    fn reshape_count_and_order() {
        let records = Table::parse(WIDE).unwrap().to_long().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            LongRecord {
                sample: "S1".to_string(),
                category: "PopA".to_string(),
                value: 0.3
            }
        );
        assert_eq!(records[1].category, "PopB");
        assert_eq!(records[2].sample, "S2");
    }

    #[test]
    fn reshape_is_deterministic() {
        let t = Table::parse(WIDE).unwrap();
        assert_eq!(t.to_long().unwrap(), t.to_long().unwrap());
    }

    #[test]
    fn reshape_sample_multiplicity() {
        let t = Table::parse(WIDE).unwrap();
        let records = t.to_long().unwrap();
        for row in t.rows.iter() {
            let id = row[0].to_string();
            let n = records.iter().filter(|r| r.sample == id).count();
            assert_eq!(n, t.headers.len() - 1);
        }
    }

    #[test]
    fn reshape_boundaries() {
        let one = Table::parse("Samples PopA\nS1 1.0\n").unwrap().to_long().unwrap();
        assert_eq!(one.len(), 1);
        let none = Table::parse("Samples PopA PopB\n").unwrap().to_long().unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn reshape_rejects_text_value() {
        let err = Table::parse("Samples PopA\nS1 high\n").unwrap().to_long().unwrap_err();
        match err {
            PlotError::TypeMismatch { column, sample, value } => {
                assert_eq!(column, "PopA");
                assert_eq!(sample, "S1");
                assert_eq!(value, "high");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn points_from_two_numeric_columns() {
        let points = Table::parse("K CVError\n1 2.1\n2 1.8\n3 2.0\n")
            .unwrap()
            .to_points()
            .unwrap();
        assert_eq!(points, vec![(1.0, 2.1), (2.0, 1.8), (3.0, 2.0)]);
    }

    #[test]
    fn points_reject_non_numeric() {
        assert!(matches!(
            Table::parse("K CVError\n1 low\n").unwrap().to_points().unwrap_err(),
            PlotError::MalformedTable(_)
        ));
        assert!(matches!(
            Table::parse("K\n1\n").unwrap().to_points().unwrap_err(),
            PlotError::MalformedTable(_)
        ));
    }

    #[test]
    fn points_ignore_extra_columns() {
        let points = Table::parse("K CVError Note\n1 2.1 run1\n")
            .unwrap()
            .to_points()
            .unwrap();
        assert_eq!(points, vec![(1.0, 2.1)]);
    }

    #[test]
    fn line_breaks_have_fixed_tick_counts() {
        let spec = ChartSpec::xy_line(PathBuf::from("x.pdf"), "K".to_string(), "CV".to_string());
        assert_eq!(spec.x_breaks.unwrap().count(), 11);
        assert_eq!(spec.y_breaks.unwrap().count(), 31);
    }

    #[test]
    fn breaks_points_include_both_endpoints() {
        let y = Breaks::new(0.0, 3.0, 0.1);
        let pts = y.points();
        assert_eq!(pts.len(), 31);
        assert_eq!(pts[0], 0.0);
        assert_eq!(*pts.last().unwrap(), 3.0);
        let x = Breaks::new(0.0, 10.0, 1.0);
        assert_eq!(x.points(), (0..=10).map(f64::from).collect::<Vec<f64>>());
    }

    #[test]
    fn breaks_reject_non_positive_step() {
        assert_eq!(Breaks::new(0.0, 3.0, 0.0).count(), 0);
        assert_eq!(Breaks::new(0.0, 3.0, -0.1).count(), 0);
        assert_eq!(Breaks::new(3.0, 0.0, 0.1).count(), 0);
        assert!(Breaks::new(0.0, 3.0, 0.0).points().is_empty());
    }

    /// Pulls the contents of every <text> node out of a rendered svg.
    fn svg_text_labels(svg: &str) -> Vec<String> {
        svg.split("<text")
            .skip(1)
            .filter_map(|chunk| {
                let start = chunk.find('>')? + 1;
                let end = chunk[start..].find("</text>")? + start;
                Some(chunk[start..end].trim().to_string())
            })
            .collect()
    }

    #[test]
    fn xy_line_svg_draws_full_tick_grid() {
        let spec = ChartSpec::xy_line(
            PathBuf::from("unused.pdf"),
            "K".to_string(),
            "CV Error".to_string(),
        );
        let svg = render_xy_line_svg(&[(1.0, 2.1), (2.0, 1.8), (3.0, 2.0)], &spec).unwrap();
        let labels = svg_text_labels(&svg);
        for i in 0..=10 {
            let want = format!("{}", i);
            assert!(labels.contains(&want), "missing x tick {}", want);
        }
        for i in 0..=30 {
            let want = format!("{:.1}", i as f64 * 0.1);
            assert!(labels.contains(&want), "missing y tick {}", want);
        }
        assert!(labels.contains(&"K".to_string()));
        assert!(labels.contains(&"CV Error".to_string()));
    }

    #[test]
    fn stacked_bars_svg_has_rotated_labels_and_legend() {
        let records = Table::parse(WIDE).unwrap().to_long().unwrap();
        let spec = ChartSpec::stacked_bars(PathBuf::from("unused.pdf"));
        let svg = render_stacked_bars_svg(&records, &spec).unwrap();
        assert!(svg.contains("rotate(-45"), "sample labels should be rotated");
        let labels = svg_text_labels(&svg);
        for want in ["S1", "S2", "PopA", "PopB", "Samples", "Ancestry"].iter() {
            assert!(
                labels.contains(&want.to_string()),
                "missing label {}",
                want
            );
        }
    }

    #[test]
    fn stacked_bars_spec_defaults() {
        let spec = ChartSpec::stacked_bars(PathBuf::from("x.pdf"));
        assert_eq!(spec.x_label, "Samples");
        assert_eq!(spec.y_label, "Ancestry");
        assert_eq!(spec.width_in, 10.0);
        assert_eq!(spec.height_in, 7.0);
        assert!(spec.x_breaks.is_none());
        assert_eq!(spec.size_px(), (720, 504));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Table::from_path(Path::new("no/such/table.txt")).unwrap_err();
        assert!(matches!(err, PlotError::Read { .. }));
    }

    #[test]
    fn escape_xml_special_chars() {
        assert_eq!(escape_xml("A&B <C>"), "A&amp;B &lt;C&gt;");
        assert_eq!(escape_xml("S1"), "S1");
    }
}
