use gdp_api_types::{ChartKind, ChartSpec, LabelOrientation, Series, XValues};
use itertools::Itertools;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use serde_json::json;

use crate::{format::format_value, palette};

const MARGIN: u32 = 10;
const Y_LABEL_AREA: u32 = 80;
const X_LABEL_AREA: u32 = 40;
const DIAGONAL_X_LABEL_AREA: u32 = 110;
const FONT: &str = "sans-serif";
const LABEL_FONT_SIZE: u32 = 12;
/// Gap between the bottom of the plotting area and a rotated label's anchor
const ROTATED_LABEL_OFFSET: i32 = 8;

/// Pixel bounds of the plotting area inside the drawn chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotArea {
    pub fn to_json(self) -> serde_json::Value {
        json!({
            "left": self.left,
            "top": self.top,
            "right": self.right,
            "bottom": self.bottom,
        })
    }
}

/// An x axis label the drawing backend cannot rotate by itself. `x`/`y` is
/// where the end of the text sits, `angle` is in degrees counter clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub angle: f64,
    pub font_size: u32,
}

/// What [`draw_chart`] leaves behind for the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnChart {
    pub plot_area: PlotArea,
    /// Diagonal category labels, still to be written onto the output
    pub rotated_labels: Vec<RotatedLabel>,
}

impl DrawnChart {
    fn without_labels(plot_area: PlotArea) -> Self {
        Self {
            plot_area,
            rotated_labels: vec![],
        }
    }
}

type DrawResult<'a, T> = Result<T, Box<dyn std::error::Error + Send + Sync + 'a>>;

fn series_color(series: &Series, position: usize) -> RGBColor {
    let (r, g, b) = series
        .color
        .as_deref()
        .and_then(palette::parse_hex)
        .or_else(|| palette::parse_hex(palette::color_for(position)))
        .unwrap_or((0, 0, 0));
    RGBColor(r, g, b)
}

/// Rounds the top of the y axis up so the tallest value isn't glued to the edge
fn padded_max(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn x_label_area(orientation: LabelOrientation) -> u32 {
    match orientation {
        LabelOrientation::Horizontal => X_LABEL_AREA,
        LabelOrientation::Diagonal => DIAGONAL_X_LABEL_AREA,
    }
}

fn label_angle(orientation: LabelOrientation) -> Option<f64> {
    match orientation {
        LabelOrientation::Horizontal => None,
        LabelOrientation::Diagonal => Some(45.0),
    }
}

fn chart_builder<'a, 'b, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    spec: &'b ChartSpec,
) -> ChartBuilder<'a, 'b, DB> {
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(MARGIN)
        .x_label_area_size(x_label_area(spec.x_label_orientation))
        .y_label_area_size(Y_LABEL_AREA);
    if let Some(title) = &spec.title {
        builder.caption(title, (FONT, 24));
    }
    builder
}

fn draw_placeholder<'a, DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> DrawResult<'a, DrawnChart>
where
    DB: DrawingBackend + 'a,
{
    let (width, height) = root.dim_in_pixel();
    let message = match &spec.title {
        Some(title) => format!("No data for {title}"),
        None => "No data".to_string(),
    };
    let style = (FONT, 20)
        .into_font()
        .color(&BLACK.mix(0.6))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(&message, &style, (width as i32 / 2, height as i32 / 2))?;
    Ok(DrawnChart::without_labels(PlotArea {
        left: 0,
        top: 0,
        right: width as i32,
        bottom: height as i32,
    }))
}

fn draw_bars<'a, DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &Series,
) -> DrawResult<'a, DrawnChart>
where
    DB: DrawingBackend + 'a,
{
    let labels: Vec<String> = (0..series.len())
        .map(|index| series.x.label(index).unwrap_or_default())
        .collect();
    let y_max = padded_max(spec.y_max().unwrap_or_default());
    let mut chart = chart_builder(root, spec)
        .build_cartesian_2d((0u32..labels.len() as u32).into_segmented(), 0f64..y_max)?;

    let y_formatter = |y: &f64| format_value(spec.y_format, *y);
    let angle = label_angle(spec.x_label_orientation);
    // rotated labels are written by the caller, the mesh only draws upright ones
    let x_formatter = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(index) if angle.is_none() => {
            labels.get(*index as usize).cloned().unwrap_or_default()
        }
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .x_labels(labels.len())
        .x_label_style((FONT, LABEL_FONT_SIZE).into_font())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()?;

    let color = series_color(series, 0);
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(6)
            .data(
                series
                    .y
                    .iter()
                    .enumerate()
                    .map(|(index, gdp)| (index as u32, *gdp)),
            ),
    )?;

    let (x, y) = chart.plotting_area().get_pixel_range();
    let rotated_labels = match angle {
        None => vec![],
        Some(angle) => labels
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let (x, _) = chart.backend_coord(&(SegmentValue::CenterOf(index as u32), 0.0));
                RotatedLabel {
                    text: text.clone(),
                    x,
                    y: y.end + ROTATED_LABEL_OFFSET,
                    angle,
                    font_size: LABEL_FONT_SIZE,
                }
            })
            .collect(),
    };
    Ok(DrawnChart {
        plot_area: PlotArea {
            left: x.start,
            top: y.start,
            right: x.end,
            bottom: y.end,
        },
        rotated_labels,
    })
}

fn draw_lines<'a, DB>(root: &DrawingArea<DB, Shift>, spec: &ChartSpec) -> DrawResult<'a, DrawnChart>
where
    DB: DrawingBackend + 'a,
{
    let lines: Vec<(usize, &Series, Vec<(i32, f64)>)> = spec
        .series
        .iter()
        .enumerate()
        .filter_map(|(position, series)| match &series.x {
            XValues::Years(years) if !years.is_empty() => Some((
                position,
                series,
                years.iter().copied().zip(series.y.iter().copied()).collect(),
            )),
            _ => None,
        })
        .collect();
    let (first_year, last_year) = lines
        .iter()
        .flat_map(|(_, _, points)| points.iter().map(|(year, _)| *year))
        .minmax()
        .into_option()
        .ok_or("no years to draw")?;
    // a single year still needs a non-empty axis
    let (first_year, last_year) = if first_year == last_year {
        (first_year - 1, last_year + 1)
    } else {
        (first_year, last_year)
    };
    let y_min = spec.y_min().unwrap_or_default().min(0.0);
    let y_max = padded_max(spec.y_max().unwrap_or_default());

    let mut chart =
        chart_builder(root, spec).build_cartesian_2d(first_year..last_year, y_min..y_max)?;
    let y_formatter = |y: &f64| format_value(spec.y_format, *y);
    let x_formatter = |year: &i32| year.to_string();
    chart
        .configure_mesh()
        .light_line_style(WHITE)
        .x_labels(((last_year - first_year + 1) as usize).min(12))
        .x_label_style((FONT, LABEL_FONT_SIZE).into_font())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()?;

    let mut has_legend = false;
    for (position, series, points) in lines {
        let color = series_color(series, position);
        let line = chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?;
        if let Some(name) = &series.name {
            has_legend = true;
            line.label(name).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
        chart.draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 3, color.filled())),
        )?;
    }
    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .draw()?;
    }

    let (x, y) = chart.plotting_area().get_pixel_range();
    Ok(DrawnChart::without_labels(PlotArea {
        left: x.start,
        top: y.start,
        right: x.end,
        bottom: y.end,
    }))
}

/// Draws `spec` onto `backend` and reports where the plotting area ended up,
/// so hover tooltips can map pointer positions back to data points.
///
/// Plotters backends only rotate text in quarter turns, so diagonal category
/// labels come back in [`DrawnChart::rotated_labels`] instead of being drawn.
pub fn draw_chart<'a, T>(backend: T, spec: &ChartSpec) -> DrawResult<'a, DrawnChart>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let drawn = if spec.is_empty() {
        draw_placeholder(&root, spec)?
    } else {
        match spec.kind {
            ChartKind::Bar => {
                let series = spec
                    .series
                    .iter()
                    .find(|series| !series.is_empty())
                    .ok_or("no series to draw")?;
                draw_bars(&root, spec, series)?
            }
            ChartKind::Line => draw_lines(&root, spec)?,
        }
    };

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;
    Ok(drawn)
}

#[cfg(test)]
mod test {
    use gdp_api_types::{GdpRecord, LabelOrientation};
    use plotters_svg::SVGBackend;

    use super::*;
    use crate::builder::{build_multi_series, build_top_n};

    fn render(spec: &ChartSpec) -> (String, DrawnChart) {
        let mut buffer = String::new();
        let drawn = {
            let backend = SVGBackend::with_string(&mut buffer, (800, 500));
            draw_chart(backend, spec).unwrap()
        };
        (buffer, drawn)
    }

    fn top_two() -> ChartSpec {
        let records = [
            GdpRecord::new("Japan", 2015, 4.4e12),
            GdpRecord::new("India", 2015, 2.1e12),
        ];
        build_top_n(&records, 2015, 10).unwrap()
    }

    #[test]
    fn bar_chart_hands_back_diagonal_labels() {
        let (svg, drawn) = render(&top_two());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Top 10 GDPs (2015)"));
        // upright copies would overlap the rotated ones
        assert!(!svg.contains("Japan"));

        let area = drawn.plot_area;
        assert!(area.left > 0 && area.right <= 800);
        assert!(area.top < area.bottom);

        let labels = &drawn.rotated_labels;
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "Japan");
        assert_eq!(labels[1].text, "India");
        assert!(labels.iter().all(|label| label.angle == 45.0));
        assert!(labels.iter().all(|label| label.y > area.bottom));
        assert!(labels[0].x < labels[1].x);
        assert!(labels
            .iter()
            .all(|label| label.x > area.left && label.x < area.right));
    }

    #[test]
    fn horizontal_bar_labels_are_drawn_in_place() {
        let mut spec = top_two();
        spec.x_label_orientation = LabelOrientation::Horizontal;
        let (svg, drawn) = render(&spec);
        assert!(svg.contains("Japan"));
        assert!(svg.contains("India"));
        assert!(drawn.rotated_labels.is_empty());
    }

    #[test]
    fn line_chart_draws_legend_for_named_series() {
        let records = [
            GdpRecord::new("Kenya", 2000, 1.2e10),
            GdpRecord::new("Kenya", 2001, 1.3e10),
            GdpRecord::new("Ghana", 2001, 5.0e9),
        ];
        let spec = build_multi_series(&records, &["Kenya", "Atlantis", "Ghana"])
            .unwrap()
            .with_title("GDP: Kenya, Atlantis, Ghana");
        let (svg, drawn) = render(&spec);
        assert!(svg.contains("Kenya"));
        assert!(svg.contains("Ghana"));
        assert!(drawn.rotated_labels.is_empty());
    }

    #[test]
    fn empty_chart_draws_placeholder() {
        let spec = build_multi_series(&[], &["Atlantis"]).unwrap();
        let (svg, drawn) = render(&spec);
        assert!(svg.contains("No data"));
        assert_eq!(
            drawn.plot_area,
            PlotArea {
                left: 0,
                top: 0,
                right: 800,
                bottom: 500
            }
        );
    }
}
