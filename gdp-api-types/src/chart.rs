use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Semantic formatter for numeric values. The renderer decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    /// `$1.2B`
    CurrencyAbbreviated,
    Plain,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelOrientation {
    #[default]
    Horizontal,
    /// Labels rotated by 45 degrees
    Diagonal,
}

/// Which column of a series a tooltip line reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldRef {
    Category,
    X,
    Y,
    SeriesName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipField {
    pub label: String,
    pub field: FieldRef,
}

impl TooltipField {
    pub fn new(label: &str, field: FieldRef) -> Self {
        Self {
            label: label.to_string(),
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "kebab-case")]
pub enum XValues {
    Categories(Vec<String>),
    Years(Vec<i32>),
}

impl XValues {
    pub fn len(&self) -> usize {
        match self {
            XValues::Categories(categories) => categories.len(),
            XValues::Years(years) => years.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text used for the x value at `index`, if there is one.
    pub fn label(&self, index: usize) -> Option<String> {
        match self {
            XValues::Categories(categories) => categories.get(index).cloned(),
            XValues::Years(years) => years.get(index).map(|year| year.to_string()),
        }
    }
}

/// A single line or group of bars. `x` and `y` always have the same length,
/// which is why the only way to build one is from (x, y) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: Option<String>,
    /// `#rrggbb`
    pub color: Option<String>,
    pub x: XValues,
    pub y: Vec<f64>,
}

impl Series {
    pub fn categories(points: impl IntoIterator<Item = (String, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self {
            name: None,
            color: None,
            x: XValues::Categories(x),
            y,
        }
    }

    pub fn years(points: impl IntoIterator<Item = (i32, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self {
            name: None,
            color: None,
            x: XValues::Years(x),
            y,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        self.x.len() == self.y.len()
    }
}

/// Everything the renderer needs to draw a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub tooltip_fields: Vec<TooltipField>,
    pub y_format: ValueFormat,
    pub x_label_orientation: LabelOrientation,
}

impl ChartSpec {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True when there is not a single point to draw
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series
            .iter()
            .flat_map(|series| series.name.as_deref())
            .collect()
    }

    pub fn y_max(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|series| series.y.iter().copied())
            .reduce(f64::max)
    }

    pub fn y_min(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|series| series.y.iter().copied())
            .reduce(f64::min)
    }
}
