use gdp_api_types::YearRange;
use maud::{html, Markup};

use crate::web::templates::{
    components::{chart::ChartFigure, year_select::YearSelect},
    page::Page,
};

/// Largest economies for one year as a bar chart.
pub(crate) struct TopGdpPage {
    /// `None` when nothing has been loaded into the store yet
    pub(crate) years: Option<YearRange>,
    pub(crate) year: Option<i32>,
    pub(crate) count: i64,
    pub(crate) chart: Option<ChartFigure>,
}

impl Page for TopGdpPage {
    fn get_name(&'_ self) -> String {
        match self.year {
            Some(year) => format!("Top {} GDPs ({year})", self.count),
            None => "Top GDPs".to_string(),
        }
    }

    fn get_description(&'_ self) -> Option<String> {
        Some("The largest economies in the world by nominal GDP".to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Top economies" }
          (self.draw_partial())
        }
    }

    fn draw_partial(&self) -> Markup {
        html! {
          section id="chart-panel" {
            form class="chart-controls" action="/" method="get"
              hx-get="/" hx-target="#chart-panel" hx-swap="outerHTML"
              hx-trigger="change" hx-push-url="true" {
              @if let (Some(years), Some(year)) = (self.years, self.year) {
                (YearSelect { years, selected: year })
              }
              label {
                "Countries "
                input type="number" name="count" min="1" value=(self.count);
              }
              noscript { button type="submit" { "Show" } }
            }
            @if let Some(chart) = &self.chart {
              (chart)
            } @else {
              p class="notice" { "No GDP data has been loaded yet." }
            }
          }
        }
    }
}
