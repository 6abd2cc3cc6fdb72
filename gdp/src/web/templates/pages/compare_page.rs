use maud::{html, Markup};

use crate::web::templates::{
    components::{chart::ChartFigure, country_select::CountrySelect},
    page::Page,
};

const SLOTS: [(&str, &str); 3] = [
    ("country_1", "First"),
    ("country_2", "Second"),
    ("country_3", "Third"),
];

/// Several countries' GDP over time on one chart.
pub(crate) struct ComparePage {
    pub(crate) countries: Vec<String>,
    pub(crate) selected: Vec<String>,
    pub(crate) chart: ChartFigure,
}

impl Page for ComparePage {
    fn get_name(&'_ self) -> String {
        format!("GDP: {}", self.selected.join(", "))
    }

    fn get_description(&'_ self) -> Option<String> {
        Some(format!("GDP of {} compared", self.selected.join(", ")))
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Compare countries" }
          (self.draw_partial())
        }
    }

    fn draw_partial(&self) -> Markup {
        html! {
          section id="chart-panel" {
            form class="chart-controls" action="/compare" method="get"
              hx-get="/compare" hx-target="#chart-panel" hx-swap="outerHTML"
              hx-trigger="change" hx-push-url="true" {
              @for ((name, label), selected) in SLOTS.iter().zip(&self.selected) {
                (CountrySelect {
                  name,
                  label,
                  countries: &self.countries,
                  selected,
                })
              }
              noscript { button type="submit" { "Show" } }
            }
            (self.chart)
          }
        }
    }
}
