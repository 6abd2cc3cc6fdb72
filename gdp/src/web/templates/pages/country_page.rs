use maud::{html, Markup};

use crate::web::templates::{
    components::{chart::ChartFigure, country_select::CountrySelect},
    page::Page,
};

pub(crate) struct CountryPage {
    pub(crate) countries: Vec<String>,
    pub(crate) country: String,
    pub(crate) chart: ChartFigure,
}

impl Page for CountryPage {
    fn get_name(&'_ self) -> String {
        format!("{} GDP", self.country)
    }

    fn get_description(&'_ self) -> Option<String> {
        Some(format!("Yearly GDP of {}", self.country))
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Country history" }
          (self.draw_partial())
        }
    }

    fn draw_partial(&self) -> Markup {
        html! {
          section id="chart-panel" {
            form class="chart-controls" action="/country" method="get"
              hx-get="/country" hx-target="#chart-panel" hx-swap="outerHTML"
              hx-trigger="change" hx-push-url="true" {
              (CountrySelect {
                name: "country",
                label: "Country",
                countries: &self.countries,
                selected: &self.country,
              })
              noscript { button type="submit" { "Show" } }
            }
            (self.chart)
          }
        }
    }
}
