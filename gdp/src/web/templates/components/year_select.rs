use gdp_api_types::YearRange;
use maud::{html, Render};

/// Every year on record, newest first.
pub(crate) struct YearSelect {
    pub(crate) years: YearRange,
    pub(crate) selected: i32,
}

impl Render for YearSelect {
    fn render(&self) -> maud::Markup {
        html! {
          label {
            "Year "
            select name="year" {
              // a year outside the stored range was asked for explicitly, keep it visible
              @if !self.years.contains(self.selected) {
                option value=(self.selected) selected { (self.selected) }
              }
              @for year in self.years.years().rev() {
                option value=(year) selected[year == self.selected] { (year) }
              }
            }
          }
        }
    }
}
