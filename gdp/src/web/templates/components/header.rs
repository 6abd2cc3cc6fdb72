use maud::{html, Render};

pub(crate) struct Header;

impl Render for Header {
    fn render(&self) -> maud::Markup {
        html! {
          header {
            nav class="header" {
              a class="nav-item brand" href="/" { "GDP by country" }
              a class="nav-item" href="/" { "Top economies" }
              a class="nav-item" href="/country" { "Country history" }
              a class="nav-item" href="/compare" { "Compare" }
            }
          }
        }
    }
}
