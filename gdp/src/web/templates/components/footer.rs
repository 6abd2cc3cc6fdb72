use maud::{html, Render};

pub(crate) struct Footer;

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                div class="flex-row flex-space" {
                    span { "GDP figures in current US dollars." }
                    a href="/api/countries" { "API" }
                }
            }
        }
    }
}
