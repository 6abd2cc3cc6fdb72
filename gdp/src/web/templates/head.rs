use maud::{html, Render, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl<'a> Render for HtmlHead<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          (DOCTYPE)
          head {
            title { (self.title) };
            meta charset="utf-8"{};
            meta name="viewport" content="width=device-width, initial-scale=1.0" {};
            @if let Some(description) = self.description {
                meta name="description" content=((description)) {};
            }
            link rel="stylesheet" href="/static/main.css";
            script src=(HTMX_SRC) {};
            script src="/static/charts.js" defer {};
          }
        }
    }
}
