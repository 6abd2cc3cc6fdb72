use std::ops::Deref;

use axum::{
    http::header::VARY,
    response::{Html, IntoResponse},
};
use maud::{html, Markup, Render};

use super::{
    components::{footer::Footer, header::Header},
    head::HtmlHead,
};
use crate::web::htmx::Layout;

pub trait Page {
    fn get_name(&'_ self) -> String;
    fn get_description(&'_ self) -> Option<String> {
        None
    }
    fn draw_body(&self) -> Markup;
    /// The fragment htmx swaps in. Pages without one send their whole body.
    fn draw_partial(&self) -> Markup {
        self.draw_body()
    }
}

impl<P: Page + ?Sized> Page for Box<P> {
    fn get_name(&'_ self) -> String {
        self.deref().get_name()
    }

    fn get_description(&'_ self) -> Option<String> {
        self.deref().get_description()
    }

    fn draw_body(&self) -> Markup {
        self.deref().draw_body()
    }

    fn draw_partial(&self) -> Markup {
        self.deref().draw_partial()
    }
}

pub struct RenderPage<T: Page> {
    page: T,
    layout: Layout,
}

impl<T: Page> RenderPage<T> {
    pub(crate) fn new(page: T, layout: Layout) -> Self {
        Self { page, layout }
    }

    pub(crate) fn full(page: T) -> Self {
        Self::new(page, Layout::FullPage)
    }
}

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        // caches must not hand a fragment to a browser asking for the page, or the reverse
        ([(VARY, "HX-Request")], Html(self.render().0)).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.page;
        if self.layout == Layout::Partial {
            return page.draw_partial();
        }
        let description = page.get_description();
        let head = HtmlHead {
            title: &page.get_name(),
            description: description.as_deref(),
        };
        html! {
          (head)
          body {
            (Header)
            main class="container" {
              (page.draw_body())
            }
            (Footer)
          }
        }
    }
}
