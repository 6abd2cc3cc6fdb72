use gdp_charts::ChartComponents;
use maud::{html, PreEscaped, Render};

use crate::chart_service::ChartView;

pub(crate) const CHART_SIZE: (u32, u32) = (960, 540);

/// A drawn chart plus the notice explaining why it may be empty.
pub(crate) struct ChartFigure {
    components: ChartComponents,
    notice: Option<String>,
}

impl ChartFigure {
    pub(crate) fn new(view: ChartView) -> anyhow::Result<Self> {
        Ok(Self {
            components: gdp_charts::components(&view.spec, CHART_SIZE)?,
            notice: view.notice,
        })
    }
}

impl Render for ChartFigure {
    fn render(&self) -> maud::Markup {
        html! {
          figure class="chart" {
            @if let Some(notice) = &self.notice {
              p class="notice" { (notice) }
            }
            (PreEscaped(&self.components.div))
            (PreEscaped(&self.components.script))
          }
        }
    }
}
