use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use anyhow::{anyhow, Result};
use quick_xml::escape::escape;
use gdp_api_types::ChartSpec;
use plotters_svg::SVGBackend;
use serde_json::json;

use crate::draw::{draw_chart, RotatedLabel};

/// A rendered chart ready to be embedded in a page: `div` holds the drawn
/// svg, `script` holds the spec for client side tooltips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartComponents {
    pub id: String,
    pub script: String,
    pub div: String,
}

fn chart_id(spec_json: &str, size: (u32, u32)) -> String {
    let mut hasher = DefaultHasher::new();
    spec_json.hash(&mut hasher);
    size.hash(&mut hasher);
    format!("gdp-chart-{:016x}", hasher.finish())
}

fn rotated_text(label: &RotatedLabel) -> String {
    let RotatedLabel {
        text,
        x,
        y,
        angle,
        font_size,
    } = label;
    // svg rotates clockwise, the label should rise from its anchor to the left
    format!(
        r#"<text x="{x}" y="{y}" text-anchor="end" dominant-baseline="middle" font-family="sans-serif" font-size="{font_size}" transform="rotate(-{angle}, {x}, {y})">{}</text>"#,
        escape(text.as_str())
    )
}

/// Writes the labels plotters could not rotate just before the svg closes.
fn append_rotated_labels(svg: &mut String, labels: &[RotatedLabel]) {
    if labels.is_empty() {
        return;
    }
    let text: String = labels.iter().map(rotated_text).collect();
    match svg.rfind("</svg>") {
        Some(end) => svg.insert_str(end, &text),
        None => svg.push_str(&text),
    }
}

pub fn components(spec: &ChartSpec, size: (u32, u32)) -> Result<ChartComponents> {
    let spec_json = serde_json::to_string(spec)?;
    let id = chart_id(&spec_json, size);

    let mut svg = String::new();
    let drawn = {
        let backend = SVGBackend::with_string(&mut svg, size);
        draw_chart(backend, spec).map_err(|e| anyhow!("Failed to draw chart: {}", e))?
    };
    append_rotated_labels(&mut svg, &drawn.rotated_labels);

    let payload = json!({
        "spec": spec,
        "width": size.0,
        "height": size.1,
        "plot_area": drawn.plot_area.to_json(),
    });
    // the payload sits inside a script tag, so it must never close it early
    let payload = serde_json::to_string(&payload)?.replace("</", "<\\/");
    log::debug!("rendered {id}: {} bytes of svg", svg.len());

    Ok(ChartComponents {
        script: format!(r#"<script type="application/json" data-chart-spec="{id}">{payload}</script>"#),
        div: format!(r#"<div class="gdp-chart" id="{id}">{svg}</div>"#),
        id,
    })
}

#[cfg(test)]
mod test {
    use gdp_api_types::GdpRecord;

    use super::components;
    use crate::builder::{build_single_series, build_top_n};

    #[test]
    fn script_and_div_share_an_id() {
        let records = [
            GdpRecord::new("Brazil", 2012, 2.4e12),
            GdpRecord::new("Brazil", 2013, 2.5e12),
        ];
        let spec = build_single_series(&records, "Brazil").unwrap();
        let chart = components(&spec, (640, 400)).unwrap();
        assert!(chart.id.starts_with("gdp-chart-"));
        assert!(chart
            .div
            .starts_with(&format!(r#"<div class="gdp-chart" id="{}"><svg"#, chart.id)));
        assert!(chart.div.ends_with("</div>"));
        assert!(chart
            .script
            .contains(&format!(r#"data-chart-spec="{}""#, chart.id)));
        assert!(chart.script.contains(r#""title":"Brazil GDP""#));
        assert!(chart.script.contains(r#""plot_area""#));
    }

    #[test]
    fn rendering_is_repeatable() {
        let records = [GdpRecord::new("Chile", 2012, 2.6e11)];
        let spec = build_top_n(&records, 2012, 5).unwrap();
        assert_eq!(
            components(&spec, (640, 400)).unwrap(),
            components(&spec, (640, 400)).unwrap()
        );
        assert_ne!(
            components(&spec, (640, 400)).unwrap().id,
            components(&spec, (800, 400)).unwrap().id
        );
    }

    #[test]
    fn top_n_labels_are_rotated_45_degrees() {
        let records = [
            GdpRecord::new("Bosnia & Herzegovina", 2012, 1.7e10),
            GdpRecord::new("<img src=x>", 2012, 1.0e10),
        ];
        let spec = build_top_n(&records, 2012, 2).unwrap();
        let chart = components(&spec, (640, 400)).unwrap();
        assert_eq!(chart.div.matches("transform=\"rotate(-45, ").count(), 2);
        assert!(chart.div.contains(">Bosnia &amp; Herzegovina</text>"));
        assert!(chart.div.contains(">&lt;img src=x&gt;</text>"));
        assert!(!chart.div.contains("<img"));
        assert!(chart.div.contains("</text></svg>"));
    }

    #[test]
    fn line_charts_keep_upright_labels() {
        let records = [
            GdpRecord::new("Brazil", 2012, 2.4e12),
            GdpRecord::new("Brazil", 2013, 2.5e12),
        ];
        let spec = build_single_series(&records, "Brazil").unwrap();
        let chart = components(&spec, (640, 400)).unwrap();
        assert!(!chart.div.contains("rotate("));
    }

    #[test]
    fn payload_cannot_close_the_script_tag() {
        let records = [GdpRecord::new("</script><b>", 2012, 1.0)];
        let spec = build_top_n(&records, 2012, 1).unwrap();
        let chart = components(&spec, (640, 400)).unwrap();
        assert_eq!(chart.script.matches("</script>").count(), 1);
        assert!(chart.script.ends_with("</script>"));
    }
}
