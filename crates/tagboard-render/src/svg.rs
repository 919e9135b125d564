//! Headless SVG surface for chart layouts.
//!
//! The emitter draws the connector group before the box group so boxes
//! overlay the lines, then one `<g>` per box with the display name, the full
//! tag and the description. Output is deterministic for a given layout.

use crate::model::ChartLayout;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Optional CSS color painted behind the chart.
    pub background: Option<String>,
    pub font_family: String,
    /// Connector stroke width.
    pub line_width: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            font_family: "sans-serif".to_string(),
            line_width: 2.0,
        }
    }
}

pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_chart_svg(layout: &ChartLayout, options: &SvgRenderOptions) -> String {
    let mut out = String::new();

    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = layout.width,
        h = layout.height,
        font = escape_xml(&options.font_family),
    );
    out.push('\n');

    if let Some(background) = options.background.as_deref() {
        let _ = writeln!(
            &mut out,
            r#"<rect width="{w}" height="{h}" fill="{fill}" />"#,
            w = layout.width,
            h = layout.height,
            fill = escape_xml(background),
        );
    }

    out.push_str(r#"<g class="connectors">"#);
    out.push('\n');
    for c in &layout.connectors {
        let _ = writeln!(
            &mut out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}" />"#,
            c.x1, c.y1, c.x2, c.y2, options.line_width,
        );
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="boxes">"#);
    out.push('\n');
    for b in layout.boxes.values() {
        let _ = writeln!(&mut out, r#"<g class="box" data-tag="{}">"#, escape_xml(&b.full_tag));
        let _ = writeln!(
            &mut out,
            r#"<rect x="{}" y="{}" width="{size}" height="{size}" rx="8" fill="white" stroke="black" stroke-width="2" />"#,
            b.x,
            b.y,
            size = b.size,
        );
        let _ = writeln!(
            &mut out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="14" font-weight="bold">{}</text>"#,
            b.x + b.size / 2.0,
            b.y + 22.0,
            escape_xml(&b.display_name),
        );
        let _ = writeln!(
            &mut out,
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="9" font-style="italic" fill="#555">{}</text>"##,
            b.x + b.size / 2.0,
            b.y + 38.0,
            escape_xml(&b.full_tag),
        );
        if !b.description.is_empty() {
            let _ = writeln!(
                &mut out,
                r##"<text x="{}" y="{}" text-anchor="middle" font-size="10" fill="#2a2a2a">{}</text>"##,
                b.x + b.size / 2.0,
                b.y + 60.0,
                escape_xml(&b.description),
            );
        }
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}
