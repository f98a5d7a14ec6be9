use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::color::lerp_color;
use crate::config::{ArrowheadStyle, Config};
use crate::connection::Arrow;
use crate::geometry::{cubic_bezier, offset_on_angle};
use crate::scene::{ResolvedNode, ResolvedScene};

pub fn render_svg(scene: &ResolvedScene, config: &Config) -> String {
    let mut svg = String::new();
    let width = config.canvas.width.max(1.0);
    let height = config.canvas.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.canvas.background
    ));

    for node in &scene.nodes {
        node_svg(&mut svg, node, config);
        for arrow in &node.arrows {
            arrow_svg(&mut svg, arrow, config);
        }
    }

    svg.push_str("</svg>");
    svg
}

fn node_svg(svg: &mut String, node: &ResolvedNode, config: &Config) {
    let rect = node.shape.rect;
    let color = node.shape.color.to_hex();
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        rect.x1,
        rect.y1,
        rect.width(),
        rect.height(),
        color,
        config.node.stroke_width
    ));

    let center_x = (rect.x1 + rect.x2) / 2.0;

    if !node.point_type.is_empty() {
        let label_y = rect.y1 + config.node.stroke_width + config.font.label_size / 2.0;
        let decoration = if config.font.label_underline {
            " text-decoration=\"underline\""
        } else {
            ""
        };
        svg.push_str(&format!(
            "<text x=\"{center_x:.2}\" y=\"{label_y:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\"{}>{}</text>",
            config.font.family,
            config.font.label_size,
            config.font.label_weight,
            decoration,
            escape_xml(&node.point_type)
        ));
    }

    if !node.content.is_empty() {
        let center_y = (rect.y1 + rect.y2) / 2.0;
        let line_height = config.font.size * config.font.line_height;
        let total_height = node.content.len() as f32 * line_height;
        let start_y = center_y - total_height / 2.0 + config.font.size;
        svg.push_str(&format!(
            "<text x=\"{center_x:.2}\" y=\"{start_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\">",
            config.font.family, config.font.size
        ));
        for (idx, line) in node.content.iter().enumerate() {
            let dy = if idx == 0 { 0.0 } else { line_height };
            svg.push_str(&format!(
                "<tspan x=\"{center_x:.2}\" dy=\"{dy:.2}\">\u{2022} {}</tspan>",
                escape_xml(line)
            ));
        }
        svg.push_str("</text>");
    }
}

fn arrow_svg(svg: &mut String, arrow: &Arrow, config: &Config) {
    let [c0, c1, c2, c3] = arrow.controls;
    let steps = config.arrow.steps;
    let segments = cubic_bezier(c0, c1, c2, c3, steps);
    for (k, segment) in segments.iter().enumerate() {
        let color = lerp_color(arrow.color_start, arrow.color_end, k as f32 / steps as f32);
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            color.to_hex(),
            config.arrow.stroke_width
        ));
    }

    let (left, right) = arrow.head_angles;
    let left_tip = offset_on_angle(c3, left, config.arrow.head_length);
    let right_tip = offset_on_angle(c3, right, config.arrow.head_length);
    let head_color = arrow.color_end.to_hex();

    match config.arrow.head_style {
        ArrowheadStyle::Arrow => {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                c3.x, c3.y, left_tip.x, left_tip.y, head_color, config.arrow.stroke_width
            ));
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                c3.x, c3.y, right_tip.x, right_tip.y, head_color, config.arrow.stroke_width
            ));
        }
        ArrowheadStyle::Triangle => {
            svg.push_str(&format!(
                "<polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"{}\"/>",
                c3.x, c3.y, left_tip.x, left_tip.y, right_tip.x, right_tip.y, head_color
            ));
        }
        ArrowheadStyle::None => {}
    }
}

/// Append `ext` when the output path does not already carry it.
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(existing) if existing.eq_ignore_ascii_case(ext) => path.to_path_buf(),
        _ => {
            let mut raw = path.as_os_str().to_os_string();
            raw.push(".");
            raw.push(ext);
            PathBuf::from(raw)
        }
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = config.font.family.clone();
    opt.default_size = usvg::Size::from_wh(config.canvas.width, config.canvas.height)
        .unwrap_or(usvg::Size::from_wh(1920.0, 1080.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
