use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// How the pointed end of an arrow is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowheadStyle {
    /// Bare curve, no head.
    None,
    /// Two slanted strokes, like `->`.
    Arrow,
    /// Solid filled triangle.
    Triangle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub width: f32,
    pub height: f32,
    pub stroke_width: f32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            stroke_width: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowConfig {
    pub head_style: ArrowheadStyle,
    /// Opening angle of the head in degrees.
    pub head_angle: f32,
    /// Length of the slanted sides of the head.
    pub head_length: f32,
    pub stroke_width: f32,
    /// Number of line segments used to approximate each curve.
    pub steps: usize,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_style: ArrowheadStyle::Triangle,
            head_angle: 20.0,
            head_length: 30.0,
            stroke_width: 5.0,
            steps: 240,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    /// Content font size.
    pub size: f32,
    /// Node label font size.
    pub label_size: f32,
    pub label_weight: String,
    pub label_underline: bool,
    pub line_height: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Comic Sans MS".to_string(),
            size: 13.0,
            label_size: 18.0,
            label_weight: "bold".to_string(),
            label_underline: true,
            line_height: 1.5,
        }
    }
}

fn default_colors() -> Vec<Rgb> {
    vec![
        Rgb(255, 0, 0),   // red
        Rgb(255, 0, 255), // magenta
        Rgb(0, 0, 255),   // blue
        Rgb(0, 255, 0),   // green
        Rgb(255, 127, 0), // orange
        Rgb(255, 255, 0), // yellow
    ]
}

#[derive(Debug, Clone)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub node: NodeConfig,
    pub arrow: ArrowConfig,
    pub font: FontConfig,
    /// Ordered palette indexed by each node's plot line. Fractional plot
    /// lines blend between two adjacent entries.
    pub colors: Vec<Rgb>,
    /// Export the canvas to a file on exit; when false the CLI prints SVG
    /// to stdout instead.
    pub save_image: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            node: NodeConfig::default(),
            arrow: ArrowConfig::default(),
            font: FontConfig::default(),
            colors: default_colors(),
            save_image: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    stroke_width: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrowConfigFile {
    head_style: Option<ArrowheadStyle>,
    head_angle: Option<f32>,
    head_length: Option<f32>,
    stroke_width: Option<f32>,
    steps: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FontConfigFile {
    family: Option<String>,
    size: Option<f32>,
    label_size: Option<f32>,
    label_weight: Option<String>,
    label_underline: Option<bool>,
    line_height: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    canvas: Option<CanvasConfigFile>,
    node: Option<NodeConfigFile>,
    arrow: Option<ArrowConfigFile>,
    font: Option<FontConfigFile>,
    colors: Option<Vec<Rgb>>,
    save_image: Option<bool>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(canvas) = parsed.canvas {
        if let Some(v) = canvas.width {
            config.canvas.width = v;
        }
        if let Some(v) = canvas.height {
            config.canvas.height = v;
        }
        if let Some(v) = canvas.background {
            config.canvas.background = v;
        }
    }
    if let Some(node) = parsed.node {
        if let Some(v) = node.width {
            config.node.width = v;
        }
        if let Some(v) = node.height {
            config.node.height = v;
        }
        if let Some(v) = node.stroke_width {
            config.node.stroke_width = v;
        }
    }
    if let Some(arrow) = parsed.arrow {
        if let Some(v) = arrow.head_style {
            config.arrow.head_style = v;
        }
        if let Some(v) = arrow.head_angle {
            config.arrow.head_angle = v;
        }
        if let Some(v) = arrow.head_length {
            config.arrow.head_length = v;
        }
        if let Some(v) = arrow.stroke_width {
            config.arrow.stroke_width = v;
        }
        if let Some(v) = arrow.steps {
            config.arrow.steps = v;
        }
    }
    if let Some(font) = parsed.font {
        if let Some(v) = font.family {
            config.font.family = v;
        }
        if let Some(v) = font.size {
            config.font.size = v;
        }
        if let Some(v) = font.label_size {
            config.font.label_size = v;
        }
        if let Some(v) = font.label_weight {
            config.font.label_weight = v;
        }
        if let Some(v) = font.label_underline {
            config.font.label_underline = v;
        }
        if let Some(v) = font.line_height {
            config.font.line_height = v;
        }
    }
    if let Some(colors) = parsed.colors {
        config.colors = colors;
    }
    if let Some(save_image) = parsed.save_image {
        config.save_image = save_image;
    }

    Ok(config)
}
