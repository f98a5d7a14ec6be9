#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod connection;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod storyboard;

pub use color::Rgb;
pub use config::{ArrowheadStyle, Config};
pub use connection::{Anchor, Arrow, Connection};
pub use render::render_svg;
pub use scene::{NodeId, PlotPoint, ResolvedScene, Scene, SceneError, Shape};
pub use storyboard::sample_storyboard;

#[cfg(feature = "cli")]
pub use cli::run;
