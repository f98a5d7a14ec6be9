//! The hand-authored storyboard the binary renders.
//!
//! Nodes are added in dependency order so every connection targets a node
//! that already exists; the scene resolver relies on that ordering.

use crate::color::Rgb;
use crate::connection::{Anchor, Connection};
use crate::scene::{PlotPoint, Scene};

pub fn sample_storyboard() -> Scene {
    let mut scene = Scene::new();

    let climax = scene.add(PlotPoint {
        percent_time: 0.6,
        vertical: 0.5,
        plot_line: 0.0,
        point_type: "Climax".to_string(),
        content: vec![
            "The heist collapses mid-vault".to_string(),
            "Mara chooses the crew over the score".to_string(),
        ],
        override_color: Some(Rgb(0, 0, 0)),
        ..Default::default()
    });

    let pinch_one = scene.add(PlotPoint {
        percent_time: 0.4,
        vertical: 0.02,
        plot_line: 1.0,
        point_type: "Pinch Point 1".to_string(),
        content: vec![
            "The fence doubles his price".to_string(),
            "First glimpse of the rival crew".to_string(),
        ],
        connections: vec![Connection {
            end_anchor: Some(Anchor::Left),
            rotate_head: 40.0,
            ..Connection::to(climax)
        }],
        override_color: Some(Rgb(255, 127, 0)),
        ..Default::default()
    });

    let plot_point_one = scene.add(PlotPoint {
        percent_time: 0.25,
        vertical: 0.33,
        plot_line: 2.0,
        point_type: "Plot Point 1".to_string(),
        content: vec![
            "Mara takes the job".to_string(),
            "The blueprints are wrong".to_string(),
            "Deadline moves up a week".to_string(),
            "No way out of the contract".to_string(),
            "The crew assembles".to_string(),
        ],
        connections: vec![Connection::to(pinch_one), Connection::to(climax)],
        override_height: Some(300.0),
        ..Default::default()
    });

    scene.add(PlotPoint {
        percent_time: 0.1,
        vertical: 0.75,
        plot_line: 3.0,
        point_type: "Opening Image".to_string(),
        connections: vec![
            Connection {
                start_anchor: Some(Anchor::Right),
                end_anchor: Some(Anchor::Bottom),
                ..Connection::to(pinch_one)
            },
            Connection {
                start_anchor: Some(Anchor::Right),
                end_anchor: Some(Anchor::Bottom),
                ..Connection::to(plot_point_one)
            },
        ],
        ..Default::default()
    });

    scene
}
