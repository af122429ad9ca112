//! SDK entry points and builder for composing the graph universe app.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::{flight_plugin, orbit_camera_plugin};
use crate::data::{init_fixture_channel, init_graph_channel, FetchConfig};
use crate::render::{GraphRenderer, RendererResource, SphereRenderer};
use crate::scene::{
    billboard_labels_system, draw_edges_system, idle_bob_system, ingest_graph,
    label_distance_cull_system, label_follow_system, setup_scene, starfield_plugin,
};
use crate::ui::{hud_plugin, inspector_plugin, HudState};

/// Builder for constructing a Cosmos app with customizable plugins.
pub struct UniverseBuilder {
    config: Option<FetchConfig>,
    fixture: Option<PathBuf>,
    renderer: Option<Box<dyn GraphRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_hud: bool,
    enable_inspector: bool,
    enable_starfield: bool,
}

impl Default for UniverseBuilder {
    fn default() -> Self {
        Self {
            config: None,
            fixture: None,
            renderer: None,
            window_title: "Cosmos".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.01, 0.01, 0.04),
            enable_orbit_camera: true,
            enable_hud: true,
            enable_inspector: true,
            enable_starfield: true,
        }
    }
}

impl UniverseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll a live endpoint for graph snapshots.
    pub fn config(mut self, config: FetchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replay snapshots from a JSON fixture file instead of a live endpoint.
    pub fn fixture(mut self, path: PathBuf) -> Self {
        self.fixture = Some(path);
        self
    }

    /// Provide a custom node renderer implementation.
    pub fn renderer(mut self, renderer: impl GraphRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    /// Also disables click-to-fly navigation, which rides on the inspector's
    /// raycast.
    pub fn disable_inspector(mut self) -> Self {
        self.enable_inspector = false;
        self
    }

    pub fn disable_starfield(mut self) -> Self {
        self.enable_starfield = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let channel = if let Some(path) = &self.fixture {
            init_fixture_channel(path)
        } else {
            let config = self
                .config
                .expect("UniverseBuilder: set a fetch config or a fixture before build()");
            init_graph_channel(config)
        };
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(SphereRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(channel)
        .init_resource::<HudState>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                ingest_graph,
                idle_bob_system,
                label_follow_system,
                billboard_labels_system,
                label_distance_cull_system,
                draw_edges_system,
            ),
        );

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        app.add_plugins(flight_plugin);

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_inspector {
            app.add_plugins(inspector_plugin);
        }
        if self.enable_starfield {
            app.add_plugins(starfield_plugin);
        }

        app
    }
}
