//! HUD overlay: status notice, graph counts, FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// User-visible status line. Errors (fetch/transport failures) and the
/// empty-graph notice are distinct surfaces; `None` means the last fetch
/// succeeded with data and the line is hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

/// Live HUD state updated each time the scene is rebuilt or a fetch fails.
#[derive(Resource, Default)]
pub struct HudState {
    pub notice: Option<Notice>,
    pub node_count: usize,
    pub edge_count: usize,
    pub group_count: usize,
    pub dropped_edges: usize,
    pub refreshes: u64,
}

impl HudState {
    pub fn record_refresh(
        &mut self,
        node_count: usize,
        edge_count: usize,
        group_count: usize,
        dropped_edges: usize,
    ) {
        self.node_count = node_count;
        self.edge_count = edge_count;
        self.group_count = group_count;
        self.dropped_edges = dropped_edges;
        self.refreshes += 1;
        self.notice = if node_count == 0 {
            Some(Notice::Info("endpoint returned an empty graph".to_string()))
        } else {
            None
        };
    }

    pub fn record_failure(&mut self, message: String) {
        self.notice = Some(Notice::Error(message));
    }
}

/// Expects `EguiPlugin` to already be on the app (the builder adds it once
/// for all overlay plugins).
pub fn hud_plugin(app: &mut App) {
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .init_resource::<HudState>()
        .add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    hud: Res<HudState>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Graph Universe")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new("Graph Universe")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("Nodes  {}", hud.node_count));
            ui.label(format!("Edges  {}", hud.edge_count));
            ui.label(format!("Groups {}", hud.group_count));
            if hud.dropped_edges > 0 {
                ui.label(
                    egui::RichText::new(format!("Dropped edges {}", hud.dropped_edges))
                        .color(egui::Color32::from_rgb(140, 160, 180)),
                );
            }
            ui.add_space(4.0);

            match &hud.notice {
                Some(Notice::Error(message)) => {
                    ui.label(
                        egui::RichText::new(format!("Error: {message}"))
                            .color(egui::Color32::from_rgb(235, 110, 110)),
                    );
                }
                Some(Notice::Info(message)) => {
                    ui.label(
                        egui::RichText::new(message)
                            .color(egui::Color32::from_rgb(230, 200, 120)),
                    );
                }
                None => {}
            }

            ui.separator();
            ui.label(format!("Refreshes  {}", hud.refreshes));
            ui.label(format!("FPS  {fps:.0}"));
        });
}
