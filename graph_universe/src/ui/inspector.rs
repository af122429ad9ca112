//! Node inspector: click a marker to fly to it and see its details.
//!
//! Uses manual ray-AABB intersection instead of Bevy's mesh picking to avoid
//! input absorption conflicts with bevy_egui.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy_egui::{egui, EguiContexts};

use crate::camera::{ActiveFlight, CameraRig, Flight};
use crate::scene::NodeMarker;

/// Tracks which marker is selected and its original material for highlight
/// restore. Selection survives only until the next rebuild despawns the
/// entity; every accessor tolerates a stale entity id.
#[derive(Resource, Default)]
pub struct SelectedNode {
    pub entity: Option<Entity>,
    original_material: Option<Handle<StandardMaterial>>,
}

/// Expects `EguiPlugin` on the app already (added once by the builder).
pub fn inspector_plugin(app: &mut App) {
    app.init_resource::<SelectedNode>()
        .init_resource::<ActiveFlight>()
        .init_resource::<CameraRig>()
        .add_systems(
            Update,
            (
                click_raycast_system,
                inspector_panel_system,
                dismiss_selection_system,
            ),
        );
}

/// Raycasts node markers on left click. The nearest hit is selected,
/// highlighted, and becomes the destination of a camera flight; a click
/// during a flight supersedes it from the flight's current state.
#[allow(clippy::too_many_arguments)]
fn click_raycast_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    markers: Query<(Entity, &GlobalTransform, &Aabb), With<NodeMarker>>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut selected: ResMut<SelectedNode>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
    mut active: ResMut<ActiveFlight>,
    rig: Res<CameraRig>,
    time: Res<Time>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let window = windows.single();
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let (camera, cam_transform) = cameras.single();
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor_pos) else {
        return;
    };

    let ray_origin = ray.origin;
    let ray_dir: Vec3 = *ray.direction;

    let mut best_hit: Option<(Entity, Vec3, f32)> = None;
    for (entity, transform, aabb) in &markers {
        if let Some(dist) = ray_aabb_test(ray_origin, ray_dir, transform, aabb) {
            if best_hit.is_none_or(|(_, _, d)| dist < d) {
                best_hit = Some((entity, transform.translation(), dist));
            }
        }
    }

    let Some((hit_entity, hit_position, _)) = best_hit else {
        return;
    };

    // Begin (or supersede) the flight toward the clicked node.
    let now = time.elapsed_secs();
    let eye = cam_transform.translation();
    let focus = match active.0.as_ref() {
        Some(flight) => flight.sample(flight.progress(now)).1,
        None => rig.focus,
    };
    active.0 = Some(Flight::toward(hit_position, eye, focus, now));

    let Ok(current_material) = material_query.get(hit_entity) else {
        return;
    };
    select_node(
        hit_entity,
        &mut commands,
        current_material,
        &mut selected,
        &mut materials,
    );
}

fn ray_aabb_test(
    ray_origin: Vec3,
    ray_dir: Vec3,
    transform: &GlobalTransform,
    aabb: &Aabb,
) -> Option<f32> {
    let translation = transform.translation();
    let center: Vec3 = aabb.center.into();
    let half: Vec3 = aabb.half_extents.into();
    let aabb_min = translation + center - half;
    let aabb_max = translation + center + half;
    ray_aabb_intersect(ray_origin, ray_dir, aabb_min, aabb_max)
}

fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

fn select_node(
    entity: Entity,
    commands: &mut Commands,
    current_material: &MeshMaterial3d<StandardMaterial>,
    selected: &mut SelectedNode,
    materials: &mut Assets<StandardMaterial>,
) {
    let is_reselect = selected.entity == Some(entity);

    restore_material(commands, selected);

    if is_reselect {
        return;
    }

    selected.entity = Some(entity);
    selected.original_material = Some(current_material.0.clone());

    if let Some(mat_data) = materials.get(&current_material.0) {
        let mut highlight = mat_data.clone();
        highlight.emissive = LinearRgba::rgb(0.2, 0.8, 0.6);
        let handle = materials.add(highlight);
        commands.entity(entity).insert(MeshMaterial3d(handle));
    }
}

fn restore_material(commands: &mut Commands, selected: &mut SelectedNode) {
    if let (Some(entity), Some(original)) =
        (selected.entity.take(), selected.original_material.take())
    {
        // The marker may have been despawned by a rebuild since selection.
        if let Some(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.insert(MeshMaterial3d(original));
        }
    }
}

fn dismiss_selection_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut selected: ResMut<SelectedNode>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        restore_material(&mut commands, &mut selected);
    }
}

fn inspector_panel_system(
    mut contexts: EguiContexts,
    selected: Res<SelectedNode>,
    markers: Query<&NodeMarker>,
) {
    let Some(entity) = selected.entity else {
        return;
    };
    let Ok(marker) = markers.get(entity) else {
        return;
    };

    egui::SidePanel::right("inspector")
        .default_width(260.0)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
                .inner_margin(egui::Margin::same(14)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(&marker.name)
                    .size(18.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(
                egui::RichText::new(format!("Group  {}", marker.group))
                    .size(12.0)
                    .color(egui::Color32::from_rgb(140, 160, 180)),
            );
            ui.label(
                egui::RichText::new(format!("Id     {}", marker.id))
                    .size(12.0)
                    .color(egui::Color32::from_rgb(140, 160, 180)),
            );
            ui.add_space(8.0);

            if let Some(description) = marker
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
            {
                ui.label(description);
                ui.add_space(8.0);
            }

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Esc to dismiss")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(120, 120, 140)),
            );
        });
}
