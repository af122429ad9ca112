//! Shared material and color helpers for node markers and edges.

use bevy::prelude::*;

// Ten hues cycled by group index; groups past the palette wrap around.
const GROUP_PALETTE: [(f32, f32, f32); 10] = [
    (0.36, 0.72, 0.98),
    (0.98, 0.55, 0.35),
    (0.45, 0.88, 0.55),
    (0.90, 0.42, 0.78),
    (0.95, 0.85, 0.40),
    (0.55, 0.50, 0.95),
    (0.40, 0.90, 0.85),
    (0.95, 0.45, 0.45),
    (0.70, 0.82, 0.45),
    (0.75, 0.60, 0.95),
];

pub fn group_color(group_index: usize) -> Color {
    let (r, g, b) = GROUP_PALETTE[group_index % GROUP_PALETTE.len()];
    Color::srgb(r, g, b)
}

pub fn node_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    group_index: usize,
) -> Handle<StandardMaterial> {
    let color = group_color(group_index);
    let lin = color.to_linear();
    materials.add(StandardMaterial {
        base_color: color,
        emissive: LinearRgba::rgb(lin.red * 0.25, lin.green * 0.25, lin.blue * 0.25),
        ..default()
    })
}

pub fn edge_color() -> Color {
    Color::srgba(0.55, 0.70, 0.90, 0.55)
}
