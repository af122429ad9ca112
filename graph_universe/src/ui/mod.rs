mod hud;
mod inspector;

pub use hud::{hud_plugin, HudState, Notice};
pub use inspector::{inspector_plugin, SelectedNode};
