pub(crate) mod flight;
pub(crate) mod orbit;

pub use flight::{flight_plugin, ActiveFlight, Flight};
pub use orbit::{orbit_camera_plugin, CameraRig};
