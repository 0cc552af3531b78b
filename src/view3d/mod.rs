pub mod camera;
pub mod furniture;
pub mod primitives;
pub mod scene;
pub mod walls;

pub use camera::{CameraPreset, OrbitCamera};
pub use scene::RoomScene;
pub use walls::{WallSide, WallVisibility};
