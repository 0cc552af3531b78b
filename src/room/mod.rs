pub mod shape;
pub mod store;

pub use shape::{Room, RoomShape};
pub use store::Design;
