pub mod color;
pub mod element;

pub use color::{color_scheme, room_palette, Rgb, SchemeKind};
pub use element::{DesignElement, Dimensions, ElementKind, FurnitureKind};
