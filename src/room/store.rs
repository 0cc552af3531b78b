//! Design loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable design files.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::design::DesignElement;
use crate::room::Room;

/// A complete saved design: the room plus every placed element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub room: Room,
    pub elements: Vec<DesignElement>,
}

impl Design {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            elements: Vec::new(),
        }
    }
}

/// Error type for design loading
#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    InvalidDesign(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for StoreError {
    fn from(e: ron::error::SpannedError) -> Self {
        StoreError::ParseError(e)
    }
}

impl From<ron::Error> for StoreError {
    fn from(e: ron::Error) -> Self {
        StoreError::SerializeError(e)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::ParseError(e) => write!(f, "Parse error: {}", e),
            StoreError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            StoreError::InvalidDesign(msg) => write!(f, "Invalid design: {}", msg),
        }
    }
}

/// Load a design from a RON file
pub fn load_design<P: AsRef<Path>>(path: P) -> Result<Design, StoreError> {
    let contents = fs::read_to_string(path)?;
    load_design_from_str(&contents)
}

/// Save a design to a RON file
pub fn save_design<P: AsRef<Path>>(design: &Design, path: P) -> Result<(), StoreError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(design, config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a design from a RON string (for embedded designs or testing)
pub fn load_design_from_str(s: &str) -> Result<Design, StoreError> {
    let design: Design = ron::from_str(s)?;
    design
        .room
        .validate()
        .map_err(StoreError::InvalidDesign)?;
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{FurnitureKind, Rgb};
    use crate::room::RoomShape;

    fn sample_design() -> Design {
        let room = Room::new(
            RoomShape::Rectangle {
                width: 5.0,
                length: 4.0,
            },
            2.8,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        );
        let mut design = Design::new(room);
        design.elements.push(DesignElement::furniture(
            FurnitureKind::Sofa,
            2.5,
            2.0,
            Rgb::new(0x8a, 0x66, 0x42),
            45.0,
        ));
        design
    }

    #[test]
    fn test_ron_round_trip() {
        let design = sample_design();
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(&design, config).unwrap();
        let loaded = load_design_from_str(&text).unwrap();
        assert_eq!(loaded, design);
    }

    #[test]
    fn test_round_trip_preserves_element_fields() {
        let mut design = sample_design();
        design.elements[0] = design.elements[0].with_shading(0.3);
        let text = ron::to_string(&design).unwrap();
        let loaded = load_design_from_str(&text).unwrap();
        let e = &loaded.elements[0];
        assert_eq!(e.id, design.elements[0].id);
        assert_eq!(e.rotation, 45.0);
        assert!(e.shaded);
        assert_eq!(e.shading_intensity, Some(0.3));
    }

    #[test]
    fn test_rejects_invalid_room() {
        let mut design = sample_design();
        design.room.height = -1.0;
        let text = ron::to_string(&design).unwrap();
        assert!(matches!(
            load_design_from_str(&text),
            Err(StoreError::InvalidDesign(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            load_design_from_str("not a design"),
            Err(StoreError::ParseError(_))
        ));
    }
}
