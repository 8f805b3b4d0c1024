//! Layout configuration files
//!
//! A layout file is the JSON form of [`SheetLayout`]. Omitted keys keep their
//! standard values, so a file only needs to list what differs:
//!
//! ```json
//! { "header_row": 6, "group_header_row": 5 }
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;
use rota_core::SheetLayout;

/// Read a layout from a JSON file
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<SheetLayout> {
    let path = path.as_ref();
    tracing::debug!("Loading layout from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_layout(&text)
}

/// Parse a layout from JSON text
pub fn parse_layout(text: &str) -> Result<SheetLayout> {
    Ok(serde_json::from_str(text)?)
}

/// Pretty JSON for a layout
pub fn layout_to_json(layout: &SheetLayout) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use rota_core::{CellAddress, Offset};

    #[test]
    fn test_partial_layout_keeps_defaults() {
        let layout = parse_layout(r#"{ "header_row": 6, "below": { "rows": 2, "cols": 0 } }"#)
            .unwrap();
        assert_eq!(layout.header_row, 6);
        assert_eq!(layout.below, Offset::new(2, 0));
        assert_eq!(layout.group_header_row, 4);
        assert_eq!(layout.title, CellAddress::new(0, 1));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = layout_to_json(&SheetLayout::default()).unwrap();
        assert_eq!(parse_layout(&json).unwrap(), SheetLayout::default());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(parse_layout("{ header_row"), Err(Error::Layout(_))));
        assert!(matches!(
            parse_layout(r#"{ "header_row": -1 }"#),
            Err(Error::Layout(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "period": { "row": 3, "col": 2 } }"#).unwrap();
        let layout = load_layout(&path).unwrap();
        assert_eq!(layout.period.to_string(), "C4");
    }
}
