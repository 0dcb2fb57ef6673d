//! Material lookup tables.
//!
//! Two read-only mappings are composed to color a node:
//! material code -> material class name -> display color.
//! Each step has an explicit fallback, so lookups never fail.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::MaterialCode;

/// Class name used when a material code is not in the name table.
pub const UNKNOWN_MATERIAL_CLASS: &str = "UNKNOWN";
/// Color used when a material class is not in the color table.
pub const FALLBACK_COLOR: &str = "purple";

/// Built-in material tables used when configuration supplies none.
static BUILTIN: Lazy<MaterialTables> = Lazy::new(|| {
    let names = [
        ("1", "CONCRETE"),
        ("2", "METAL"),
        ("3", "WOOD"),
        ("4", "GRASS"),
        ("5", "SAND"),
        ("6", "WATER"),
        ("7", "SNOW"),
        ("8", "GLASS"),
        ("9", "DIRT"),
    ];
    let colors = [
        ("CONCRETE", "gray"),
        ("METAL", "silver"),
        ("WOOD", "brown"),
        ("GRASS", "green"),
        ("SAND", "yellow"),
        ("WATER", "blue"),
        ("SNOW", "white"),
        ("GLASS", "cyan"),
        ("DIRT", "orange"),
    ];

    MaterialTables {
        names: names
            .iter()
            .map(|(code, class)| (code.to_string(), class.to_string()))
            .collect(),
        colors: colors
            .iter()
            .map(|(class, color)| (class.to_string(), color.to_string()))
            .collect(),
    }
});

/// Material name and color tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MaterialTables {
    /// Material code -> material class name.
    #[serde(default)]
    pub names: HashMap<String, String>,
    /// Material class name -> display color.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl MaterialTables {
    /// The built-in tables.
    pub fn builtin() -> &'static MaterialTables {
        &BUILTIN
    }

    /// Layer `overrides` on top of these tables. Override entries win.
    pub fn merged_with(&self, overrides: &MaterialTables) -> MaterialTables {
        let mut merged = self.clone();
        merged
            .names
            .extend(overrides.names.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
            .colors
            .extend(overrides.colors.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Canonical class name for a material code, or [`UNKNOWN_MATERIAL_CLASS`].
    pub fn class_name(&self, code: &MaterialCode) -> &str {
        self.names
            .get(code.as_str())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_MATERIAL_CLASS)
    }

    /// Display color for a material class, or [`FALLBACK_COLOR`].
    pub fn color_for_class(&self, class: &str) -> &str {
        self.colors
            .get(class)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Display color for a material code (both lookups composed).
    pub fn color_for_material(&self, code: &MaterialCode) -> &str {
        self.color_for_class(self.class_name(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> MaterialTables {
        MaterialTables {
            names: HashMap::from([
                ("A".to_string(), "STONE".to_string()),
                ("B".to_string(), "LAVA".to_string()),
            ]),
            colors: HashMap::from([("STONE".to_string(), "gray".to_string())]),
        }
    }

    #[test]
    fn test_known_material_resolves_through_both_tables() {
        assert_eq!(tables().color_for_material(&"A".into()), "gray");
    }

    #[test]
    fn test_unknown_code_uses_unknown_class() {
        let tables = tables();
        assert_eq!(tables.class_name(&"Z".into()), UNKNOWN_MATERIAL_CLASS);
        assert_eq!(tables.color_for_material(&"Z".into()), FALLBACK_COLOR);
    }

    #[test]
    fn test_class_without_color_falls_back() {
        assert_eq!(tables().color_for_material(&"B".into()), FALLBACK_COLOR);
    }

    #[test]
    fn test_unknown_class_color_is_used_when_configured() {
        let mut tables = tables();
        tables
            .colors
            .insert(UNKNOWN_MATERIAL_CLASS.to_string(), "black".to_string());
        assert_eq!(tables.color_for_material(&"Z".into()), "black");
    }

    #[test]
    fn test_builtin_has_no_unknown_color() {
        let builtin = MaterialTables::builtin();
        assert_eq!(builtin.color_for_material(&"Z".into()), FALLBACK_COLOR);
        assert_eq!(builtin.color_for_material(&MaterialCode::from(4)), "green");
    }

    #[test]
    fn test_merge_overrides_win() {
        let overrides = MaterialTables {
            names: HashMap::from([("4".to_string(), "SNOW".to_string())]),
            colors: HashMap::new(),
        };
        let merged = MaterialTables::builtin().merged_with(&overrides);
        assert_eq!(merged.color_for_material(&MaterialCode::from(4)), "white");
        assert_eq!(merged.color_for_material(&MaterialCode::from(6)), "blue");
    }
}
