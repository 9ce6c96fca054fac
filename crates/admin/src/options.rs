//! Colors and sizes offered in the product form.

use serde::Deserialize;

const BUNDLED_OPTIONS: &str = include_str!("../data/customizable_products.json");

/// Swatch shown for a color the options file does not list.
pub const FALLBACK_COLOR_VALUE: &str = "#ccc";

/// A selectable color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorOption {
    pub name: String,
    /// CSS color value for the swatch.
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct CategoryOptions {
    sizes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OptionsFile {
    colors: Vec<ColorOption>,
    categories: Vec<CategoryOptions>,
}

/// Choices for the color and size checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableOptions {
    pub colors: Vec<ColorOption>,
    /// Sizes across all customizable categories, first occurrence wins.
    pub sizes: Vec<String>,
}

impl AvailableOptions {
    /// The options shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_OPTIONS)
    }

    /// Parse an options document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid options document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: OptionsFile = serde_json::from_str(json)?;

        let mut sizes: Vec<String> = Vec::new();
        for size in file.categories.into_iter().flat_map(|c| c.sizes) {
            if !sizes.contains(&size) {
                sizes.push(size);
            }
        }

        Ok(Self {
            colors: file.colors,
            sizes,
        })
    }

    /// Swatch value for a color name, or [`FALLBACK_COLOR_VALUE`].
    #[must_use]
    pub fn color_value(&self, name: &str) -> &str {
        self.colors
            .iter()
            .find(|color| color.name == name)
            .map_or(FALLBACK_COLOR_VALUE, |color| color.value.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_options_parse() {
        let options = AvailableOptions::bundled().unwrap();
        assert!(!options.colors.is_empty());
        assert!(options.sizes.iter().any(|s| s == "12oz"));
    }

    #[test]
    fn test_sizes_are_deduplicated_in_order() {
        let options = AvailableOptions::from_json(
            r#"{
                "colors": [],
                "categories": [
                    { "name": "A", "sizes": ["S", "M", "L"] },
                    { "name": "B", "sizes": ["M", "XL", "S"] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(options.sizes, vec!["S", "M", "L", "XL"]);
    }

    #[test]
    fn test_color_value_lookup() {
        let options = AvailableOptions::bundled().unwrap();
        assert_eq!(options.color_value("Preto"), "#000000");
        assert_eq!(options.color_value("Fúcsia"), FALLBACK_COLOR_VALUE);
    }
}
