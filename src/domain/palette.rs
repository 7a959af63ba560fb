//! Palette catalog. Fixed colour palette per tone category.
//!
//! Pure lookup. Anything that does not name one of the four categories gets
//! the Medium palette, which is also what the degraded path assumes.

use super::entities::{ColorPalette, SkinTone};

struct PaletteSpec {
    primary: &'static [&'static str],
    secondary: &'static [&'static str],
    accent: &'static [&'static str],
    avoid: &'static [&'static str],
}

const FAIR: PaletteSpec = PaletteSpec {
    primary: &["Navy Blue", "Emerald Green", "Burgundy", "Charcoal"],
    secondary: &["Soft Pink", "Lavender", "Mint Green", "Peach"],
    accent: &["Gold", "Coral", "Turquoise"],
    avoid: &["Neon Yellow", "Orange", "Beige"],
};

const MEDIUM: PaletteSpec = PaletteSpec {
    primary: &["Royal Blue", "Crimson", "Forest Green", "Plum"],
    secondary: &["Teal", "Coral", "Lemon Yellow", "Magenta"],
    accent: &["Silver", "Bronze", "Fuchsia"],
    avoid: &["Brown", "Muted Olive"],
};

const OLIVE: PaletteSpec = PaletteSpec {
    primary: &["Cream", "Rust", "Deep Purple", "Terracotta"],
    secondary: &["Peach", "Soft White", "Dusty Rose", "Khaki"],
    accent: &["Gold", "Copper", "Mint"],
    avoid: &["Green", "Yellow-green"],
};

const DEEP: PaletteSpec = PaletteSpec {
    primary: &["Pure White", "Bright Orange", "Hot Pink", "Electric Blue"],
    secondary: &["Lime Green", "Red", "Yellow", "Cobalt"],
    accent: &["Gold", "Bronze", "Neon shades"],
    avoid: &["Brown", "Navy", "Muted tones"],
};

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl PaletteSpec {
    fn to_palette(&self) -> ColorPalette {
        ColorPalette {
            primary: owned(self.primary),
            secondary: owned(self.secondary),
            accent: owned(self.accent),
            avoid: owned(self.avoid),
        }
    }
}

pub fn palette_for(tone: SkinTone) -> ColorPalette {
    let spec = match tone {
        SkinTone::Fair => &FAIR,
        SkinTone::Medium => &MEDIUM,
        SkinTone::Olive => &OLIVE,
        SkinTone::Deep => &DEEP,
    };
    spec.to_palette()
}

/// Lookup by category name; unknown names fall back to Medium.
pub fn palette_for_label(label: &str) -> ColorPalette {
    palette_for(SkinTone::from_label(label).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fair_palette_exact() {
        let p = palette_for(SkinTone::Fair);
        assert_eq!(
            p.primary,
            names(&["Navy Blue", "Emerald Green", "Burgundy", "Charcoal"])
        );
        assert_eq!(
            p.secondary,
            names(&["Soft Pink", "Lavender", "Mint Green", "Peach"])
        );
        assert_eq!(p.accent, names(&["Gold", "Coral", "Turquoise"]));
        assert_eq!(p.avoid, names(&["Neon Yellow", "Orange", "Beige"]));
    }

    #[test]
    fn test_medium_palette_exact() {
        let p = palette_for(SkinTone::Medium);
        assert_eq!(
            p.primary,
            names(&["Royal Blue", "Crimson", "Forest Green", "Plum"])
        );
        assert_eq!(
            p.secondary,
            names(&["Teal", "Coral", "Lemon Yellow", "Magenta"])
        );
        assert_eq!(p.accent, names(&["Silver", "Bronze", "Fuchsia"]));
        assert_eq!(p.avoid, names(&["Brown", "Muted Olive"]));
    }

    #[test]
    fn test_olive_palette_exact() {
        let p = palette_for(SkinTone::Olive);
        assert_eq!(
            p.primary,
            names(&["Cream", "Rust", "Deep Purple", "Terracotta"])
        );
        assert_eq!(
            p.secondary,
            names(&["Peach", "Soft White", "Dusty Rose", "Khaki"])
        );
        assert_eq!(p.accent, names(&["Gold", "Copper", "Mint"]));
        assert_eq!(p.avoid, names(&["Green", "Yellow-green"]));
    }

    #[test]
    fn test_deep_palette_exact() {
        let p = palette_for(SkinTone::Deep);
        assert_eq!(
            p.primary,
            names(&["Pure White", "Bright Orange", "Hot Pink", "Electric Blue"])
        );
        assert_eq!(p.secondary, names(&["Lime Green", "Red", "Yellow", "Cobalt"]));
        assert_eq!(p.accent, names(&["Gold", "Bronze", "Neon shades"]));
        assert_eq!(p.avoid, names(&["Brown", "Navy", "Muted tones"]));
    }

    #[test]
    fn test_unknown_label_falls_back_to_medium() {
        let medium = palette_for(SkinTone::Medium);
        for label in ["", "Tan", "fair", "Alien", "MEDIUM"] {
            assert_eq!(palette_for_label(label), medium, "label {label:?}");
        }
        assert_eq!(palette_for_label("Deep"), palette_for(SkinTone::Deep));
    }
}
