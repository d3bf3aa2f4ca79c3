use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};
use unicode_width::UnicodeWidthStr;

use crate::error::ScaleError;

/// Discrete size tiers for the trailing clear icon.
///
/// Each tier is a divisor applied to the icon's intrinsic width, so `Small`
/// renders the narrowest glyph and `Big` the widest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconScale {
    Small,
    #[default]
    Normal,
    Big,
}

impl IconScale {
    pub const fn divisor(self) -> u16 {
        match self {
            IconScale::Small => 3,
            IconScale::Normal => 2,
            IconScale::Big => 1,
        }
    }

    /// Maps the wire-level divisor constants (1, 2, 3) back to a tier.
    ///
    /// Anything outside that set is rejected rather than left to mis-render.
    pub fn from_divisor(value: u8) -> Result<Self, ScaleError> {
        match value {
            1 => Ok(IconScale::Big),
            2 => Ok(IconScale::Normal),
            3 => Ok(IconScale::Small),
            other => Err(ScaleError::new(other.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IconScale::Small => "small",
            IconScale::Normal => "normal",
            IconScale::Big => "big",
        }
    }
}

impl fmt::Display for IconScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconScale {
    type Err = ScaleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "small" => Ok(IconScale::Small),
            "normal" => Ok(IconScale::Normal),
            "big" => Ok(IconScale::Big),
            other => match other.parse::<u8>() {
                Ok(divisor) => IconScale::from_divisor(divisor),
                Err(_) => Err(ScaleError::new(raw)),
            },
        }
    }
}

impl Serialize for IconScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for IconScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScaleVisitor;

        impl de::Visitor<'_> for ScaleVisitor {
            type Value = IconScale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an icon scale name (small, normal, big) or divisor (1, 2, 3)")
            }

            fn visit_str<E>(self, raw: &str) -> Result<IconScale, E>
            where
                E: de::Error,
            {
                raw.parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(raw), &self))
            }

            fn visit_u64<E>(self, raw: u64) -> Result<IconScale, E>
            where
                E: de::Error,
            {
                u8::try_from(raw)
                    .ok()
                    .and_then(|divisor| IconScale::from_divisor(divisor).ok())
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(raw), &self))
            }

            fn visit_i64<E>(self, raw: i64) -> Result<IconScale, E>
            where
                E: de::Error,
            {
                if let Ok(raw) = u64::try_from(raw) {
                    self.visit_u64(raw)
                } else {
                    Err(E::invalid_value(Unexpected::Signed(raw), &ScaleVisitor))
                }
            }
        }

        deserializer.deserialize_any(ScaleVisitor)
    }
}

/// The trailing clear decoration: a glyph with an intrinsic column width.
///
/// The asset is handed to the field at construction instead of being looked
/// up from a global registry; the default is a ✕ six columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearIcon {
    glyph: String,
    intrinsic_width: u16,
}

impl Default for ClearIcon {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GLYPH, Self::DEFAULT_INTRINSIC_WIDTH)
    }
}

impl ClearIcon {
    pub const DEFAULT_GLYPH: &'static str = "✕";
    /// Default unscaled width, in terminal columns.
    pub const DEFAULT_INTRINSIC_WIDTH: u16 = 6;
    /// A terminal row cannot be subdivided; scale divisors only apply to width.
    pub const INTRINSIC_HEIGHT: u16 = 1;

    pub fn new(glyph: impl Into<String>, intrinsic_width: u16) -> Self {
        Self {
            glyph: glyph.into(),
            intrinsic_width,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Unscaled width. Hit-testing always spans this many columns, whatever
    /// the current tier renders.
    pub fn intrinsic_width(&self) -> u16 {
        self.intrinsic_width
    }

    pub fn scaled_width(&self, scale: IconScale) -> u16 {
        self.intrinsic_width / scale.divisor()
    }

    /// The glyph centered within its scaled width.
    pub fn symbol(&self, scale: IconScale) -> String {
        let width = self.scaled_width(scale) as usize;
        let glyph_width = self.glyph.width().min(width);
        let left = (width - glyph_width) / 2;
        let right = width - glyph_width - left;
        format!("{}{}{}", " ".repeat(left), self.glyph, " ".repeat(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors_map_to_tiers() {
        assert_eq!(IconScale::from_divisor(1).unwrap(), IconScale::Big);
        assert_eq!(IconScale::from_divisor(2).unwrap(), IconScale::Normal);
        assert_eq!(IconScale::from_divisor(3).unwrap(), IconScale::Small);
    }

    #[test]
    fn out_of_range_divisors_are_rejected() {
        assert!(IconScale::from_divisor(0).is_err());
        assert!(IconScale::from_divisor(4).is_err());
        let err = IconScale::from_divisor(7).unwrap_err();
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn scaled_widths_are_strictly_ordered() {
        let icon = ClearIcon::default();
        let big = icon.scaled_width(IconScale::Big);
        let normal = icon.scaled_width(IconScale::Normal);
        let small = icon.scaled_width(IconScale::Small);
        assert!(big > normal, "big ({big}) should outsize normal ({normal})");
        assert!(
            normal > small,
            "normal ({normal}) should outsize small ({small})"
        );
    }

    #[test]
    fn symbol_fills_the_scaled_width() {
        let icon = ClearIcon::default();
        for scale in [IconScale::Small, IconScale::Normal, IconScale::Big] {
            let symbol = icon.symbol(scale);
            assert_eq!(symbol.width() as u16, icon.scaled_width(scale));
            assert!(symbol.contains(icon.glyph()));
        }
    }

    #[test]
    fn custom_assets_keep_their_geometry() {
        let icon = ClearIcon::new("×", 9);
        assert_eq!(icon.scaled_width(IconScale::Small), 3);
        assert_eq!(icon.scaled_width(IconScale::Big), 9);
        assert_eq!(icon.symbol(IconScale::Small), " × ");
    }

    #[test]
    fn parses_names_and_divisors() {
        assert_eq!("big".parse::<IconScale>().unwrap(), IconScale::Big);
        assert_eq!("NORMAL".parse::<IconScale>().unwrap(), IconScale::Normal);
        assert_eq!("3".parse::<IconScale>().unwrap(), IconScale::Small);
        assert!("huge".parse::<IconScale>().is_err());
    }

    #[test]
    fn deserializes_from_name_or_divisor() {
        let scale: IconScale = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(scale, IconScale::Small);
        let scale: IconScale = serde_json::from_str("1").unwrap();
        assert_eq!(scale, IconScale::Big);
        assert!(serde_json::from_str::<IconScale>("5").is_err());
        assert!(serde_json::from_str::<IconScale>("\"giant\"").is_err());
    }
}
