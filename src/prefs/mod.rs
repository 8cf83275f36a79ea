//! User preferences: keybinding mode, layout orientation, output format
//!
//! Each preference is an independent enumeration whose default is its
//! first variant. String forms are what gets persisted and what the
//! shell's `<select>` controls exchange with the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted preference value that no variant of the setting matches.
///
/// Callers restoring from storage treat this as "absent" and fall back
/// to the default rather than surfacing it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized {setting} value {value:?}")]
pub struct InvalidPreference {
    pub setting: &'static str,
    pub value: String,
}

macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident($setting:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The persisted / wire string form of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidPreference;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(InvalidPreference {
                        setting: $setting,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

preference_enum! {
    /// Editor keybinding mode, consumed by the embedding editor widget.
    Keybinding("keybinding") {
        #[default]
        Normal => "normal",
        Vim => "vim",
        Emacs => "emacs",
    }
}

preference_enum! {
    /// Editor/preview split orientation, consumed by the embedding layout.
    Orientation("orientation") {
        #[default]
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

preference_enum! {
    /// Rendering service output format. `Img` selects raster output; the
    /// service's path segment is literally `img`, not `png`.
    OutputFormat("output format") {
        #[default]
        Svg => "svg",
        Img => "img",
    }
}

/// The three independent preferences, as restored at startup and
/// mutated by the selection controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub keybinding: Keybinding,
    pub orientation: Orientation,
    pub output_format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_variants() {
        let prefs = PreferenceSet::default();
        assert_eq!(prefs.keybinding, Keybinding::Normal);
        assert_eq!(prefs.orientation, Orientation::Vertical);
        assert_eq!(prefs.output_format, OutputFormat::Svg);
    }

    #[test]
    fn test_string_forms_round_trip() {
        for kb in [Keybinding::Normal, Keybinding::Vim, Keybinding::Emacs] {
            assert_eq!(kb.as_str().parse::<Keybinding>().unwrap(), kb);
        }
        for or in [Orientation::Vertical, Orientation::Horizontal] {
            assert_eq!(or.as_str().parse::<Orientation>().unwrap(), or);
        }
        for fmt in [OutputFormat::Svg, OutputFormat::Img] {
            assert_eq!(fmt.as_str().parse::<OutputFormat>().unwrap(), fmt);
        }
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "sublime".parse::<Keybinding>().unwrap_err();
        assert_eq!(err.setting, "keybinding");
        assert_eq!(err.value, "sublime");
        assert!("png".parse::<OutputFormat>().is_err());
    }
}
