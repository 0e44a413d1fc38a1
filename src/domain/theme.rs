use serde::Deserialize;

/// The closed set of document themes offered by the form's selector.
///
/// Form values arrive as `light_blue` / `warm_yellow` / `classic_gray`;
/// anything else is rejected at the deserialization boundary, so the
/// registry below never has to validate its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    LightBlue,
    WarmYellow,
    ClassicGray,
}

/// The color triple a theme contributes to the document stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Background of the article panel.
    pub left: &'static str,
    /// Background of the highlights panel.
    pub right: &'static str,
    /// Heading text color.
    pub accent: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::LightBlue, Theme::WarmYellow, Theme::ClassicGray];

    /// Total mapping: every variant has a registry entry, no fallback needed.
    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::LightBlue => ThemeColors {
                left: "#f0f7ff",
                right: "#e8f1ff",
                accent: "#1f4e79",
            },
            Theme::WarmYellow => ThemeColors {
                left: "#fff7e6",
                right: "#fff0cc",
                accent: "#a86f00",
            },
            Theme::ClassicGray => ThemeColors {
                left: "#f5f5f5",
                right: "#ededed",
                accent: "#333333",
            },
        }
    }
}
