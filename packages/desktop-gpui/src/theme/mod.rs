//! Theme system for the design editor shell
//!
//! A light and a dark palette; the editor starts in light mode.

mod colors;

pub use colors::*;

use gpui::*;

// ============================================================================
// Theme Structure
// ============================================================================

/// Complete theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    pub is_dark: bool,

    // Core colors
    pub primary: Hsla,
    /// "Create with AI" button
    pub success: Hsla,
    pub error: Hsla,

    // Text colors
    pub text: Hsla,
    pub text_muted: Hsla,
    pub text_on_accent: Hsla,

    // Background colors
    pub background: Hsla,
    pub background_panel: Hsla,
    pub background_element: Hsla,
    /// Editor workspace behind the page
    pub canvas: Hsla,
    pub page: Hsla,

    // Border colors
    pub border: Hsla,
    pub border_active: Hsla,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            id: "light",
            is_dark: false,
            primary: hex("#2d72d2"),
            success: hex("#238551"),
            error: hex("#cd4246"),
            text: hex("#1c2127"),
            text_muted: hex("#5f6b7c"),
            text_on_accent: hex("#ffffff"),
            background: hex("#ffffff"),
            background_panel: hex("#f6f7f9"),
            background_element: hex("#edeff2"),
            canvas: hex("#e5e8eb"),
            page: hex("#ffffff"),
            border: hex("#d3d8de"),
            border_active: hex("#2d72d2"),
        }
    }

    pub fn dark() -> Self {
        Self {
            id: "dark",
            is_dark: true,
            primary: hex("#4c90f0"),
            success: hex("#32a467"),
            error: hex("#e76a6e"),
            text: hex("#f6f7f9"),
            text_muted: hex("#abb3bf"),
            text_on_accent: hex("#ffffff"),
            background: hex("#1c2127"),
            background_panel: hex("#252a31"),
            background_element: hex("#2f343c"),
            canvas: hex("#111418"),
            page: hex("#f6f7f9"),
            border: hex("#404854"),
            border_active: hex("#4c90f0"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Global for Theme {}

// ============================================================================
// Theme Initialization
// ============================================================================

/// Initialize the theme system
pub fn init(cx: &mut App) {
    cx.set_global(Theme::default());
    tracing::debug!("Theme initialized");
}

/// Toggle between the light and dark palettes
pub fn toggle_theme_mode(cx: &mut App) {
    let theme = if cx.global::<Theme>().is_dark {
        Theme::light()
    } else {
        Theme::dark()
    };
    tracing::info!("Theme changed to: {}", theme.id);
    cx.set_global(theme);
}
