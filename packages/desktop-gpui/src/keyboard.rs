//! Keyboard bindings for the design editor shell

use gpui::*;

// Register action types
actions!(
    design_sync,
    [
        // Panel
        OpenGenerateDialog,
        RefreshProjects,
        ToggleSidePanel,
        // Theme
        ToggleTheme,
        // General
        Cancel,
    ]
);

/// Initialize keyboard bindings
pub fn init(cx: &mut App) {
    cx.bind_keys([
        // Panel
        KeyBinding::new("ctrl-g", OpenGenerateDialog, None),
        KeyBinding::new("ctrl-r", RefreshProjects, None),
        KeyBinding::new("ctrl-b", ToggleSidePanel, None),

        // Theme
        KeyBinding::new("ctrl-shift-t", ToggleTheme, None),

        // General
        KeyBinding::new("escape", Cancel, None),
    ]);

    tracing::debug!("Keyboard bindings initialized");
}
