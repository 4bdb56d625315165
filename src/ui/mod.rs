//! UI-Komponenten: Menü, Toolbar, Zeichenfläche, Properties, Dialoge.

pub mod canvas;
pub mod dialogs;
/// UI-Layer mit egui
///
/// Jede Komponente liest den AppState und gibt `AppIntent`s zurück.
/// Mutationen laufen ausschließlich über den Controller.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::CanvasInput;
pub use dialogs::{show_netlist_preview, show_notifications, show_results_window};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe um.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
