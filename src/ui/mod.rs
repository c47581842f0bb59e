//! UI-Komponenten: Toolbar, Properties, Status-Bar, Zeichenflächen-Input, Dialoge.

mod frame_count;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels und Dialoge lesen den `AppState` und liefern `AppIntent`s zurück.
/// Zeiger- und Tastatur-Eingaben der Zeichenfläche laufen über `InputState`.
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use frame_count::render_frame_count_buttons;
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
