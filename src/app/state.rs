//! Application State: zentrale Datenhaltung.

use super::session::CurveSession;
use super::CommandLog;
use crate::core::KeyframeTrack;
use crate::shared::EditorOptions;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht (z.B. nach dem Kopieren)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_options_dialog: false,
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurven-Session (Keyframes, Achsen, Interaktion)
    pub session: CurveSession,
    /// Laufzeit-Optionen (Layout, Radien, Farben)
    pub options: EditorOptions,
    /// UI-State
    pub ui: UiState,
    /// Export-Text, den der Host im nächsten Frame in die Zwischenablage schreibt
    pub clipboard_text: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen und Start-Keyframes.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen und Start-Keyframes.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::with_track(KeyframeTrack::default_seed(), options)
    }

    /// Erstellt einen App-State über einem vorgegebenen Track.
    pub fn with_track(track: KeyframeTrack, options: EditorOptions) -> Self {
        Self {
            session: CurveSession::with_options(track, &options),
            options,
            ui: UiState::new(),
            clipboard_text: None,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Keyframes zurück (für UI-Anzeige)
    pub fn keyframe_count(&self) -> usize {
        self.session.track().len()
    }

    /// Entnimmt den ausstehenden Zwischenablage-Text.
    pub fn take_clipboard_text(&mut self) -> Option<String> {
        self.clipboard_text.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
