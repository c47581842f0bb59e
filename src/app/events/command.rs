use crate::app::session::PointerInput;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeichenfläche setzen, Plot-Grenzen neu berechnen
    SetCanvasRect { canvas: [f32; 4] },
    /// Zeiger-Snapshot durch die Session schicken
    ProcessPointer { input: PointerInput },
    /// Platzier-Modus aktivieren
    BeginPlacingKeyframe,
    /// Selektierten Keyframe entfernen
    DeleteSelectedKeyframe,
    /// Alle Keyframes entfernen
    ClearKeyframes,
    /// Export-Text für die Zwischenablage erzeugen
    CopyKeyframesToClipboard,
    /// Anzahl sichtbarer Frames setzen
    SetFrameCount { frame_count: u32 },
    /// Selektion und Platzier-Modus aufheben
    CancelInteraction,
    /// Wert des selektierten Keyframes setzen
    SetSelectedValue { value: f32 },
    /// Steigung des selektierten Keyframes setzen
    SetSelectedSlope { slope: f32 },
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
