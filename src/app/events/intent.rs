use crate::app::session::PointerInput;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Zeichenfläche hat Position oder Größe geändert (`[min_x, min_y, max_x, max_y]`)
    CanvasResized { canvas: [f32; 4] },
    /// Zeiger-Snapshot eines Frames über der Zeichenfläche
    PointerUpdated { input: PointerInput },
    /// Platzier-Modus für einen neuen Keyframe starten
    AddKeyframeRequested,
    /// Selektierten Keyframe löschen
    DeleteSelectedRequested,
    /// Alle Keyframes löschen
    ClearAllRequested,
    /// Keyframes als XML in die Zwischenablage kopieren
    CopyToClipboardRequested,
    /// Einen Frame mehr anzeigen
    IncreaseFrameCountRequested,
    /// Einen Frame weniger anzeigen
    DecreaseFrameCountRequested,
    /// Laufende Interaktion abbrechen (Escape)
    CancelRequested,
    /// Wert des selektierten Keyframes im Eigenschaften-Panel geändert
    SelectedValueEdited { value: f32 },
    /// Steigung des selektierten Keyframes im Eigenschaften-Panel geändert
    SelectedSlopeEdited { slope: f32 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden + speichern)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
