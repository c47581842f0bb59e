//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::Vec2;

/// Ausrichtung eines Textes relativ zu seinem Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Zentriert in x und y
    Center,
    /// Rechtsbündig, vertikal zentriert
    RightCenter,
    /// Linksbündig, vertikal zentriert
    LeftCenter,
}

/// Einzelner Zeichenbefehl in Bildschirmkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gerade Linie
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    /// Zusammenhängender Linienzug
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
    /// Gefüllter Kreis
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Text an einem Ankerpunkt
    Text {
        pos: Vec2,
        text: String,
        anchor: TextAnchor,
        size: f32,
        color: [f32; 4],
    },
}

/// Read-only Daten für einen Render-Frame, in Zeichenreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Hintergrundfarbe der Zeichenfläche
    pub background: [f32; 4],
    /// Zeichenbefehle (spätere überdecken frühere)
    pub commands: Vec<DrawCommand>,
}

impl RenderScene {
    /// Erstellt eine leere Szene mit Hintergrundfarbe.
    pub fn new(background: [f32; 4]) -> Self {
        Self {
            background,
            commands: Vec::new(),
        }
    }

    /// Hängt eine Linie an.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    /// Hängt einen Linienzug an.
    pub fn polyline(&mut self, points: Vec<Vec2>, width: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Polyline {
            points,
            width,
            color,
        });
    }

    /// Hängt einen gefüllten Kreis an.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    /// Hängt einen Text an.
    pub fn text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        anchor: TextAnchor,
        size: f32,
        color: [f32; 4],
    ) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.into(),
            anchor,
            size,
            color,
        });
    }

    /// Gibt zurück, ob die Szene Zeichenbefehle enthält.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle Kreise der Szene (für Tests und Hit-Debugging).
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, [f32; 4])> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}
