//! Writer für den Keyframe-Export in die Zwischenablage.

use crate::core::Keyframe;

/// Schreibt alle Keyframes als XML-Zeilen in Frame-Reihenfolge.
///
/// Werte und Steigungen mit sechs Nachkommastellen, jede Zeile mit `\n` abgeschlossen.
/// Eine leere Liste ergibt einen leeren String.
pub fn write_keyframe_export(keyframes: &[Keyframe]) -> String {
    let mut output = String::with_capacity(keyframes.len() * 64);
    for keyframe in keyframes {
        output.push_str(&format!(
            "<KeyFrame Frame=\"{}\" Value=\"{:.6}\" Slope=\"{:.6}\"/>\n",
            keyframe.frame, keyframe.value, keyframe.slope
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_single_keyframe() {
        let text = write_keyframe_export(&[Keyframe::new(0, 1.0, 0.0)]);
        assert_eq!(
            text,
            "<KeyFrame Frame=\"0\" Value=\"1.000000\" Slope=\"0.000000\"/>\n"
        );
    }

    #[test]
    fn test_export_keeps_order_and_negative_slopes() {
        let text = write_keyframe_export(&[
            Keyframe::new(0, 0.25, -1.5),
            Keyframe::new(12, 1.75, 0.125),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "<KeyFrame Frame=\"0\" Value=\"0.250000\" Slope=\"-1.500000\"/>"
        );
        assert_eq!(
            lines[1],
            "<KeyFrame Frame=\"12\" Value=\"1.750000\" Slope=\"0.125000\"/>"
        );
        assert!(text.ends_with("/>\n"));
    }

    #[test]
    fn test_export_empty_is_empty_string() {
        assert!(write_keyframe_export(&[]).is_empty());
    }
}
