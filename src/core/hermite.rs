//! Kubische Hermite-Interpolation über eine sortierte Keyframe-Liste.

use super::Keyframe;

/// Hermite-Kubik zwischen zwei Stützstellen.
///
/// `diff` ist der Abstand zur linken Stützstelle in Frames,
/// `weight` die normierte Position im Segment (0..=1).
fn hermite_interpolate(y_0: f32, y_1: f32, m_0: f32, m_1: f32, diff: f32, weight: f32) -> f32 {
    let mut result = y_0 + (y_0 - y_1) * (2.0 * weight - 3.0) * weight * weight;
    result += (diff * (weight - 1.0)) * (m_0 * (weight - 1.0) + m_1 * weight);
    result
}

/// Wertet die Kurve an einem (gebrochenen) Frame aus.
///
/// - Leere Liste → `0.0`
/// - Ein Keyframe → konstanter Wert
/// - Außerhalb des Bereichs → Wert des ersten bzw. letzten Keyframes
///
/// Das Klammerpaar wird in einem einzigen Durchlauf bestimmt, ohne sich
/// auf die Sortierung zu verlassen.
pub fn evaluate(keyframes: &[Keyframe], frame: f32) -> f32 {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return 0.0;
    };
    if keyframes.len() == 1 {
        return first.value;
    }

    let mut left = first;
    let mut right = last;

    for keyframe in keyframes {
        let kf_frame = keyframe.frame as f32;
        if kf_frame <= frame {
            left = keyframe;
        }
        if kf_frame >= frame && keyframe.frame < right.frame {
            right = keyframe;
        }
    }

    // Gleiche Stützstelle: direkt zurückgeben (keine Division durch 0)
    if left.frame == right.frame {
        return left.value;
    }

    let frame_diff = frame - left.frame as f32;
    let weight = frame_diff / (right.frame as f32 - left.frame as f32);

    hermite_interpolate(
        left.value,
        right.value,
        left.slope,
        right.slope,
        frame_diff,
        weight,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seed() -> Vec<Keyframe> {
        vec![
            Keyframe::new(0, 1.0, -0.44),
            Keyframe::new(4, 0.53, -0.03),
            Keyframe::new(15, 0.5, 0.0),
            Keyframe::new(26, 0.53, 0.03),
            Keyframe::new(30, 1.0, 0.44),
        ]
    }

    #[test]
    fn test_empty_returns_zero() {
        assert_eq!(evaluate(&[], 0.0), 0.0);
        assert_eq!(evaluate(&[], 12.5), 0.0);
        assert_eq!(evaluate(&[], -3.0), 0.0);
    }

    #[test]
    fn test_single_keyframe_is_constant() {
        let kfs = [Keyframe::new(7, 0.25, 3.0)];
        assert_eq!(evaluate(&kfs, 0.0), 0.25);
        assert_eq!(evaluate(&kfs, 7.0), 0.25);
        assert_eq!(evaluate(&kfs, 100.0), 0.25);
    }

    #[test]
    fn test_curve_passes_through_control_points() {
        let kfs = seed();
        for kf in &kfs {
            assert_relative_eq!(evaluate(&kfs, kf.frame as f32), kf.value, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_seed_scenario_values() {
        let kfs = seed();
        assert_eq!(evaluate(&kfs, 0.0), 1.0);
        assert_eq!(evaluate(&kfs, 30.0), 1.0);
        assert_eq!(evaluate(&kfs, 15.0), 0.5);
    }

    #[test]
    fn test_outside_range_clamps_to_end_values() {
        let kfs = seed();
        assert_eq!(evaluate(&kfs, -5.0), 1.0);
        assert_eq!(evaluate(&kfs, 45.0), 1.0);
    }

    #[test]
    fn test_zero_slopes_give_smoothstep() {
        // Mit Steigung 0 an beiden Enden entspricht die Kurve einem Smoothstep
        let kfs = [Keyframe::new(0, 0.0, 0.0), Keyframe::new(10, 1.0, 0.0)];
        assert_relative_eq!(evaluate(&kfs, 5.0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(evaluate(&kfs, 2.5), 0.15625, epsilon = 1e-6);
    }

    #[test]
    fn test_matching_slopes_give_straight_line() {
        let kfs = [Keyframe::new(0, 0.0, 0.1), Keyframe::new(10, 1.0, 0.1)];
        for i in 0..=10 {
            let f = i as f32;
            assert_relative_eq!(evaluate(&kfs, f), f * 0.1, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_segment_uses_tightest_bracket() {
        let kfs = seed();
        // Zwischen 4 und 15 muss der Wert zwischen den beiden Stützwerten liegen
        let v = evaluate(&kfs, 10.0);
        assert!(v < 0.53 && v > 0.45, "unerwarteter Wert {v}");
    }
}
