use dice_engine::Session;

use crate::{RollRenderer, NO_ROLLS};

const D6_FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// Glyph for one die value: the six-sided die has dedicated Unicode faces,
/// every other die renders as 🎲 with the value in subscript digits.
pub fn die_glyph(value: u32, face_count: u32) -> String {
    if face_count == 6 {
        return match D6_FACES.get(value.wrapping_sub(1) as usize) {
            Some(&face) => face.to_string(),
            None => "?".to_string(),
        };
    }
    format!("🎲{}", subscript(value))
}

pub fn subscript(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|digit| match digit {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            other => other,
        })
        .collect()
}

/// All dice of a roll on one line.
pub fn glyph_line(values: &[u32], face_count: u32) -> String {
    values
        .iter()
        .map(|&value| die_glyph(value, face_count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain roll display: glyphs, the numeric values and the total.
pub struct GlyphRenderer;

impl RollRenderer for GlyphRenderer {
    fn render(&self, session: &Session) -> String {
        let Some(record) = session.last_roll() else {
            return NO_ROLLS.to_string();
        };
        let values = record
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}\nValues: {}\nTotal: {}",
            glyph_line(&record.values, session.config().face_count),
            values,
            record.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_engine::Config;

    #[test]
    fn test_d6_glyphs() {
        assert_eq!(die_glyph(1, 6), "⚀");
        assert_eq!(die_glyph(6, 6), "⚅");
        assert_eq!(die_glyph(7, 6), "?");
        assert_eq!(die_glyph(0, 6), "?");
    }

    #[test]
    fn test_polyhedral_glyphs_use_subscripts() {
        assert_eq!(die_glyph(17, 20), "🎲₁₇");
        assert_eq!(die_glyph(4, 4), "🎲₄");
        assert_eq!(subscript(10), "₁₀");
    }

    #[test]
    fn test_renderer_output() {
        let mut session = Session::with_seed(Config::new(6, 2).unwrap(), 3).unwrap();
        assert_eq!(GlyphRenderer.render(&session), NO_ROLLS);

        let record = session.roll();
        let rendered = GlyphRenderer.render(&session);
        assert!(rendered.contains(&format!("Total: {}", record.total)));
        assert_eq!(rendered.lines().count(), 3);
    }
}
