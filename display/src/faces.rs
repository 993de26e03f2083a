use dice_engine::Session;

use crate::glyphs::glyph_line;
use crate::{RollRenderer, NO_ROLLS};

pub const FACE_HEIGHT: usize = 5;

fn pip(on: bool) -> char {
    if on {
        'o'
    } else {
        ' '
    }
}

/// Pip grid for a six-sided face, row by row.
fn pips(value: u32) -> [[bool; 3]; 3] {
    match value {
        1 => [[false, false, false], [false, true, false], [false, false, false]],
        2 => [[true, false, false], [false, false, false], [false, false, true]],
        3 => [[true, false, false], [false, true, false], [false, false, true]],
        4 => [[true, false, true], [false, false, false], [true, false, true]],
        5 => [[true, false, true], [false, true, false], [true, false, true]],
        6 => [[true, false, true], [true, false, true], [true, false, true]],
        _ => [[false; 3]; 3],
    }
}

/// ASCII art for one die, always `FACE_HEIGHT` lines so faces can sit side
/// by side. Six-sided values get pip art, everything else a boxed number.
pub fn ascii_face(value: u32, face_count: u32) -> [String; FACE_HEIGHT] {
    if face_count == 6 && (1..=6).contains(&value) {
        let grid = pips(value);
        let row =
            |cells: [bool; 3]| format!("| {} {} {} |", pip(cells[0]), pip(cells[1]), pip(cells[2]));
        [
            "+-------+".to_string(),
            row(grid[0]),
            row(grid[1]),
            row(grid[2]),
            "+-------+".to_string(),
        ]
    } else {
        [
            "+------+".to_string(),
            "|      |".to_string(),
            format!("|{:^6}|", value),
            "|      |".to_string(),
            "+------+".to_string(),
        ]
    }
}

/// One roll's dice drawn next to each other.
pub fn ascii_row(values: &[u32], face_count: u32) -> String {
    let faces: Vec<[String; FACE_HEIGHT]> = values
        .iter()
        .map(|&value| ascii_face(value, face_count))
        .collect();
    (0..FACE_HEIGHT)
        .map(|line| {
            faces
                .iter()
                .map(|face| face[line].as_str())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceStyle {
    #[default]
    Glyph,
    Ascii,
}

/// Dice faces with a glyph/ASCII style toggle.
pub struct FaceRenderer {
    pub style: FaceStyle,
}

impl RollRenderer for FaceRenderer {
    fn render(&self, session: &Session) -> String {
        let Some(record) = session.last_roll() else {
            return NO_ROLLS.to_string();
        };
        let face_count = session.config().face_count;
        let art = match self.style {
            FaceStyle::Glyph => glyph_line(&record.values, face_count),
            FaceStyle::Ascii => ascii_row(&record.values, face_count),
        };
        format!("{}\nTotal: {}", art, record.total)
    }
}
