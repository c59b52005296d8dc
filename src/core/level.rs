//! Level grid loading and tile generation.
use std::fmt;
use std::fs;
use std::path::Path;

use raylib::prelude::*;

#[rustfmt::skip]
const BUILTIN_LEVEL: [u8; 40] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 1, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1,
];
const BUILTIN_WIDTH: usize = 8;
const BUILTIN_HEIGHT: usize = 5;

#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    UnknownCell { line: usize, column: usize, ch: char },
    Empty,
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::UnknownCell { line, column, ch } => {
                write!(f, "unknown cell {:?} at line {}, column {}", ch, line, column)
            }
            LevelError::Empty => write!(f, "level has no rows"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A static solid tile in world pixels.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub rect: Rectangle,
    pub kind: u8,
}

/// Row-major grid of cells; 0 is empty, anything else is solid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    cells: Vec<u8>,
}

impl Level {
    pub fn builtin() -> Self {
        Self {
            width: BUILTIN_WIDTH,
            height: BUILTIN_HEIGHT,
            cells: BUILTIN_LEVEL.to_vec(),
        }
    }

    /// Parses one row per line. `.`, `0`, space and tab are empty, `#` is kind 1
    /// and digits 1-9 map to their own kind. Blank lines are skipped and short
    /// rows are padded with empty cells.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (col_idx, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' | '0' | ' ' | '\t' => 0,
                    '#' => 1,
                    '1'..='9' => ch as u8 - b'0',
                    _ => {
                        return Err(LevelError::UnknownCell {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            ch,
                        });
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, 0);
            cells.extend_from_slice(&row);
        }

        Ok(Self { width, height, cells })
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    pub fn tiles(&self, tile_size: f32) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.solid_count());
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(kind) = self.cell(x, y).filter(|&k| k > 0) else { continue };
                let (px, py) = (x as f32 * tile_size, y as f32 * tile_size);
                tiles.push(Tile {
                    rect: Rectangle::new(px, py, tile_size, tile_size),
                    kind,
                });
            }
        }
        tiles
    }
}

pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let text = fs::read_to_string(path)?;
    Level::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_matches_hardcoded_layout() {
        let level = Level::builtin();
        assert_eq!(level.width, 8);
        assert_eq!(level.height, 5);
        assert_eq!(level.cell(6, 1), Some(1));
        assert_eq!(level.cell(4, 3), Some(0));
        assert_eq!(level.solid_count(), 12);
    }

    #[test]
    fn tiles_use_index_to_coordinate_mapping() {
        let tiles = Level::builtin().tiles(32.0);
        assert_eq!(tiles.len(), 12);

        let first = tiles[0].rect;
        assert_eq!((first.x, first.y), (192.0, 32.0));
        assert_eq!((first.width, first.height), (32.0, 32.0));

        let last = tiles[tiles.len() - 1].rect;
        assert_eq!((last.x, last.y), (224.0, 128.0));
    }

    #[test]
    fn parse_pads_short_rows() {
        let level = Level::parse("..#\n#\n").unwrap();
        assert_eq!(level.width, 3);
        assert_eq!(level.height, 2);
        assert_eq!(level.cell(0, 1), Some(1));
        assert_eq!(level.cell(2, 1), Some(0));
    }

    #[test]
    fn parse_keeps_digit_kinds_and_skips_blank_lines() {
        let level = Level::parse("\n0 3\n\n#2.\n").unwrap();
        assert_eq!(level.height, 2);
        assert_eq!(level.cell(2, 0), Some(3));
        assert_eq!(level.cell(1, 1), Some(2));
        let kinds: Vec<u8> = level.tiles(16.0).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![3, 1, 2]);
    }

    #[test]
    fn shipped_level_parses() {
        let level = Level::parse(include_str!("../../levels/wide.txt")).unwrap();
        assert_eq!((level.width, level.height), (20, 6));
        assert_eq!(level.cell(0, 5), Some(1));
    }

    #[test]
    fn parse_reports_unknown_cell_position() {
        match Level::parse("....\n..x.\n") {
            Err(LevelError::UnknownCell { line, column, ch }) => {
                assert_eq!((line, column, ch), (2, 3, 'x'));
            }
            other => panic!("expected UnknownCell, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_text() {
        assert!(matches!(Level::parse("\n  \n"), Err(LevelError::Empty)));
    }

    #[test]
    fn cell_out_of_range_is_none() {
        let level = Level::builtin();
        assert_eq!(level.cell(8, 0), None);
        assert_eq!(level.cell(0, 5), None);
    }

    #[test]
    fn load_level_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "....").unwrap();
        writeln!(file, "####").unwrap();
        let level = load_level(file.path()).unwrap();
        assert_eq!(level.solid_count(), 4);
    }

    #[test]
    fn load_level_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_level(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LevelError::Io(_)));
    }
}
