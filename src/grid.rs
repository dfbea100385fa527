// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, matrix, movegen};

// Board state: a single row-major store of tile bytes plus the premium table.
// Column-wise access goes through down-lane striders, so there is no second
// transposed copy to keep in sync; apply() is the only mutation entry point.
pub struct Grid {
    dim: matrix::Dim,
    star_row: usize,
    star_col: usize,
    premiums: Box<[board_layout::Premium]>,
    tiles: Box<[u8]>,
}

impl Grid {
    pub fn new(layout: &board_layout::BoardLayout) -> Grid {
        let dim = layout.dim();
        Grid {
            dim,
            star_row: layout.star_row(),
            star_col: layout.star_col(),
            premiums: layout.premiums().into(),
            tiles: vec![0u8; dim.rows * dim.cols].into_boxed_slice(),
        }
    }

    // board-file format: one line per row. uppercase letter = played tile,
    // lowercase letter = blank played as that letter, otherwise a premium
    // marker for an unplayed cell. short lines are padded with plain cells.
    pub fn parse(giant_string: &str) -> error::Returns<Grid> {
        let lines: Vec<&str> = giant_string.lines().collect();
        let size = lines.len();
        if size < 2 {
            return_error!(format!("board: need at least 2 rows, found {}", size));
        }
        let mut premiums = Vec::with_capacity(size * size);
        let mut tiles = Vec::with_capacity(size * size);
        for (row_num, line) in (0..).zip(lines.iter()) {
            let mut num_cols = 0;
            for (col_num, c) in (0..).zip(line.chars()) {
                num_cols += 1;
                if num_cols > size {
                    return_error!(format!(
                        "board row {} (0-based): more than {} cols",
                        row_num, size
                    ));
                }
                match c {
                    'A'..='Z' => {
                        tiles.push((c as u8) & 0x3f);
                        premiums.push(board_layout::FVS);
                    }
                    'a'..='z' => {
                        tiles.push((c as u8) & 0x1f | 0x80);
                        premiums.push(board_layout::FVS);
                    }
                    _ => match board_layout::premium_from_marker(c) {
                        Some(premium) => {
                            tiles.push(0);
                            premiums.push(premium);
                        }
                        None => {
                            return_error!(format!(
                                "board row {} col {} (0-based): invalid cell {:?}",
                                row_num, col_num, c
                            ));
                        }
                    },
                }
            }
            for _ in num_cols..size {
                tiles.push(0);
                premiums.push(board_layout::FVS);
            }
        }
        Ok(Grid {
            dim: matrix::Dim {
                rows: size,
                cols: size,
            },
            star_row: size / 2,
            star_col: size / 2,
            premiums: premiums.into_boxed_slice(),
            tiles: tiles.into_boxed_slice(),
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> usize {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> usize {
        self.star_col
    }

    #[inline(always)]
    pub fn tile_at_index(&self, idx: usize) -> u8 {
        self.tiles[idx]
    }

    #[inline(always)]
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn premium_at_index(&self, idx: usize) -> board_layout::Premium {
        self.premiums[idx]
    }

    #[inline(always)]
    pub fn premium(&self, row: usize, col: usize) -> board_layout::Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_first_move(&self) -> bool {
        self.tiles.iter().all(|&tile| tile == 0)
    }

    pub fn pattern(&self, down: bool, lane: usize, start: usize, len: usize) -> Box<[u8]> {
        let strider = self.dim.lane(down, lane);
        (start..start + len)
            .map(|i| self.tiles[strider.at(i)])
            .collect()
    }

    pub fn apply(&mut self, play: &movegen::Play) {
        let strider = self.dim.lane(play.down, play.lane);
        for (i, &tile) in (play.idx..).zip(play.word.iter()) {
            if tile != 0 {
                self.tiles[strider.at(i)] = tile;
            }
        }
    }
}
