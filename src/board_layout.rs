// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

pub static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
pub static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
pub static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
pub static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
pub static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

// marker characters shared by the board-file parser and the display.
// '*' is the plain center star.
#[inline(always)]
pub fn premium_from_marker(c: char) -> Option<Premium> {
    match c {
        '=' => Some(TWS),
        '-' => Some(DWS),
        '"' => Some(TLS),
        '\'' => Some(DLS),
        ' ' | '*' => Some(FVS),
        _ => None,
    }
}

pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: usize,
    star_col: usize,
}

impl BoardLayout {
    pub fn new(
        premiums: Box<[Premium]>,
        dim: matrix::Dim,
        star_row: usize,
        star_col: usize,
    ) -> BoardLayout {
        BoardLayout {
            premiums,
            dim,
            star_row,
            star_col,
        }
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
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: usize, col: usize) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout {
        premiums: Box::new([
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
        ]),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    }
}
