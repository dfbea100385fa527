// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, grid};

#[inline(always)]
pub fn empty_label(grid: &grid::Grid, row: usize, col: usize) -> char {
    if row == grid.star_row() && col == grid.star_col() {
        return '*';
    }
    let premium = grid.premium(row, col);
    match (premium.word_multiplier, premium.letter_multiplier) {
        (3, _) => '=',
        (2, _) => '-',
        (_, 3) => '"',
        (_, 2) => '\'',
        _ => ' ',
    }
}

#[inline(always)]
pub fn board_label(alphabet: &alphabet::Alphabet, grid: &grid::Grid, row: usize, col: usize) -> char {
    alphabet
        .from_board(grid.tile(row, col))
        .unwrap_or_else(|| empty_label(grid, row, col))
}

pub fn print_board(alphabet: &alphabet::Alphabet, grid: &grid::Grid) {
    let dim = grid.dim();
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    for r in 0..dim.rows {
        print!("{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                print!(" ")
            }
            print!("{}", board_label(alphabet, grid, r, c));
        }
        println!("|{}", r + 1);
    }
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
}
