// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

// Per-candidate accumulator. Premiums only fire for tiles placed this turn;
// letters already on the board contribute face value with no multiplier.
// Each cross word gets its own calculator and folds in as a flat addend.
#[derive(Clone)]
pub struct ScoreCalculator {
    score: i16,
    word_multiplier: i16,
    cross_score: i16,
}

impl ScoreCalculator {
    pub fn new() -> ScoreCalculator {
        ScoreCalculator {
            score: 0,
            word_multiplier: 1,
            cross_score: 0,
        }
    }

    #[inline(always)]
    pub fn existing(&mut self, alphabet: &alphabet::Alphabet, tile: u8) {
        self.score += alphabet.score(tile) as i16;
    }

    #[inline(always)]
    pub fn place(&mut self, alphabet: &alphabet::Alphabet, tile: u8, premium: board_layout::Premium) {
        self.score += alphabet.score(tile) as i16 * premium.letter_multiplier as i16;
        self.word_multiplier *= premium.word_multiplier as i16;
    }

    #[inline(always)]
    pub fn add_cross(&mut self, points: i16) {
        self.cross_score += points;
    }

    #[inline(always)]
    pub fn total(&self) -> i16 {
        self.score * self.word_multiplier + self.cross_score
    }
}

impl Default for ScoreCalculator {
    fn default() -> ScoreCalculator {
        ScoreCalculator::new()
    }
}
