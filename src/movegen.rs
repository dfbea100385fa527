// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, dictionary, fash, grid, scanner, scoring};

// One legal placement: orientation, lane, start offset, the full word (with
// 0x80 marking blanks), its total score and the slot pattern it was matched
// against. The pattern is what later tells rack tiles from play-through.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Play {
    pub down: bool,
    pub lane: usize,
    pub idx: usize,
    pub word: Box<[u8]>,
    pub score: i16,
    pub pattern: Box<[u8]>,
}

impl Play {
    // rack symbols consumed by this play: 0 for a blank, else the letter.
    pub fn used_tiles(&self) -> Vec<u8> {
        self.pattern
            .iter()
            .zip(self.word.iter())
            .filter(|&(&pattern_tile, _)| pattern_tile == 0)
            .map(|(_, &tile)| if tile & 0x80 != 0 { 0 } else { tile })
            .collect()
    }

    pub fn fmt(&self, alphabet: &alphabet::Alphabet) -> String {
        let mut s = String::new();
        if self.down {
            s.push(((self.lane as u8) + 0x61) as char);
            s.push_str(&(self.idx + 1).to_string());
        } else {
            s.push_str(&(self.lane + 1).to_string());
            s.push(((self.idx as u8) + 0x61) as char);
        }
        s.push(' ');
        let mut inside = false;
        for (i, &tile) in self.word.iter().enumerate() {
            if self.pattern[i] != 0 {
                if !inside {
                    s.push('(');
                    inside = true;
                }
            } else if inside {
                s.push(')');
                inside = false;
            }
            if let Some(c) = alphabet.from_board(tile) {
                s.push(c);
            }
        }
        if inside {
            s.push(')');
        }
        s
    }
}

pub struct WordSearch<'a> {
    pub grid: &'a grid::Grid,
    pub dict: &'a dictionary::Dictionary,
    pub alphabet: &'a alphabet::Alphabet,
}

struct Env<'a> {
    grid: &'a grid::Grid,
    dict: &'a dictionary::Dictionary,
    alphabet: &'a alphabet::Alphabet,
    down: bool,
    lane: usize,
    start: usize,
    pattern: &'a [u8],
    rack_tally: Vec<u8>,
    word_buffer: Vec<u8>,
    head: Vec<u8>,
    cross_buffer: Vec<u8>,
    // letters proven to fail the cross check, per offset, for this search only
    rejected: Vec<fash::MyHashSet<u8>>,
    // completed word -> (word with blank flags, best score)
    found: fash::MyHashMap<Box<[u8]>, (Box<[u8]>, i16)>,
}

// try every remaining rack tile at this empty offset. a blank stands for
// every letter of the alphabet at its own (zero) value.
fn place_at(env: &mut Env, idx: usize, calc: &scoring::ScoreCalculator) {
    if idx >= env.pattern.len() {
        return;
    }
    for tile in 1..env.alphabet.len() {
        if env.rack_tally[tile as usize] > 0 {
            env.rack_tally[tile as usize] -= 1;
            try_letter(env, idx, calc, tile, tile);
            env.rack_tally[tile as usize] += 1;
        }
    }
    if env.rack_tally[0] > 0 {
        env.rack_tally[0] -= 1;
        for letter in 1..env.alphabet.len() {
            try_letter(env, idx, calc, letter, letter | 0x80);
        }
        env.rack_tally[0] += 1;
    }
}

fn try_letter(env: &mut Env, idx: usize, calc: &scoring::ScoreCalculator, letter: u8, played: u8) {
    if env.rejected[idx].contains(&letter) {
        return;
    }
    let strider = env.grid.dim().lane(env.down, env.lane);
    let premium = env.grid.premium_at_index(strider.at(env.start + idx));
    let cross = match cross_points(env, idx, letter, played, premium) {
        Some(points) => points,
        None => {
            env.rejected[idx].insert(letter);
            return;
        }
    };
    let head_len = env.head.len();
    let mut calc = calc.clone();
    calc.place(env.alphabet, played, premium);
    calc.add_cross(cross);
    env.word_buffer[idx] = played;
    env.head.push(letter);
    // letters already on the board after this one come for free
    let len = env.pattern.len();
    let mut next = idx + 1;
    while next < len && env.pattern[next] != 0 {
        let tile = env.pattern[next];
        env.word_buffer[next] = tile;
        env.head.push(tile & 0x7f);
        calc.existing(env.alphabet, tile);
        next += 1;
    }
    match env.dict.lookup(&env.head) {
        dictionary::Lookup::Absent => {}
        dictionary::Lookup::Word if next == len => {
            let total = calc.total();
            match env.found.get_mut(env.head.as_slice()) {
                Some(entry) => {
                    if total > entry.1 {
                        *entry = (env.word_buffer.as_slice().into(), total);
                    }
                }
                None => {
                    env.found.insert(
                        env.head.as_slice().into(),
                        (env.word_buffer.as_slice().into(), total),
                    );
                }
            }
        }
        _ => {
            // a shorter complete word may still extend into a longer one
            if next < len {
                place_at(env, next, &calc);
            }
        }
    }
    env.head.truncate(head_len);
}

// Some(points) if the perpendicular word is acceptable (0 when the placed
// letter has no perpendicular neighbors), None if it must be rejected.
fn cross_points(
    env: &mut Env,
    idx: usize,
    letter: u8,
    played: u8,
    premium: board_layout::Premium,
) -> Option<i16> {
    let dim = env.grid.dim();
    let (cross_strider, pos) = if env.down {
        (dim.across(env.start + idx), env.lane)
    } else {
        (dim.down(env.start + idx), env.lane)
    };
    let mut lo = pos;
    while lo > 0 && env.grid.tile_at_index(cross_strider.at(lo - 1)) != 0 {
        lo -= 1;
    }
    let mut hi = pos + 1;
    while hi < cross_strider.len() && env.grid.tile_at_index(cross_strider.at(hi)) != 0 {
        hi += 1;
    }
    if lo == pos && hi == pos + 1 {
        return Some(0);
    }
    let mut cross_calc = scoring::ScoreCalculator::new();
    env.cross_buffer.clear();
    for i in lo..hi {
        if i == pos {
            env.cross_buffer.push(letter);
            cross_calc.place(env.alphabet, played, premium);
        } else {
            let tile = env.grid.tile_at_index(cross_strider.at(i));
            env.cross_buffer.push(tile & 0x7f);
            cross_calc.existing(env.alphabet, tile);
        }
    }
    if env.dict.lookup(&env.cross_buffer) == dictionary::Lookup::Word {
        Some(cross_calc.total())
    } else {
        None
    }
}

impl<'a> WordSearch<'a> {
    // every legal completed word for this slot and rack, with its score.
    // one entry per distinct word; ties keep the maximum score.
    pub fn search(&self, slot: &scanner::Slot, rack: &[u8]) -> Vec<(Box<[u8]>, i16)> {
        let len = slot.pattern.len();
        let mut rack_tally = vec![0u8; self.alphabet.len() as usize];
        for &tile in rack {
            rack_tally[tile as usize] += 1;
        }
        let mut env = Env {
            grid: self.grid,
            dict: self.dict,
            alphabet: self.alphabet,
            down: slot.down,
            lane: slot.lane,
            start: slot.start,
            pattern: &slot.pattern,
            rack_tally,
            word_buffer: vec![0u8; len],
            head: Vec::with_capacity(len),
            cross_buffer: Vec::new(),
            rejected: vec![fash::MyHashSet::default(); len],
            found: fash::MyHashMap::default(),
        };
        let mut calc = scoring::ScoreCalculator::new();
        let mut idx = 0;
        while idx < len && env.pattern[idx] != 0 {
            let tile = env.pattern[idx];
            env.word_buffer[idx] = tile;
            env.head.push(tile & 0x7f);
            calc.existing(env.alphabet, tile);
            idx += 1;
        }
        place_at(&mut env, idx, &calc);
        let mut result: Vec<(Box<[u8]>, i16)> = env.found.into_values().collect();
        result.sort_unstable();
        result
    }

    // across pass over the grid, then an identical pass down the transposed
    // striders, wrapping every completed word into a Play.
    pub fn gen_plays(&self, rack: &[u8]) -> Vec<Play> {
        let mut plays = Vec::new();
        for slot in scanner::scan(self.grid, rack.len()) {
            for (word, score) in self.search(&slot, rack) {
                plays.push(Play {
                    down: slot.down,
                    lane: slot.lane,
                    idx: slot.start,
                    word,
                    score,
                    pattern: slot.pattern.clone(),
                });
            }
        }
        plays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout::make_standard_board_layout;

    fn w(s: &str) -> Vec<u8> {
        s.bytes().map(|c| c & 0x3f).collect()
    }

    fn plain_board() -> grid::Grid {
        grid::Grid::parse(&vec![" ".repeat(15); 15].join("\n")).unwrap()
    }

    fn board_with_center_a() -> grid::Grid {
        let mut rows = vec![" ".repeat(15); 15];
        rows[7].replace_range(7..8, "A");
        grid::Grid::parse(&rows.join("\n")).unwrap()
    }

    #[test]
    fn hello_first_move_on_plain_board() {
        let board = plain_board();
        let dict = dictionary::Dictionary::from_word_list("HELLO").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let plays = ws.gen_plays(&w("HELLO"));
        // 5 across starts and 5 down starts through the center
        assert_eq!(plays.len(), 10);
        for play in &plays {
            assert_eq!(&play.word[..], &w("HELLO")[..]);
            assert_eq!(play.score, 4 + 1 + 1 + 1 + 1);
            assert_eq!(play.lane, 7);
            assert!(play.idx <= 7 && 7 < play.idx + 5);
            assert_eq!(play.used_tiles(), w("HELLO"));
        }
    }

    #[test]
    fn hello_on_standard_board_doubles_through_center() {
        let board = grid::Grid::new(&make_standard_board_layout());
        let dict = dictionary::Dictionary::from_word_list("HELLO").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let plays = ws.gen_plays(&w("HELLO"));
        assert_eq!(plays.len(), 10);
        // 8a: H on the double-letter at col 3, O on the center star
        let play = plays
            .iter()
            .find(|play| !play.down && play.idx == 3)
            .unwrap();
        assert_eq!(play.score, (4 * 2 + 1 + 1 + 1 + 1) * 2);
        // every first play crosses the center star, so every score is doubled
        for play in &plays {
            assert_eq!(play.score % 2, 0);
        }
    }

    #[test]
    fn plays_connect_through_an_existing_tile() {
        let board = board_with_center_a();
        let dict = dictionary::Dictionary::from_word_list("AT").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let mut plays = ws.gen_plays(&w("AT"));
        plays.sort_unstable_by_key(|play| (play.down, play.lane, play.idx));
        let summary: Vec<(bool, usize, usize, i16)> = plays
            .iter()
            .map(|play| (play.down, play.lane, play.idx, play.score))
            .collect();
        assert_eq!(
            summary,
            vec![
                (false, 7, 7, 2), // AT through the A, rightward
                (false, 8, 6, 4), // AT below, cross word AT through the A
                (true, 7, 7, 2),  // AT through the A, downward
                (true, 8, 6, 4),  // AT in the next column, cross word AT
            ]
        );
        for play in &plays {
            assert_eq!(&play.word[..], &w("AT")[..]);
            if play.score == 2 {
                // play-through: only the T came from the rack
                assert_eq!(play.used_tiles(), w("T"));
            } else {
                assert_eq!(play.used_tiles(), w("AT"));
            }
        }
    }

    #[test]
    fn invalid_cross_word_rejects_a_valid_primary_word() {
        let board = board_with_center_a();
        // TA is a word, but playing it at row 8 cols 6..8 would form the
        // cross word AA, which is not
        let dict = dictionary::Dictionary::from_word_list("AT TA").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let slot = scanner::Slot {
            down: false,
            lane: 8,
            start: 6,
            pattern: Box::new([0, 0]),
        };
        let found = ws.search(&slot, &w("AT"));
        assert_eq!(found.len(), 1);
        assert_eq!(&found[0].0[..], &w("AT")[..]);
        assert_eq!(found[0].1, 4);
    }

    #[test]
    fn blank_plays_as_any_letter_for_zero_points() {
        let board = board_with_center_a();
        let dict = dictionary::Dictionary::from_word_list("AT").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let plays = ws.gen_plays(&[0]);
        assert_eq!(plays.len(), 2); // once across, once down, through the A
        for play in &plays {
            assert_eq!(play.lane, 7);
            assert_eq!(play.idx, 7);
            assert_eq!(&play.word[..], &[1, 20 | 0x80]);
            assert_eq!(play.score, 1); // the blank T scores nothing
            assert_eq!(play.used_tiles(), vec![0]);
        }
    }

    #[test]
    fn duplicate_words_keep_the_best_score() {
        let board = board_with_center_a();
        let dict = dictionary::Dictionary::from_word_list("AT").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        let slot = scanner::Slot {
            down: true,
            lane: 7,
            start: 7,
            pattern: Box::new([1, 0]),
        };
        // both the real T and the blank complete AT; the real T scores more
        let found = ws.search(&slot, &[20, 0]);
        assert_eq!(found.len(), 1);
        assert_eq!(&found[0].0[..], &w("AT")[..]);
        assert_eq!(found[0].1, 2);
    }

    #[test]
    fn no_legal_placement_yields_no_plays() {
        let board = board_with_center_a();
        let dict = dictionary::Dictionary::from_word_list("AT").unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let ws = WordSearch {
            grid: &board,
            dict: &dict,
            alphabet: &alphabet,
        };
        assert!(ws.gen_plays(&w("Q")).is_empty());
    }

    #[test]
    fn formats_plays_with_play_through_parentheses() {
        let alphabet = alphabet::make_english_alphabet();
        let play = Play {
            down: false,
            lane: 7,
            idx: 7,
            word: Box::new([1, 20 | 0x80]),
            score: 1,
            pattern: Box::new([1, 0]),
        };
        assert_eq!(play.fmt(&alphabet), "8h (A)t");
        let down_play = Play {
            down: true,
            lane: 7,
            idx: 3,
            word: w("HELLO").into_boxed_slice(),
            score: 24,
            pattern: Box::new([0; 5]),
        };
        assert_eq!(down_play.fmt(&alphabet), "h4 HELLO");
    }
}
