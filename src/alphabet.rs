// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Tile numbering: 0 is the blank, 1..=26 are A..=Z. On the board, 0x80 marks
// a blank played as the letter in the low bits; it keeps the blank's score.

pub struct Alphabet {
    scores: Box<[i8]>,
    freqs: Box<[u8]>,
    num_tiles: u16,
}

impl Alphabet {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.scores.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        self.num_tiles
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        if idx & 0x80 == 0 {
            self.scores[idx as usize]
        } else {
            self.scores[0]
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.freqs[idx as usize]
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<char> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some((c + 0x40) as char)
        } else {
            Some((c + 0x60) as char)
        }
    }

    #[inline(always)]
    pub fn from_rack(&self, idx: u8) -> Option<char> {
        if idx >= self.len() {
            None
        } else if idx == 0 {
            Some('?')
        } else {
            Some((idx + 0x40) as char)
        }
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter()
            .filter_map(|&tile| self.from_rack(tile))
            .collect()
    }

    pub fn rack_score(&self, rack: &[u8]) -> i16 {
        rack.iter().map(|&tile| self.score(tile) as i16).sum()
    }

    // one entry per line: symbol point-value quantity. '?' is the blank.
    pub fn from_tile_table(giant_string: &str) -> error::Returns<Alphabet> {
        let mut scores = vec![0i8; 27].into_boxed_slice();
        let mut freqs = vec![0u8; 27].into_boxed_slice();
        let mut seen = [false; 27];
        for line in giant_string.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut it = line.split_whitespace();
            let (symbol, value, quantity) = match (it.next(), it.next(), it.next(), it.next()) {
                (Some(symbol), Some(value), Some(quantity), None) => (symbol, value, quantity),
                _ => {
                    return_error!(format!("invalid tile table line {:?}", line));
                }
            };
            let idx = match symbol.as_bytes() {
                [b'?'] => 0usize,
                [c @ b'A'..=b'Z'] => (c & 0x3f) as usize,
                _ => {
                    return_error!(format!("invalid tile symbol {:?}", symbol));
                }
            };
            if seen[idx] {
                return_error!(format!("duplicate tile symbol {:?}", symbol));
            }
            seen[idx] = true;
            scores[idx] = value.parse()?;
            freqs[idx] = quantity.parse()?;
        }
        let num_tiles = freqs.iter().map(|&freq| freq as u16).sum();
        Ok(Alphabet {
            scores,
            freqs,
            num_tiles,
        })
    }
}

pub fn make_english_alphabet() -> Alphabet {
    let scores: Box<[i8]> = Box::new([
        0, 1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
    ]);
    let freqs: Box<[u8]> = Box::new([
        2, 9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
    ]);
    let num_tiles = freqs.iter().map(|&freq| freq as u16).sum();
    Alphabet {
        scores,
        freqs,
        num_tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_values() {
        let alphabet = make_english_alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.num_tiles(), 100);
        assert_eq!(alphabet.score(0), 0); // blank
        assert_eq!(alphabet.score(1), 1); // A
        assert_eq!(alphabet.score(17), 10); // Q
        assert_eq!(alphabet.score(8 | 0x80), 0); // blank played as H
        assert_eq!(alphabet.from_board(8), Some('H'));
        assert_eq!(alphabet.from_board(8 | 0x80), Some('h'));
        assert_eq!(alphabet.from_board(0), None);
        assert_eq!(alphabet.from_rack(0), Some('?'));
    }

    #[test]
    fn parses_tile_table() {
        let alphabet = Alphabet::from_tile_table("? 0 2\nA 1 9\nQ 10 1\n").unwrap();
        assert_eq!(alphabet.score(1), 1);
        assert_eq!(alphabet.freq(1), 9);
        assert_eq!(alphabet.score(17), 10);
        assert_eq!(alphabet.num_tiles(), 12);
        assert!(Alphabet::from_tile_table("A 1\n").is_err());
        assert!(Alphabet::from_tile_table("AB 1 9\n").is_err());
        assert!(Alphabet::from_tile_table("A 1 9\nA 1 9\n").is_err());
    }
}
