// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lookup {
    Absent,
    Prefix,
    Word,
}

// Hash map keyed by prefix with a completeness flag. The flag is true for a
// complete word, false for a proper prefix only; an absent key means no word
// can be reached by extending the string, which is what prunes the search.
pub struct Dictionary {
    entries: fash::MyHashMap<Box<[u8]>, bool>,
}

impl Dictionary {
    // whitespace-separated uppercase tokens.
    pub fn from_word_list(giant_string: &str) -> error::Returns<Dictionary> {
        let mut entries = fash::MyHashMap::<Box<[u8]>, bool>::default();
        for s in giant_string.split_whitespace() {
            let mut v = Vec::with_capacity(s.len());
            for c in s.chars() {
                if c.is_ascii_uppercase() {
                    v.push((c as u8) & 0x3f);
                } else {
                    return_error!(format!("invalid tile after {:?} in {:?}", v, s));
                }
            }
            for end in 1..v.len() {
                // a Word entry is never downgraded to Prefix
                entries.entry(v[..end].into()).or_insert(false);
            }
            *entries.entry(v.into_boxed_slice()).or_insert(true) = true;
        }
        Ok(Dictionary { entries })
    }

    #[inline(always)]
    pub fn lookup(&self, word: &[u8]) -> Lookup {
        match self.entries.get(word) {
            None => Lookup::Absent,
            Some(false) => Lookup::Prefix,
            Some(true) => Lookup::Word,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
