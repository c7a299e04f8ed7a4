// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;

// The available letters, as a tally indexed by tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    tally: Box<[u16]>,
    num_letters: usize,
    num_ignored: usize,
}

impl LetterPool {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Self {
        Self {
            tally: vec![0; alphabet.len() as usize].into_boxed_slice(),
            num_letters: 0,
            num_ignored: 0,
        }
    }

    // Each token contributes all of its letters, so "a a b" and "aab" are the
    // same pool. Letters outside the alphabet cannot be in any word, so they
    // are dropped without affecting the answers.
    pub fn from_tokens<S: AsRef<str>>(
        alphabet: &alphabet::Alphabet<'_>,
        alphabet_reader: &alphabet::AlphabetReader<'_>,
        tokens: &[S],
    ) -> Self {
        let mut pool = Self::new(alphabet);
        let mut v = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            let num_dropped = alphabet_reader.read_known_tiles(token, &mut v);
            if num_dropped > 0 {
                tracing::debug!(
                    "ignored {} letters of {:?} that no word uses",
                    num_dropped,
                    token
                );
                pool.num_ignored += num_dropped;
            }
            pool.add_tiles(&v);
        }
        pool
    }

    #[inline(always)]
    pub fn add(&mut self, tile: u8) {
        let count = &mut self.tally[tile as usize];
        if *count < u16::MAX {
            *count += 1;
            self.num_letters += 1;
        }
    }

    #[inline(always)]
    pub fn add_tiles(&mut self, tiles: &[u8]) {
        tiles.iter().for_each(|&tile| self.add(tile));
    }

    pub fn clear(&mut self) {
        self.tally.iter_mut().for_each(|m| *m = 0);
        self.num_letters = 0;
        self.num_ignored = 0;
    }

    #[inline(always)]
    pub fn count(&self, tile: u8) -> u16 {
        self.tally.get(tile as usize).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn tally(&self) -> &[u16] {
        &self.tally
    }

    // total letters, counting repeats.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_letters
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_letters == 0
    }

    // letters given that are outside the alphabet.
    #[inline(always)]
    pub fn num_ignored(&self) -> usize {
        self.num_ignored
    }

    // letters in alphabet order, e.g. "aabst".
    pub fn fmt_letters(&self, alphabet: &alphabet::Alphabet<'_>, s: &mut String) {
        for (tile, &count) in self.tally.iter().enumerate() {
            let label = alphabet.lower_label(tile as u8).unwrap_or("?");
            for _ in 0..count {
                s.push_str(label);
            }
        }
    }
}
