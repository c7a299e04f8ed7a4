// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, lexicon, pool};

// Finds the words that can be spelled from a letter pool, each letter used
// at most as often as the pool has it. Reuse one filter across pools to
// avoid reallocating the scratch tally.
#[derive(Clone)]
pub struct WordFilter {
    word_tally: Box<[u16]>,
}

impl WordFilter {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Self {
        Self {
            word_tally: vec![0; alphabet.len() as usize].into_boxed_slice(),
        }
    }

    // word_tally is all zeros before and after.
    #[inline(always)]
    pub fn fits(&mut self, pool: &pool::LetterPool, word: &[u8]) -> bool {
        if word.is_empty() || word.len() > pool.len() {
            return false;
        }
        let mut ok = true;
        for &tile in word {
            let used = &mut self.word_tally[tile as usize];
            *used += 1;
            if *used > pool.count(tile) {
                ok = false;
                break;
            }
        }
        for &tile in word {
            self.word_tally[tile as usize] = 0;
        }
        ok
    }

    // longest first. equal lengths keep lexicon order.
    pub fn find_answers<'l>(
        &mut self,
        pool: &pool::LetterPool,
        lexicon: &'l lexicon::Lexicon,
        min_len: usize,
    ) -> Vec<&'l lexicon::Word> {
        let t0 = std::time::Instant::now();
        let mut answers = lexicon
            .words()
            .iter()
            .filter(|word| word.len() >= min_len && self.fits(pool, word.tiles()))
            .collect::<Vec<_>>();
        answers.sort_by(|a, b| b.len().cmp(&a.len()));
        tracing::debug!(
            "found {} answers among {} words in {:?}",
            answers.len(),
            lexicon.len(),
            t0.elapsed()
        );
        answers
    }
}
