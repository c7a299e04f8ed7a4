// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, typist};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetKind {
    English,
    Polish,
    // whatever letters the lexicon uses.
    FromLexicon,
}

#[derive(Clone)]
pub struct StaticCheatConfig {
    alphabet_kind: AlphabetKind,
    pace: typist::Pace,
    min_len: usize, // >= 1
}

#[derive(Clone)]
pub enum CheatConfig {
    Static(StaticCheatConfig),
}

impl CheatConfig {
    #[inline(always)]
    pub fn alphabet_kind(&self) -> AlphabetKind {
        match self {
            CheatConfig::Static(x) => x.alphabet_kind,
        }
    }

    #[inline(always)]
    pub fn pace(&self) -> &typist::Pace {
        match self {
            CheatConfig::Static(x) => &x.pace,
        }
    }

    #[inline(always)]
    pub fn min_len(&self) -> usize {
        match self {
            CheatConfig::Static(x) => x.min_len,
        }
    }

    pub fn with_pace(self, pace: typist::Pace) -> Self {
        match self {
            CheatConfig::Static(x) => CheatConfig::Static(StaticCheatConfig { pace, ..x }),
        }
    }

    // 0 is treated as 1, the empty word never counts.
    pub fn with_min_len(self, min_len: usize) -> Self {
        match self {
            CheatConfig::Static(x) => CheatConfig::Static(StaticCheatConfig {
                min_len: min_len.max(1),
                ..x
            }),
        }
    }

    pub fn make_alphabet(&self, raw_words: &[String]) -> error::Returns<alphabet::Alphabet<'static>> {
        match self.alphabet_kind() {
            AlphabetKind::English => Ok(alphabet::make_english_alphabet()),
            AlphabetKind::Polish => Ok(alphabet::make_polish_alphabet()),
            AlphabetKind::FromLexicon => {
                alphabet::make_alphabet_from_words(raw_words.iter().map(String::as_str))
            }
        }
    }
}

pub fn make_english_cheat_config() -> CheatConfig {
    CheatConfig::Static(StaticCheatConfig {
        alphabet_kind: AlphabetKind::English,
        pace: typist::Pace::default(),
        min_len: 1,
    })
}

pub fn make_polish_cheat_config() -> CheatConfig {
    CheatConfig::Static(StaticCheatConfig {
        alphabet_kind: AlphabetKind::Polish,
        pace: typist::Pace::default(),
        min_len: 1,
    })
}

pub fn make_open_cheat_config() -> CheatConfig {
    CheatConfig::Static(StaticCheatConfig {
        alphabet_kind: AlphabetKind::FromLexicon,
        pace: typist::Pace::default(),
        min_len: 1,
    })
}

pub fn make_cheat_config(name: &str) -> error::Returns<CheatConfig> {
    match name.to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(make_english_cheat_config()),
        "polish" | "pl" => Ok(make_polish_cheat_config()),
        "open" | "auto" => Ok(make_open_cheat_config()),
        _ => {
            return_error!(format!(
                "invalid alphabet {:?} (english, polish, open)",
                name
            ));
        }
    }
}
