// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, cheat_config, error::{self, Context}, fash};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexiconFormat {
    Text,
    Json,
    Csv,
}

impl LexiconFormat {
    // anything that is not .json or .csv is read as one word per line.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => LexiconFormat::Json,
            Some("csv") => LexiconFormat::Csv,
            _ => LexiconFormat::Text,
        }
    }
}

impl std::str::FromStr for LexiconFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(LexiconFormat::Text),
            "json" => Ok(LexiconFormat::Json),
            "csv" => Ok(LexiconFormat::Csv),
            _ => Err(format!("invalid lexicon format {:?} (text, json, csv)", s)),
        }
    }
}

pub struct Word {
    text: Box<str>,
    tiles: Box<[u8]>,
}

impl Word {
    // lowercase, as it would be typed.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // number of letters, not bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl std::fmt::Debug for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.fmt(f)
    }
}

pub struct Lexicon {
    words: Box<[Word]>,
    num_skipped: usize,
}

impl Lexicon {
    // words are trimmed and lowercased. blank words and repeats are dropped,
    // words with letters outside the alphabet are skipped and counted.
    pub fn from_words<'w, I: IntoIterator<Item = &'w str>>(
        alphabet_reader: &alphabet::AlphabetReader<'_>,
        raw_words: I,
    ) -> Self {
        let mut words = Vec::new();
        let mut seen = fash::MyHashSet::<Box<[u8]>>::default();
        let mut num_skipped = 0;
        let mut v = Vec::new();
        for raw_word in raw_words {
            let trimmed = raw_word.trim();
            if trimmed.is_empty() {
                continue;
            }
            if alphabet_reader.read_tiles(trimmed, &mut v).is_err() {
                num_skipped += 1;
                continue;
            }
            let tiles: Box<[u8]> = v[..].into();
            if seen.contains(&tiles) {
                continue;
            }
            seen.insert(tiles.clone());
            words.push(Word {
                text: trimmed.to_lowercase().into_boxed_str(),
                tiles,
            });
        }
        if num_skipped > 0 {
            tracing::warn!(
                "skipped {} words with letters outside the alphabet",
                num_skipped
            );
        }
        Self {
            words: words.into_boxed_slice(),
            num_skipped,
        }
    }

    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline(always)]
    pub fn num_skipped(&self) -> usize {
        self.num_skipped
    }
}

#[inline(always)]
pub fn read_text_words(giant_string: &str) -> Vec<String> {
    giant_string
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// Accepts either an array of strings, or an object keyed by word where
// each value is an object (the WordsAPI layout). In the object layout,
// only entries with definitions count, and phrases, abbreviations,
// contractions and hyphenations are left out.
pub fn read_json_words(giant_string: &str) -> error::Returns<Vec<String>> {
    let value = serde_json::from_str::<serde_json::Value>(giant_string)?;
    let mut words = Vec::new();
    match value {
        serde_json::Value::Array(elts) => {
            for (i, elt) in elts.into_iter().enumerate() {
                match elt {
                    serde_json::Value::String(s) => words.push(s),
                    _ => {
                        return_error!(format!("json element {} is not a string", i));
                    }
                }
            }
        }
        serde_json::Value::Object(entries) => {
            for (word, entry) in entries {
                if entry.get("definitions").is_some()
                    && !word.contains([' ', '\'', '-', '.'])
                {
                    words.push(word);
                }
            }
        }
        _ => {
            return_error!("json lexicon must be an array or an object".into());
        }
    }
    Ok(words)
}

// no header, first column is the word.
pub fn read_csv_words<R: std::io::Read>(r: R) -> error::Returns<Vec<String>> {
    let mut words = Vec::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(r);
    for result in csv_reader.records() {
        let record = result?;
        if let Some(word) = record.get(0) {
            if !word.trim().is_empty() {
                words.push(word.to_string());
            }
        }
    }
    Ok(words)
}

pub fn read_raw_words(
    path: &std::path::Path,
    format: LexiconFormat,
) -> error::Returns<Vec<String>> {
    let giant_string = std::fs::read_to_string(path)
        .context_with(|| format!("cannot read lexicon {}", path.display()))?;
    let words = match format {
        LexiconFormat::Text => read_text_words(&giant_string),
        LexiconFormat::Json => read_json_words(&giant_string)
            .context_with(|| format!("bad json in {}", path.display()))?,
        LexiconFormat::Csv => read_csv_words(giant_string.as_bytes())
            .context_with(|| format!("bad csv in {}", path.display()))?,
    };
    Ok(words)
}

// The alphabet may depend on the words, so both come back together.
pub fn load(
    path: &std::path::Path,
    format: Option<LexiconFormat>,
    cheat_config: &cheat_config::CheatConfig,
) -> error::Returns<(alphabet::Alphabet<'static>, Lexicon)> {
    let t0 = std::time::Instant::now();
    let format = format.unwrap_or_else(|| LexiconFormat::from_path(path));
    let raw_words = read_raw_words(path, format)?;
    let t1 = std::time::Instant::now();
    let alphabet = cheat_config.make_alphabet(&raw_words)?;
    let lexicon = Lexicon::from_words(
        &alphabet::AlphabetReader::new(&alphabet),
        raw_words.iter().map(String::as_str),
    );
    tracing::info!(
        "read {} entries from {} ({:?}) in {:?}, kept {} words in {:?}",
        raw_words.len(),
        path.display(),
        format,
        t1 - t0,
        lexicon.len(),
        t1.elapsed()
    );
    Ok((alphabet, lexicon))
}
