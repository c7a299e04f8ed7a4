// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// tile numbering follows alphabet order (not necessarily unicode order).
// unlike the board game, there is no blank, so tile 0 is a real letter.

pub struct Tile<'a> {
    label: &'a str,
    lower_label: &'a str,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
}

// built at runtime from whatever letters the lexicon uses.
pub struct DynamicAlphabet {
    labels: Box<[(String, String)]>,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
    Dynamic(DynamicAlphabet),
}

impl Alphabet<'_> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
            Alphabet::Dynamic(x) => x.labels.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> Option<&str> {
        match self {
            Alphabet::Static(x) => x.tiles.get(idx as usize).map(|t| t.label),
            Alphabet::Dynamic(x) => x.labels.get(idx as usize).map(|t| t.0.as_str()),
        }
    }

    #[inline(always)]
    pub fn lower_label(&self, idx: u8) -> Option<&str> {
        match self {
            Alphabet::Static(x) => x.tiles.get(idx as usize).map(|t| t.lower_label),
            Alphabet::Dynamic(x) => x.labels.get(idx as usize).map(|t| t.1.as_str()),
        }
    }

    // appends the lowercase spelling of the tiles.
    pub fn fmt_tiles(&self, s: &mut String, tiles: &[u8]) {
        for &tile in tiles {
            s.push_str(self.lower_label(tile).unwrap_or("?"));
        }
    }
}

static ENGLISH_TILES: &[Tile<'static>] = &[
    Tile { label: "A", lower_label: "a" },
    Tile { label: "B", lower_label: "b" },
    Tile { label: "C", lower_label: "c" },
    Tile { label: "D", lower_label: "d" },
    Tile { label: "E", lower_label: "e" },
    Tile { label: "F", lower_label: "f" },
    Tile { label: "G", lower_label: "g" },
    Tile { label: "H", lower_label: "h" },
    Tile { label: "I", lower_label: "i" },
    Tile { label: "J", lower_label: "j" },
    Tile { label: "K", lower_label: "k" },
    Tile { label: "L", lower_label: "l" },
    Tile { label: "M", lower_label: "m" },
    Tile { label: "N", lower_label: "n" },
    Tile { label: "O", lower_label: "o" },
    Tile { label: "P", lower_label: "p" },
    Tile { label: "Q", lower_label: "q" },
    Tile { label: "R", lower_label: "r" },
    Tile { label: "S", lower_label: "s" },
    Tile { label: "T", lower_label: "t" },
    Tile { label: "U", lower_label: "u" },
    Tile { label: "V", lower_label: "v" },
    Tile { label: "W", lower_label: "w" },
    Tile { label: "X", lower_label: "x" },
    Tile { label: "Y", lower_label: "y" },
    Tile { label: "Z", lower_label: "z" },
];

static POLISH_TILES: &[Tile<'static>] = &[
    Tile { label: "A", lower_label: "a" },
    Tile { label: "Ą", lower_label: "ą" },
    Tile { label: "B", lower_label: "b" },
    Tile { label: "C", lower_label: "c" },
    Tile { label: "Ć", lower_label: "ć" },
    Tile { label: "D", lower_label: "d" },
    Tile { label: "E", lower_label: "e" },
    Tile { label: "Ę", lower_label: "ę" },
    Tile { label: "F", lower_label: "f" },
    Tile { label: "G", lower_label: "g" },
    Tile { label: "H", lower_label: "h" },
    Tile { label: "I", lower_label: "i" },
    Tile { label: "J", lower_label: "j" },
    Tile { label: "K", lower_label: "k" },
    Tile { label: "L", lower_label: "l" },
    Tile { label: "Ł", lower_label: "ł" },
    Tile { label: "M", lower_label: "m" },
    Tile { label: "N", lower_label: "n" },
    Tile { label: "Ń", lower_label: "ń" },
    Tile { label: "O", lower_label: "o" },
    Tile { label: "Ó", lower_label: "ó" },
    Tile { label: "P", lower_label: "p" },
    Tile { label: "R", lower_label: "r" },
    Tile { label: "S", lower_label: "s" },
    Tile { label: "Ś", lower_label: "ś" },
    Tile { label: "T", lower_label: "t" },
    Tile { label: "U", lower_label: "u" },
    Tile { label: "W", lower_label: "w" },
    Tile { label: "Y", lower_label: "y" },
    Tile { label: "Z", lower_label: "z" },
    Tile { label: "Ź", lower_label: "ź" },
    Tile { label: "Ż", lower_label: "ż" },
];

pub fn make_english_alphabet() -> Alphabet<'static> {
    Alphabet::Static(StaticAlphabet {
        tiles: ENGLISH_TILES,
    })
}

pub fn make_polish_alphabet() -> Alphabet<'static> {
    Alphabet::Static(StaticAlphabet {
        tiles: POLISH_TILES,
    })
}

// one tile per distinct lowercase char, in char order.
// whitespace is never a letter.
pub fn make_alphabet_from_words<'w, I: IntoIterator<Item = &'w str>>(
    words: I,
) -> error::Returns<Alphabet<'static>> {
    let mut chars = std::collections::BTreeSet::new();
    for word in words {
        chars.extend(word.chars().flat_map(char::to_lowercase));
    }
    chars.retain(|c| !c.is_whitespace());
    if chars.len() > u8::MAX as usize {
        return_error!(format!(
            "lexicon uses {} distinct letters, at most {} are supported",
            chars.len(),
            u8::MAX
        ));
    }
    Ok(Alphabet::Dynamic(DynamicAlphabet {
        labels: chars
            .into_iter()
            .map(|c| (c.to_uppercase().collect::<String>(), c.to_string()))
            .collect(),
    }))
}

pub struct AlphabetReader<'a> {
    // sorted by first byte, then longest label first.
    supported_tiles: Box<[(u8, &'a [u8])]>,
}

impl<'a> AlphabetReader<'a> {
    // input is matched against lowercase labels only, callers lowercase first.
    pub fn new(alphabet: &'a Alphabet<'_>) -> Self {
        let mut supported_tiles = (0..alphabet.len())
            .filter_map(|tile| {
                alphabet
                    .lower_label(tile)
                    .filter(|label| !label.is_empty())
                    .map(|label| (tile, label.as_bytes()))
            })
            .collect::<Vec<_>>();
        supported_tiles.sort_unstable_by(|(ta, a), (tb, b)| {
            a[0].cmp(&b[0])
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.cmp(b))
                .then_with(|| ta.cmp(tb))
        });
        // first tile wins if two tiles share a label.
        supported_tiles.dedup_by(|later, earlier| later.1 == earlier.1);
        Self {
            supported_tiles: supported_tiles.into_boxed_slice(),
        }
    }

    // returns the tile and the byte index after it.
    #[inline(always)]
    pub fn next_tile(&self, sb: &[u8], ix: usize) -> Option<(u8, usize)> {
        let first = *sb.get(ix)?;
        let start = self.supported_tiles.partition_point(|(_, label)| label[0] < first);
        for &(tile, label) in &self.supported_tiles[start..] {
            if label[0] != first {
                break;
            }
            if sb[ix..].starts_with(label) {
                return Some((tile, ix + label.len()));
            }
        }
        None
    }

    // clears v and fills it with the tiles of s (any case).
    // on failure, returns the byte index of the first unreadable char.
    pub fn read_tiles(&self, s: &str, v: &mut Vec<u8>) -> Result<(), usize> {
        v.clear();
        let lowered = s.to_lowercase();
        let sb = lowered.as_bytes();
        v.reserve(sb.len());
        let mut ix = 0;
        while ix < sb.len() {
            match self.next_tile(sb, ix) {
                Some((tile, end_ix)) => {
                    v.push(tile);
                    ix = end_ix;
                }
                None => return Err(ix),
            }
        }
        Ok(())
    }

    // like read_tiles, but drops unreadable chars instead of stopping.
    // returns how many chars were dropped.
    pub fn read_known_tiles(&self, s: &str, v: &mut Vec<u8>) -> usize {
        v.clear();
        let lowered = s.to_lowercase();
        let sb = lowered.as_bytes();
        v.reserve(sb.len());
        let mut num_dropped = 0;
        let mut ix = 0;
        while ix < sb.len() {
            match self.next_tile(sb, ix) {
                Some((tile, end_ix)) => {
                    v.push(tile);
                    ix = end_ix;
                }
                None => {
                    num_dropped += 1;
                    ix += lowered[ix..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        num_dropped
    }

    // like read_tiles, but reports the offending input.
    pub fn parse(&self, s: &str) -> error::Returns<Vec<u8>> {
        let mut v = Vec::new();
        if let Err(ix) = self.read_tiles(s, &mut v) {
            let lowered = s.to_lowercase();
            let bad = lowered[ix..].chars().next().unwrap_or('?');
            return_error!(format!("invalid letter {:?} in {:?}", bad, s));
        }
        Ok(v)
    }
}
