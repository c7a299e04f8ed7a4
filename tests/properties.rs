// Copyright (C) 2020-2026 Andy Kurnia.

use proptest::prelude::*;
use wordcheat::{alphabet, cheat_config, filter, lexicon, pool};

// small alphabet slice so that random words actually hit.
fn letters() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-fA-F]", 0..10)
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]{0,6}", 0..40)
}

// letters no generated word uses, some of them outside english too.
fn strangers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[g-zG-Zéß7!]{1,3}", 1..5)
}

fn solve(letters: &[String], words: &[String]) -> Vec<String> {
    solve_with(alphabet::make_english_alphabet(), letters, words)
}

// alphabet taken from the words, as --alphabet open does.
fn solve_open(letters: &[String], words: &[String]) -> Vec<String> {
    let alphabet = cheat_config::make_open_cheat_config()
        .make_alphabet(words)
        .unwrap();
    solve_with(alphabet, letters, words)
}

fn solve_with(
    alphabet: alphabet::Alphabet<'_>,
    letters: &[String],
    words: &[String],
) -> Vec<String> {
    let reader = alphabet::AlphabetReader::new(&alphabet);
    let pool = pool::LetterPool::from_tokens(&alphabet, &reader, letters);
    let lexicon = lexicon::Lexicon::from_words(&reader, words.iter().map(String::as_str));
    filter::WordFilter::new(&alphabet)
        .find_answers(&pool, &lexicon, 1)
        .into_iter()
        .map(|word| word.text().to_string())
        .collect()
}

fn count(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}

fn pool_count(letters: &[String], c: char) -> usize {
    letters.iter().map(|s| count(&s.to_lowercase(), c)).sum()
}

proptest! {
    #[test]
    fn answers_stay_within_the_pool(letters in letters(), words in words()) {
        for answer in solve(&letters, &words) {
            prop_assert!(!answer.is_empty());
            for c in answer.chars() {
                prop_assert!(count(&answer, c) <= pool_count(&letters, c));
            }
        }
    }

    #[test]
    fn every_fitting_word_is_found(letters in letters(), words in words()) {
        let answers = solve(&letters, &words);
        for word in &words {
            let fits = !word.is_empty()
                && word.chars().all(|c| count(word, c) <= pool_count(&letters, c));
            prop_assert_eq!(fits, answers.contains(word));
        }
    }

    #[test]
    fn filtering_is_idempotent(letters in letters(), words in words()) {
        prop_assert_eq!(solve(&letters, &words), solve(&letters, &words));
    }

    #[test]
    fn more_letters_never_lose_answers(
        letters in letters(),
        extra in "[a-f]",
        words in words(),
    ) {
        let before = solve(&letters, &words);
        let mut more_letters = letters.clone();
        more_letters.push(extra);
        let after = solve(&more_letters, &words);
        for answer in &before {
            prop_assert!(after.contains(answer));
        }
    }

    #[test]
    fn letters_no_word_uses_change_nothing(
        letters in letters(),
        extra in strangers(),
        words in words(),
    ) {
        let mut more_letters = letters.clone();
        more_letters.extend(extra);
        prop_assert_eq!(solve(&letters, &words), solve(&more_letters, &words));
        prop_assert_eq!(solve_open(&letters, &words), solve_open(&more_letters, &words));
    }

    #[test]
    fn open_alphabet_agrees_with_english(letters in letters(), words in words()) {
        prop_assert_eq!(solve_open(&letters, &words), solve(&letters, &words));
    }

    #[test]
    fn longest_first(letters in letters(), words in words()) {
        let answers = solve(&letters, &words);
        for pair in answers.windows(2) {
            prop_assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
    }
}

#[test]
fn empty_pool_finds_nothing() {
    let words = ["a", "cat", ""].map(String::from);
    assert!(solve(&[], &words).is_empty());
}

#[test]
fn cats_example() {
    let letters = ["c", "a", "t", "s"].map(String::from);
    let words = ["cat", "cats", "at", "dog", "act"].map(String::from);
    assert_eq!(solve(&letters, &words), ["cats", "cat", "act", "at"]);
}

#[test]
fn doubled_letter_example() {
    let letters = ["a", "a", "b"].map(String::from);
    let words = ["aab", "ab", "aa"].map(String::from);
    assert_eq!(solve(&letters, &words), ["aab", "ab", "aa"]);
}

#[test]
fn open_alphabet_with_an_unused_letter() {
    let letters = ["c", "a", "t", "s"].map(String::from);
    let words = ["cat", "at"].map(String::from);
    assert_eq!(solve_open(&letters, &words), ["cat", "at"]);
    let letters = ["c", "a", "f", "é"].map(String::from);
    let words = ["caf", "café"].map(String::from);
    assert_eq!(solve(&letters, &words), ["caf"]);
    assert_eq!(solve_open(&letters, &words), ["café", "caf"]);
}
