// Copyright (C) 2020-2026 Andy Kurnia.

use wordcheat::{alphabet, cheat_config, display, error, filter, lexicon, logging, pool, typist};

/// Finds every word spelled only from the given letters, longest first,
/// and optionally types each one into the focused chat window.
#[derive(clap::Parser)]
#[command(name = "cheat", version)]
struct Args {
    /// Available letters, case-insensitive. Repeat a letter to use it twice.
    letters: Vec<String>,

    /// Word list to search.
    #[arg(short, long, default_value = "words.txt")]
    lexicon: std::path::PathBuf,

    /// Word list format (text, json, csv). Guessed from the extension if absent.
    #[arg(short, long)]
    format: Option<lexicon::LexiconFormat>,

    /// Alphabet (english, polish, open). open takes letters from the word list.
    /// english and polish skip words with any other letter.
    #[arg(short, long, default_value = "open")]
    alphabet: String,

    /// Shortest answer to report.
    #[arg(short, long, default_value_t = 1)]
    min_len: usize,

    /// Type each answer followed by enter, through xdotool.
    #[arg(short = 't', long = "type")]
    type_answers: bool,

    /// Seconds to wait before typing, to focus the chat window.
    #[arg(long, default_value_t = 0)]
    countdown: u64,

    /// Milliseconds to wait after typing a word.
    #[arg(long)]
    type_delay_ms: Option<u64>,

    /// Milliseconds to wait after pressing enter.
    #[arg(long)]
    enter_delay_ms: Option<u64>,

    /// Print answers as a json array.
    #[arg(long)]
    json: bool,

    /// Print answers grouped by length.
    #[arg(long, conflicts_with = "json")]
    grouped: bool,
}

fn make_pace(args: &Args) -> typist::Pace {
    let default_pace = typist::Pace::default();
    typist::Pace {
        countdown: std::time::Duration::from_secs(args.countdown),
        after_type: args
            .type_delay_ms
            .map_or(default_pace.after_type, std::time::Duration::from_millis),
        after_enter: args
            .enter_delay_ms
            .map_or(default_pace.after_enter, std::time::Duration::from_millis),
    }
}

pub fn main() -> error::Returns<()> {
    let args = <Args as clap::Parser>::parse();
    logging::init();

    let cheat_config = cheat_config::make_cheat_config(&args.alphabet)?
        .with_min_len(args.min_len)
        .with_pace(make_pace(&args));
    let (alphabet, lexicon) = lexicon::load(&args.lexicon, args.format, &cheat_config)?;
    let alphabet_reader = alphabet::AlphabetReader::new(&alphabet);
    let pool = pool::LetterPool::from_tokens(&alphabet, &alphabet_reader, &args.letters);
    if pool.is_empty() {
        tracing::warn!("no letters given");
    }

    let answers = filter::WordFilter::new(&alphabet).find_answers(
        &pool,
        &lexicon,
        cheat_config.min_len(),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    display::end_of_output(if args.json {
        display::print_answers_json(&mut out, &answers)
    } else if args.grouped {
        display::print_answers_grouped(&mut out, &answers)
    } else {
        display::print_answers(&mut out, &answers)
    })?;
    drop(out);

    if args.type_answers {
        typist::relay_answers(
            &mut typist::XdotoolTypist::new(),
            cheat_config.pace(),
            &answers.iter().map(|word| word.text()).collect::<Vec<_>>(),
        )?;
    }

    Ok(())
}
