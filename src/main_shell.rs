// Copyright (C) 2020-2026 Andy Kurnia.

use wordcheat::{
    alphabet, cheat_config, display, error, filter, lexicon, logging, pool, typist,
};

/// Interactive word finder. Loads the word list once, then answers
/// letter queries until exit.
#[derive(clap::Parser)]
#[command(name = "shell", version)]
struct Args {
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
}

static HELP: &str = "\
letters <letters...>   list words spelled from the letters
type <letters...>      same, then type each word into the focused window
load <path> [format]   switch word list (format: text, json, csv)
alphabet <name>        reload the word list with another alphabet
minlen <n>             hide answers shorter than n
source <file>          run commands from a file
exit";

struct Session {
    cheat_config: cheat_config::CheatConfig,
    lexicon_path: std::path::PathBuf,
    lexicon_format: Option<lexicon::LexiconFormat>,
    alphabet: alphabet::Alphabet<'static>,
    lexicon: lexicon::Lexicon,
    word_filter: filter::WordFilter,
}

impl Session {
    fn load(
        cheat_config: cheat_config::CheatConfig,
        lexicon_path: std::path::PathBuf,
        lexicon_format: Option<lexicon::LexiconFormat>,
    ) -> error::Returns<Self> {
        let (alphabet, lexicon) = lexicon::load(&lexicon_path, lexicon_format, &cheat_config)?;
        let word_filter = filter::WordFilter::new(&alphabet);
        println!(
            "{} words from {} ({} skipped)",
            lexicon.len(),
            lexicon_path.display(),
            lexicon.num_skipped()
        );
        Ok(Self {
            cheat_config,
            lexicon_path,
            lexicon_format,
            alphabet,
            lexicon,
            word_filter,
        })
    }

    fn find(&mut self, tokens: &[String]) -> Vec<&lexicon::Word> {
        let alphabet_reader = alphabet::AlphabetReader::new(&self.alphabet);
        let pool = pool::LetterPool::from_tokens(&self.alphabet, &alphabet_reader, tokens);
        let mut pool_str = String::new();
        pool.fmt_letters(&self.alphabet, &mut pool_str);
        if pool.num_ignored() > 0 {
            println!(
                "letters: {} ({}, {} not in any word)",
                pool_str,
                pool.len(),
                pool.num_ignored()
            );
        } else {
            println!("letters: {} ({})", pool_str, pool.len());
        }
        self.word_filter
            .find_answers(&pool, &self.lexicon, self.cheat_config.min_len())
    }

    // errors are reported by the caller, the session stays usable.
    fn execute(&mut self, strings: &[String]) -> error::Returns<()> {
        match strings[0].as_str() {
            "help" => {
                println!("{}", HELP);
            }
            "letters" | "l" => {
                let answers = self.find(&strings[1..]);
                display::print_answers_grouped(&mut std::io::stdout().lock(), &answers)?;
                println!("{} answers", answers.len());
            }
            "type" => {
                let pace = *self.cheat_config.pace();
                let answers = self.find(&strings[1..]);
                let words = answers.iter().map(|word| word.text()).collect::<Vec<_>>();
                typist::relay_answers(&mut typist::XdotoolTypist::new(), &pace, &words)?;
            }
            "load" => {
                if strings.len() < 2 {
                    wordcheat::return_error!("need a path".into());
                }
                let lexicon_format = match strings.get(2) {
                    Some(s) => Some(s.parse::<lexicon::LexiconFormat>()?),
                    None => None,
                };
                *self = Session::load(
                    self.cheat_config.clone(),
                    strings[1].clone().into(),
                    lexicon_format,
                )?;
            }
            "alphabet" => {
                if strings.len() < 2 {
                    wordcheat::return_error!("need an alphabet name".into());
                }
                let cheat_config = cheat_config::make_cheat_config(&strings[1])?
                    .with_min_len(self.cheat_config.min_len())
                    .with_pace(*self.cheat_config.pace());
                *self = Session::load(
                    cheat_config,
                    self.lexicon_path.clone(),
                    self.lexicon_format,
                )?;
            }
            "minlen" => {
                let min_len = match strings.get(1).map(|s| s.parse::<usize>()) {
                    Some(Ok(n)) => n,
                    _ => {
                        wordcheat::return_error!("need a number".into());
                    }
                };
                self.cheat_config = self.cheat_config.clone().with_min_len(min_len);
                println!("minlen {}", self.cheat_config.min_len());
            }
            _ => {
                wordcheat::return_error!("invalid input, help for help".into());
            }
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    let args = <Args as clap::Parser>::parse();
    logging::init();

    let mut session = Session::load(
        cheat_config::make_cheat_config(&args.alphabet)?,
        args.lexicon,
        args.format,
    )?;

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {}", err);
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            if let Err(err) = session.execute(&strings) {
                                println!("{}", err);
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
