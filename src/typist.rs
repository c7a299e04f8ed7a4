// Copyright (C) 2020-2026 Andy Kurnia.

use super::error::{self, Context};
use std::time::Duration;

// Chat apps throttle spammed messages, these delays are slow enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pace {
    pub countdown: Duration,
    pub after_type: Duration,
    pub after_enter: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            countdown: Duration::ZERO,
            after_type: Duration::from_millis(200),
            after_enter: Duration::from_millis(150),
        }
    }
}

// Whatever delivers keystrokes to the focused window.
pub trait Typist {
    fn type_word(&mut self, word: &str) -> error::Returns<()>;

    fn press_enter(&mut self) -> error::Returns<()>;

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// Drives X11 through the xdotool command.
pub struct XdotoolTypist {
    program: String,
}

impl XdotoolTypist {
    pub fn new() -> Self {
        Self::with_program("xdotool".into())
    }

    pub fn with_program(program: String) -> Self {
        Self { program }
    }

    fn run(&self, args: &[&str]) -> error::Returns<()> {
        let status = std::process::Command::new(&self.program)
            .args(args)
            .status()
            .context_with(|| format!("cannot run {}", self.program))?;
        if !status.success() {
            return_error!(format!("{} {:?} failed: {}", self.program, args, status));
        }
        Ok(())
    }
}

impl Default for XdotoolTypist {
    fn default() -> Self {
        Self::new()
    }
}

impl Typist for XdotoolTypist {
    fn type_word(&mut self, word: &str) -> error::Returns<()> {
        self.run(&["type", "--", word])
    }

    fn press_enter(&mut self) -> error::Returns<()> {
        self.run(&["key", "Return"])
    }
}

// Types each word and sends it, in order. Stops at the first failure.
pub fn relay_answers<T: Typist + ?Sized, S: AsRef<str>>(
    typist: &mut T,
    pace: &Pace,
    words: &[S],
) -> error::Returns<()> {
    if words.is_empty() {
        return Ok(());
    }
    if !pace.countdown.is_zero() {
        tracing::info!("typing starts in {:?}, focus the chat window", pace.countdown);
        typist.pause(pace.countdown);
    }
    for word in words {
        let word = word.as_ref();
        typist.type_word(word)?;
        typist.pause(pace.after_type);
        typist.press_enter()?;
        typist.pause(pace.after_enter);
        tracing::debug!("sent {}", word);
    }
    tracing::info!("sent {} words", words.len());
    Ok(())
}
