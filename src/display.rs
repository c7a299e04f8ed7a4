// Copyright (C) 2020-2026 Andy Kurnia.

use super::lexicon;

// answers must already be longest first.

pub fn print_answers<W: std::io::Write>(
    out: &mut W,
    answers: &[&lexicon::Word],
) -> std::io::Result<()> {
    for word in answers {
        writeln!(out, "{}", word.text())?;
    }
    Ok(())
}

pub fn print_answers_grouped<W: std::io::Write>(
    out: &mut W,
    answers: &[&lexicon::Word],
) -> std::io::Result<()> {
    let mut pt = 0;
    while pt < answers.len() {
        let cur_len = answers[pt].len();
        let pt2 = pt + answers[pt..].partition_point(|x| x.len() == cur_len);
        writeln!(
            out,
            "{} word{} of length {}:",
            pt2 - pt,
            if pt2 - pt == 1 { "" } else { "s" },
            cur_len
        )?;
        write!(out, " ")?;
        for word in &answers[pt..pt2] {
            write!(out, " {}", word.text())?;
        }
        writeln!(out)?;
        pt = pt2;
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct JsonAnswer<'a> {
    word: &'a str,
    length: usize,
}

pub fn print_answers_json<W: std::io::Write>(
    out: &mut W,
    answers: &[&lexicon::Word],
) -> std::io::Result<()> {
    let json_answers = answers
        .iter()
        .map(|word| JsonAnswer {
            word: word.text(),
            length: word.len(),
        })
        .collect::<Vec<_>>();
    serde_json::to_writer(&mut *out, &json_answers)?;
    writeln!(out)
}

// a reader that stops early (e.g. head) is not a failure.
pub fn end_of_output(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        x => x,
    }
}
