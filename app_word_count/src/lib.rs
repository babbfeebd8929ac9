use common::App;
use std::io::{self, Write};

pub struct WordCount;

impl App for WordCount {
    type Item = &'static str;
    type Value = usize;

    const NAME: &'static str = "word_count";

    fn items() -> &'static [&'static str] {
        &[
            "some words",
            "repeat",
            "word",
            "test",
            "repeat",
            "repeat",
            "some words",
            "test",
            "another word",
            "test",
        ]
    }

    fn key<'a>(word: &'a &'static str) -> &'a str {
        word
    }

    fn initial() -> usize {
        0
    }

    fn update(_word: &&'static str, count: &mut usize) {
        *count += 1;
    }

    fn write_entry<W: Write>(out: &mut W, word: &str, count: &usize) -> io::Result<()> {
        writeln!(out, "Word '{word}' appeared {count} time(s).")
    }
}
