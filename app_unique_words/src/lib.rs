use common::App;
use std::io::{self, Write};

/// Only key presence matters.
pub struct UniqueWords;

impl App for UniqueWords {
    type Item = &'static str;
    type Value = bool;

    const NAME: &'static str = "unique_words";

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

    fn initial() -> bool {
        true
    }

    fn update(_word: &&'static str, _seen: &mut bool) {}

    fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "Unique words")?;
        writeln!(out, "------------")
    }

    fn write_entry<W: Write>(out: &mut W, word: &str, _seen: &bool) -> io::Result<()> {
        writeln!(out, "{word}")
    }
}
