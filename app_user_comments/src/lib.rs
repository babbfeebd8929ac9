use common::App;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub username: &'static str,
    pub text: &'static str,
}

pub struct UserComments;

impl App for UserComments {
    type Item = Comment;
    type Value = Vec<&'static str>;

    const NAME: &'static str = "user_comments";

    fn items() -> &'static [Comment] {
        &[
            Comment {
                username: "vatsal",
                text: "I enjoyed reading this.",
            },
            Comment {
                username: "alex",
                text: "Nice post!",
            },
            Comment {
                username: "baker",
                text: "This was boring to read. zzz....",
            },
            Comment {
                username: "alex",
                text: "That's not very nice Baker!",
            },
            Comment {
                username: "vatsal",
                text: "Don't listen to Baker, he's being mean.",
            },
            Comment {
                username: "alex",
                text: "Can't wait until the next post!",
            },
        ]
    }

    fn key(comment: &Comment) -> &str {
        comment.username
    }

    fn initial() -> Vec<&'static str> {
        Vec::new()
    }

    fn update(comment: &Comment, texts: &mut Vec<&'static str>) {
        texts.push(comment.text);
    }

    fn write_entry<W: Write>(
        out: &mut W,
        username: &str,
        texts: &Vec<&'static str>,
    ) -> io::Result<()> {
        writeln!(out, "User comments for '{username}':")?;
        for text in texts {
            writeln!(out, "  \"{text}\"")?;
        }
        Ok(())
    }
}
