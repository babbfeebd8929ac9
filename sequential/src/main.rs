use app_unique_words::UniqueWords;
use app_user_comments::UserComments;
use app_word_count::WordCount;
use clap::{Parser, ValueEnum};
use common::run_to;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = AppName::All)]
    app_name: AppName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AppName {
    UniqueWords,
    UserComments,
    WordCount,
    All,
}

impl AppName {
    fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        info!("running {:?}", self);
        match self {
            AppName::UniqueWords => run_to::<UniqueWords, _>(out),
            AppName::UserComments => run_to::<UserComments, _>(out),
            AppName::WordCount => run_to::<WordCount, _>(out),
            AppName::All => {
                for app in [AppName::UniqueWords, AppName::UserComments, AppName::WordCount] {
                    app.run(out)?;
                }
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    common::init_logger();
    let cli = Cli::parse();
    cli.app_name.run(&mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_runs_all() {
        let cli = Cli::try_parse_from(["sequential"]).unwrap();
        assert_eq!(cli.app_name, AppName::All);
    }

    fn output(app: AppName) -> String {
        let mut out = Vec::new();
        app.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_each_app_prints() {
        assert!(output(AppName::UniqueWords).starts_with("Unique words\n"));
        assert!(output(AppName::UserComments).starts_with("User comments for 'vatsal':\n"));
        assert!(output(AppName::WordCount).starts_with("Word 'some words' appeared 2 time(s).\n"));
    }

    #[test]
    fn test_all_concatenates_in_order() {
        let expected = [AppName::UniqueWords, AppName::UserComments, AppName::WordCount]
            .into_iter()
            .map(output)
            .collect::<String>();
        assert_eq!(output(AppName::All), expected);
    }

    #[test]
    fn test_app_name() {
        let cli = Cli::try_parse_from(["sequential", "-a", "word-count"]).unwrap();
        assert_eq!(cli.app_name, AppName::WordCount);
        assert!(Cli::try_parse_from(["sequential", "--app-name", "wc"]).is_err());
    }
}
