use app_word_count::WordCount;

fn main() -> anyhow::Result<()> {
    common::init_logger();
    common::run::<WordCount>()
}
