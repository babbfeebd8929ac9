use app_unique_words::UniqueWords;

fn main() -> anyhow::Result<()> {
    common::init_logger();
    common::run::<UniqueWords>()
}
