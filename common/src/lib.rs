use anyhow::Context;
use indexmap::IndexMap;
use std::io::{self, Write};
use tracing::{debug, info};

mod logger;

pub use logger::init_logger;

pub type ResultMap<V> = IndexMap<String, V>;

/// New keys start at `initial()` and keep the position of their first appearance.
pub fn aggregate<'a, T: 'a, V>(
    items: impl IntoIterator<Item = &'a T>,
    key_fn: impl Fn(&T) -> &str,
    initial: impl Fn() -> V,
    update_fn: impl Fn(&T, &mut V),
) -> ResultMap<V> {
    let mut map = ResultMap::new();
    for item in items {
        let value = map.entry(key_fn(item).to_owned()).or_insert_with(&initial);
        update_fn(item, value);
    }
    map
}

pub trait App {
    type Item: 'static;
    type Value;

    const NAME: &'static str;

    fn items() -> &'static [Self::Item];

    fn key(item: &Self::Item) -> &str;

    fn initial() -> Self::Value;

    fn update(item: &Self::Item, value: &mut Self::Value);

    fn write_header<W: Write>(_out: &mut W) -> io::Result<()> {
        Ok(())
    }

    fn write_entry<W: Write>(out: &mut W, key: &str, value: &Self::Value) -> io::Result<()>;

    fn aggregate_items(items: &[Self::Item]) -> ResultMap<Self::Value> {
        aggregate(items, Self::key, Self::initial, Self::update)
    }

    fn aggregate() -> ResultMap<Self::Value> {
        Self::aggregate_items(Self::items())
    }
}

pub fn report<A: App, W: Write>(map: &ResultMap<A::Value>, out: &mut W) -> io::Result<()> {
    A::write_header(out)?;
    for (key, value) in map {
        A::write_entry(out, key, value)?;
    }
    Ok(())
}

pub fn run_to<A: App, W: Write>(out: &mut W) -> anyhow::Result<()> {
    let map = A::aggregate();
    info!(app = A::NAME, items = A::items().len(), keys = map.len(), "aggregated");

    report::<A, _>(&map, out).with_context(|| format!("writing {} report", A::NAME))?;
    out.flush().context("flushing report")?;
    debug!(app = A::NAME, "report done");
    Ok(())
}

/// Aggregates the app's dataset and prints the report to stdout.
pub fn run<A: App>() -> anyhow::Result<()> {
    run_to::<A, _>(&mut io::stdout().lock())
}
