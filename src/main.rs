use anyhow::Context;
use chaintable::{logging, HashTable, Settings};

const DEMO_LINES: [(&str, &str); 3] = [
    ("line_1", "Tiny hash table\n"),
    ("line_2", "Filled beyond capacity\n"),
    ("line_3", "Linked list saves the day!\n"),
];

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    logging::init_logging(&settings.logging())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let mut table = HashTable::new(settings.demo_capacity)?;

    for (key, value) in DEMO_LINES {
        table.insert(key, value)?;
    }

    for (key, _) in DEMO_LINES {
        let value = table
            .retrieve(key)
            .with_context(|| format!("{key} missing after insert"))?;
        print!("{value}");
    }

    let old_capacity = table.capacity();
    let resized = table.resize()?;
    table.destroy();
    let table = resized;
    let new_capacity = table.capacity();

    println!("\nResizing hash table from {old_capacity} to {new_capacity}.");

    table.destroy();

    Ok(())
}
