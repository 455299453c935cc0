//! Write random portraits to disk.
//!
//! Usage: cargo run -p visage --example dump_portrait -- [men|women|any] [OUT_DIR] [COUNT]

use std::path::PathBuf;

use visage::prelude::*;
use visage_core::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let category = match args.next().as_deref() {
        Some("men") => Some(Category::Man),
        Some("women") => Some(Category::Woman),
        Some("any") | None => None,
        Some(other) => return Err(format!("unknown category '{}'", other).into()),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let count: usize = args.next().map(|n| n.parse()).transpose()?.unwrap_or(1);

    let library = visage::init(Config::default())?;
    tracing::info!("{} portraits available", library.catalog().len());

    std::fs::create_dir_all(&out_dir)?;
    for i in 0..count {
        let portrait = match category {
            Some(category) => library.random_of(category)?,
            None => library.random_portrait()?,
        };
        let path = out_dir.join(format!("portrait-{:03}.jpg", i));
        std::fs::write(&path, &*portrait)?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), portrait.len());
    }

    Ok(())
}
