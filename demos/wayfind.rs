//! Find a path through an ASCII map.
//!
//! Run: cargo run --bin wayfind -- demos/maps/rooms.txt [demos/config.json]
//!
//! Set `RUST_LOG=debug` to see search summaries.

use std::error::Error;
use std::fs;

use wayfind_demos::{DemoConfig, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let Some(map_path) = args.next() else {
        return Err("usage: wayfind <map.txt> [config.json]".into());
    };
    let map = fs::read_to_string(&map_path)?;
    let config = match args.next() {
        Some(path) => DemoConfig::from_json(&fs::read_to_string(path)?)?,
        None => DemoConfig::default(),
    };
    log::info!("loaded {map_path} with {:?}", config.grid);
    print!("{}", run(&map, &config)?);
    Ok(())
}
