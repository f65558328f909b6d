//! rowcast screen example
//!
//! Drives a list screen the way a user would: a few taps on "add", a few
//! swipe-to-delete gestures, then prints the rows and the row updates the
//! table performed.
//!
//! Run with: cargo run -p rowcast --example screen [config.toml]
//! Set RUST_LOG=rowcast_core=debug,rowcast=trace to watch the changes flow.

use rand::Rng;
use rowcast::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ListConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => ListConfig::default(),
    };

    let screen = ListScreen::from_config(&config)?;
    let mut rng = rand::thread_rng();

    println!("{} ({} rows): {:?}", screen.title(), screen.row_count(), screen.rows());

    for _ in 0..3 {
        let (value, row) = screen.add_item(&mut rng);
        println!("added {value} at row {row}");
    }
    for _ in 0..2 {
        let row = rng.gen_range(0..screen.row_count() + 2);
        screen.delete_row(row);
        println!("delete row {row}");
    }

    println!("{} ({} rows): {:?}", screen.title(), screen.row_count(), screen.rows());
    for update in screen.take_updates() {
        println!("  {update:?}");
    }
    assert!(screen.is_in_sync());

    Ok(())
}
