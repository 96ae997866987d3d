//! Load a CSV file, print it as JSON, then read a few typed cells.
//!
//! cargo run --example load_and_dump -- [path] [encoding]

use std::env;
use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let mut args = env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/example.csv").to_string());
    let encoding = args.next().unwrap_or_else(|| "utf-8".to_string());

    match run(&path, &encoding) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, path = %path, "Demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, encoding: &str) -> csvloader::Result<()> {
    let table = csvloader::load(path, encoding)?;

    println!("{}", table.to_json()?);

    for row in 0..table.row_count() as isize {
        let name = table.get_string(row, "name")?;
        match table.get_int_opt(row, "age") {
            Ok(Some(age)) => println!("{}: age {}", name, age),
            Ok(None) => println!("{}: age unknown", name),
            Err(err) => println!("{}: {}", name, err),
        }
        if let Ok(Some(joined)) = table.get_date_opt(row, "joined") {
            println!("  joined {}", joined);
        }
    }

    Ok(())
}
