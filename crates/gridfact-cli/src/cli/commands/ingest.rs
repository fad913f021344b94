use super::exit_codes;
use crate::cli::args::IngestArgs;
use anyhow::Result;
use gridfact_core::storage::ingest::ingest_dir;
use gridfact_core::storage::Store;

pub fn cmd_ingest(args: IngestArgs) -> Result<i32> {
    ensure_parent_dir(&args.db)?;
    let store = Store::open(&args.db)?;

    println!("Loading CSV files from: {}", args.data.display());
    let report = ingest_dir(&store, &args.data)?;
    println!("Ingest run started at {}", report.started_at);

    for load in &report.tables {
        let total = store.count_rows(&load.table)?;
        println!(
            "  {}: appended {} rows (table now has {})",
            load.table, load.rows_appended, total
        );
    }

    // verification pass: show the head of every loaded table
    for load in &report.tables {
        println!(
            "\nFirst {} rows of {}:",
            args.preview_rows, load.table
        );
        print!("{}", store.preview(&load.table, args.preview_rows)?);
    }

    Ok(exit_codes::OK)
}

fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
