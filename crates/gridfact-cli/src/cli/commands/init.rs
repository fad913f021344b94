use super::exit_codes;
use crate::cli::args::InitArgs;
use anyhow::Result;

pub fn cmd_init(args: InitArgs) -> Result<i32> {
    if !args.config.exists() {
        if let Some(parent) = args.config.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        gridfact_core::config::write_sample_config(&args.config)
            .map_err(|e| anyhow::anyhow!(e))?;
        eprintln!("created {}", args.config.display());
    } else {
        eprintln!("note: {} already exists", args.config.display());
    }

    if args.gitignore {
        let gi_path = std::path::Path::new(".gitignore");
        if !gi_path.exists() {
            std::fs::write(gi_path, "*.sqlite\n*.sqlite-shm\n*.sqlite-wal\n.env\n/data/\n")?;
            eprintln!("created .gitignore");
        } else {
            eprintln!("note: .gitignore already exists (skipped)");
        }
    }

    Ok(exit_codes::OK)
}
