use super::{build_client, exit_codes};
use crate::cli::args::AskArgs;
use anyhow::Result;
use gridfact_core::engine::Pipeline;
use gridfact_core::model::Conversation;
use gridfact_core::storage::Store;

pub async fn cmd_ask(args: AskArgs) -> Result<i32> {
    let cfg = gridfact_core::config::load_config(&args.config).map_err(|e| anyhow::anyhow!(e))?;
    let store = Store::open(&cfg.db)?;
    let client = build_client(&cfg)?;
    let pipeline = Pipeline::new(store, client);

    let mut conversation = Conversation::with_greeting(&cfg.greeting);
    let artifacts = match pipeline.ask(&mut conversation, &args.question).await {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e:#}");
            return Ok(exit_codes::FAILURE);
        }
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&artifacts)?),
        _ => {
            if args.show_sql {
                println!("sql> {}", artifacts.sql);
            }
            println!("{}", artifacts.answer);
        }
    }

    Ok(exit_codes::OK)
}
