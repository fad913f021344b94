use super::{build_client, exit_codes};
use crate::cli::args::ChatArgs;
use anyhow::Result;
use gridfact_core::engine::Pipeline;
use gridfact_core::model::Conversation;
use gridfact_core::storage::Store;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn cmd_chat(args: ChatArgs) -> Result<i32> {
    let cfg = gridfact_core::config::load_config(&args.config).map_err(|e| anyhow::anyhow!(e))?;

    if !cfg.db.exists() {
        eprintln!(
            "note: {} does not exist yet; run `gridfact ingest` first",
            cfg.db.display()
        );
    }
    let store = Store::open(&cfg.db)?;
    let client = build_client(&cfg)?;
    let pipeline = Pipeline::new(store, client);
    tracing::info!(model = %cfg.model, db = %cfg.db.display(), "chat session started");

    // one linear history per process; discarded at exit
    let mut conversation = Conversation::with_greeting(&cfg.greeting);
    println!("{}", cfg.greeting);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break, // EOF
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "exit" || question == "quit" {
            break;
        }

        match pipeline.ask(&mut conversation, question).await {
            Ok(artifacts) => {
                if args.show_sql {
                    println!("sql> {}", artifacts.sql);
                }
                println!("{}", artifacts.answer);
            }
            Err(e) => {
                // model-side failure: report and keep the session alive
                eprintln!("error: {e:#}");
            }
        }
    }

    Ok(exit_codes::OK)
}
