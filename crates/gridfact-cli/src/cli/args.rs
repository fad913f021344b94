use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gridfact",
    version,
    about = "Conversational natural-language-to-SQL assistant over Formula 1 statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive chat session against the database
    Chat(ChatArgs),
    /// Ask a single question and exit
    Ask(AskArgs),
    /// Load a directory of CSV files into the database
    Ingest(IngestArgs),
    /// Write a sample gridfact.yaml
    Init(InitArgs),
    Version,
}

#[derive(Parser, Clone)]
pub struct ChatArgs {
    #[arg(long, default_value = "gridfact.yaml")]
    pub config: PathBuf,

    /// print the synthesized SQL before each answer
    #[arg(long)]
    pub show_sql: bool,
}

#[derive(Parser, Clone)]
pub struct AskArgs {
    /// the question, in plain language
    pub question: String,

    #[arg(long, default_value = "gridfact.yaml")]
    pub config: PathBuf,

    #[arg(long, default_value = "text")]
    pub format: String, // text|json

    /// print the synthesized SQL before the answer (text format only)
    #[arg(long)]
    pub show_sql: bool,
}

#[derive(Parser, Clone)]
pub struct IngestArgs {
    #[arg(long, default_value = "database.sqlite")]
    pub db: PathBuf,

    /// directory of CSV files, one per table
    #[arg(long, default_value = "data")]
    pub data: PathBuf,

    /// rows per table to print for verification after loading
    #[arg(long, default_value_t = 10)]
    pub preview_rows: u32,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "gridfact.yaml")]
    pub config: PathBuf,

    /// generate .gitignore for the database and .env
    #[arg(long)]
    pub gitignore: bool,
}
