//! Prompt assembly for the two model calls of a turn.
//!
//! Both builders are pure functions over the static schema context, the
//! conversation history, and the per-turn strings. Nothing here talks to
//! the network.

use crate::model::Conversation;
use crate::schema;

/// Prompt for the SQL synthesis call: full schema catalog, domain
/// conventions, few-shot examples, conversation history, new question.
pub fn sql_prompt(history: &Conversation, question: &str) -> String {
    format!(
        "You are an SQLite expert.\n\
         Given a question from the user, you need to create syntactically correct queries.\n\
         The database contains tables with interconnected information and statistics about Formula 1 races, teams, and drivers.\n\
         Below, each table is described briefly with the columns and a short description of each column.\n\
         \n\
         Table Descriptions:\n\
         {tables}\n\
         Interconnections:\n\
         {interconnections}\n\
         \n\
         Instructions:\n\
         {conventions}\n\
         - Status types available - {status_types}\n\
         \n\
         Take conversation history into account.\n\
         Conversation history: {history}\n\
         \n\
         Below are some example questions and corresponding SQL queries for better understanding. Take this as reference and use similar queries:\n\
         \n\
         {examples}\n\
         Question: {question}\n\
         SQL Query:\n",
        tables = schema::render_tables(),
        interconnections = schema::INTERCONNECTIONS,
        conventions = schema::CONVENTIONS,
        status_types = schema::STATUS_TYPES,
        history = history.render(),
        examples = schema::render_examples(),
        question = question.trim(),
    )
}

/// Prompt for the answer synthesis call. The result may be an error
/// description; the model is instructed to respond appropriately so the
/// user never sees a raw failure.
pub fn answer_prompt(history: &Conversation, question: &str, sql: &str, result: &str) -> String {
    format!(
        "Given the following user question, corresponding SQL query, and SQL result, write a natural language response.\n\
         If error, please respond appropriately.\n\
         \n\
         Conversation history: {history}\n\
         Question: {question}\n\
         SQL Query: {sql}\n\
         SQL Result: {result}\n\
         Answer:",
        history = history.render(),
        question = question.trim(),
        sql = sql,
        result = result,
    )
}

/// Strip enclosing Markdown code fences from model output. The prompt asks
/// for bare SQL but models wrap it in ```sql fences often enough that the
/// executor would otherwise fail on the backticks.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    // Opening fence, possibly with a language tag (```sql, ```sqlite).
    lines.remove(0);
    if let Some(last) = lines.last() {
        if last.trim() == "```" {
            lines.pop();
        }
    }
    lines.join("\n").trim().to_string()
}
