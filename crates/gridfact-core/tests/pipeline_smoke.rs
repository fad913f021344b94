use gridfact_core::engine::Pipeline;
use gridfact_core::model::{Conversation, Role};
use gridfact_core::providers::llm::fake::FakeClient;
use gridfact_core::storage::Store;
use std::sync::Arc;

fn seeded_store() -> Store {
    let store = Store::memory().unwrap();
    {
        let conn = store.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE drivers (driverID TEXT, forename TEXT, surname TEXT);
            INSERT INTO drivers VALUES ('1', 'Michael', 'Schumacher');
            CREATE TABLE results (resultID TEXT, raceID TEXT, driverID TEXT, position TEXT);
            INSERT INTO results VALUES ('10', '100', '1', '1');
            INSERT INTO results VALUES ('11', '101', '1', '2');
            INSERT INTO results VALUES ('12', '102', '1', '3');
            "#,
        )
        .unwrap();
    }
    store
}

#[tokio::test]
async fn happy_path_produces_answer_and_appends_pair() -> anyhow::Result<()> {
    let client = FakeClient::scripted([
        "SELECT COUNT(DISTINCT r.raceID) AS podiums FROM results r JOIN drivers d ON r.driverID = d.driverID WHERE d.forename = 'Michael' AND d.surname = 'Schumacher' AND r.position IN ('1','2','3');",
        "Michael Schumacher has 3 podiums.",
    ]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::with_greeting("Hey there! Ask me a question.");

    let artifacts = pipeline
        .ask(&mut conversation, "How many podiums has Michael Schumacher got?")
        .await?;

    assert!(!artifacts.answer.is_empty());
    assert!(!artifacts.db_error);
    assert!(artifacts.result.contains("podiums"));

    assert_eq!(conversation.len(), 3);
    assert_eq!(conversation.turns()[1].role, Role::User);
    assert_eq!(
        conversation.turns()[1].content,
        "How many podiums has Michael Schumacher got?"
    );
    assert_eq!(conversation.turns()[2].content, "Michael Schumacher has 3 podiums.");
    Ok(())
}

#[tokio::test]
async fn fenced_model_output_is_stripped() -> anyhow::Result<()> {
    let client = FakeClient::scripted([
        "```sql\nSELECT COUNT(*) FROM drivers;\n```",
        "There is one driver.",
    ]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::new();

    let artifacts = pipeline.ask(&mut conversation, "How many drivers?").await?;
    assert_eq!(artifacts.sql, "SELECT COUNT(*) FROM drivers;");
    assert!(!artifacts.db_error);
    Ok(())
}

#[tokio::test]
async fn database_error_is_absorbed_into_answer() -> anyhow::Result<()> {
    let client = FakeClient::scripted([
        "SELECT no_such_column FROM drivers;",
        "Sorry, I could not find that statistic.",
    ]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::with_greeting("hi");

    let artifacts = pipeline
        .ask(&mut conversation, "Tell me something odd")
        .await?;

    assert!(artifacts.db_error);
    assert!(artifacts.result.starts_with("Error:"));
    assert_eq!(artifacts.answer, "Sorry, I could not find that statistic.");
    // the error path still appends a full turn pair
    assert_eq!(conversation.len(), 3);
    Ok(())
}

#[tokio::test]
async fn synthesis_failure_leaves_conversation_untouched() {
    let pipeline = Pipeline::new(seeded_store(), Arc::new(FakeClient::failing()));
    let mut conversation = Conversation::with_greeting("hi");

    let err = pipeline
        .ask(&mut conversation, "How many podiums?")
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("SQL synthesis failed"));
    assert_eq!(conversation.len(), 1);
}

#[tokio::test]
async fn answer_synthesis_failure_propagates() {
    // one scripted response: SQL succeeds, answer call fails
    let client = FakeClient::scripted(["SELECT COUNT(*) FROM drivers;"]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::with_greeting("hi");

    let err = pipeline
        .ask(&mut conversation, "How many drivers?")
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("answer synthesis failed"));
    assert_eq!(conversation.len(), 1);
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let client = FakeClient::scripted(["unused", "unused"]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::new();

    assert!(pipeline.ask(&mut conversation, "   ").await.is_err());
    assert!(conversation.is_empty());
}

#[tokio::test]
async fn history_flows_into_later_turns() -> anyhow::Result<()> {
    let client = FakeClient::scripted([
        "SELECT COUNT(*) FROM drivers;",
        "One driver.",
        "SELECT COUNT(*) FROM results;",
        "Three results.",
    ]);
    let pipeline = Pipeline::new(seeded_store(), Arc::new(client));
    let mut conversation = Conversation::with_greeting("hi");

    pipeline.ask(&mut conversation, "How many drivers?").await?;
    pipeline.ask(&mut conversation, "And results?").await?;

    assert_eq!(conversation.len(), 5);
    let rendered = conversation.render();
    let drivers_pos = rendered.find("How many drivers?").unwrap();
    let results_pos = rendered.find("And results?").unwrap();
    assert!(drivers_pos < results_pos);
    Ok(())
}
