use super::*;

/// Tests that recent invocations come back newest first and honour the limit.
///
/// Expected: the two newest entries in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(CommandLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command_log(db, "ticket", "20").await?;
    let second = factory::create_command_log(db, "close", "20").await?;
    let third = factory::create_command_log(db, "kick", "21").await?;

    let repo = CommandLogRepository::new(db);
    let entries = repo.recent(2).await?;

    let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);

    Ok(())
}

/// Tests filtering invocations by user.
///
/// Expected: only the user's commands
#[tokio::test]
async fn finds_invocations_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(CommandLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command_log(db, "ticket", "20").await?;
    factory::create_command_log(db, "kick", "21").await?;

    let repo = CommandLogRepository::new(db);
    let entries = repo.find_by_user(20).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].command_name, "ticket");

    Ok(())
}
