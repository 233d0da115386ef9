use super::*;

/// Tests appending a moderation log entry.
///
/// Expected: Ok with ids stored as strings and the action name persisted
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(ModLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModLogRepository::new(db);
    let entry = repo
        .create(CreateModLogParams {
            action: ModLogAction::Timeout,
            moderator_id: "10".to_string(),
            target_id: Some(20),
            reason: Some("Spamming".to_string()),
            duration: Some("10 minutes".to_string()),
            guild_id: 1,
        })
        .await?;

    assert_eq!(entry.action_type, "timeout");
    assert_eq!(entry.moderator_id, "10");
    assert_eq!(entry.target_id, Some("20".to_string()));
    assert_eq!(entry.duration, Some("10 minutes".to_string()));
    assert_eq!(entry.guild_id, "1");

    Ok(())
}

/// Tests an entry without a target, as written by `/clear`.
///
/// Expected: Ok with target_id None
#[tokio::test]
async fn appends_entry_without_target() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(ModLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModLogRepository::new(db);
    let entry = repo
        .create(CreateModLogParams {
            action: ModLogAction::Clear,
            moderator_id: "10".to_string(),
            target_id: None,
            reason: Some("Cleared 5 messages".to_string()),
            duration: None,
            guild_id: 1,
        })
        .await?;

    assert_eq!(entry.action_type, "clear");
    assert!(entry.target_id.is_none());

    Ok(())
}
