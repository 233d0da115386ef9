use super::*;

fn params(arguments: &str) -> CreateCommandLogParams {
    CreateCommandLogParams {
        command_name: "kick".to_string(),
        user_id: 40,
        username: "alice".to_string(),
        channel_id: 10,
        channel_name: Some("general".to_string()),
        guild_id: Some(1),
        arguments: arguments.to_string(),
    }
}

/// Tests recording a command invocation.
///
/// Expected: ids stored as strings and arguments kept verbatim
#[tokio::test]
async fn records_invocation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(CommandLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandLogRepository::new(db);
    let entry = repo.create(params("user: 20, reason: spam")).await?;

    assert_eq!(entry.command_name, "kick");
    assert_eq!(entry.user_id, "40");
    assert_eq!(entry.channel_id, "10");
    assert_eq!(entry.guild_id.as_deref(), Some("1"));
    assert_eq!(entry.arguments.as_deref(), Some("user: 20, reason: spam"));

    Ok(())
}

/// Tests that a command without options stores no arguments.
///
/// Expected: arguments is None
#[tokio::test]
async fn stores_empty_arguments_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(CommandLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandLogRepository::new(db);
    let entry = repo.create(params("")).await?;

    assert_eq!(entry.arguments, None);

    Ok(())
}
