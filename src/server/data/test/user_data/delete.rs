use super::*;

/// Tests deleting all of a user's data.
///
/// Expected: the user's rows removed and counted, other users untouched
#[tokio::test]
async fn deletes_users_rows_across_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ticket(db, "100").await?;
    factory::create_ticket(db, "200").await?;
    factory::create_mod_log(db, "ban", Some("100")).await?;
    factory::create_game_server_log(db, "100").await?;
    factory::create_game_server_log(db, "200").await?;
    factory::create_command_log(db, "ticket", "100").await?;
    factory::create_command_log(db, "close", "200").await?;

    let repo = UserDataRepository::new(db);
    let deleted = repo.delete(100).await?;

    assert_eq!(deleted.tickets, 1);
    assert_eq!(deleted.moderation, 1);
    assert_eq!(deleted.game_server, 1);
    assert_eq!(deleted.commands, 1);
    assert_eq!(Tickets::find().count(db).await?, 1);
    assert_eq!(ModLogs::find().count(db).await?, 0);
    assert_eq!(GameServerLogs::find().count(db).await?, 1);
    assert_eq!(CommandLogs::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a failure part-way through deletion rolls everything back.
///
/// The game server log table is left out of the schema so the last delete of the
/// transaction fails after the ticket and moderation deletes have run.
///
/// Expected: Err, ticket and moderation rows still present
#[tokio::test]
async fn rolls_back_when_a_delete_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Tickets)
        .with_table(ModLogs)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ticket(db, "100").await?;
    factory::create_mod_log(db, "ban", Some("100")).await?;

    let repo = UserDataRepository::new(db);
    let result = repo.delete(100).await;

    assert!(result.is_err());
    assert_eq!(Tickets::find().count(db).await?, 1);
    assert_eq!(ModLogs::find().count(db).await?, 1);

    Ok(())
}
