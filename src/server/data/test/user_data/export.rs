use super::*;

/// Tests exporting everything stored about a user.
///
/// Expected: the user's tickets, targeted moderation entries, game events and
/// commands only
#[tokio::test]
async fn exports_only_the_users_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ticket(db, "100").await?;
    TicketFactory::new(db, "100").closed("staff").build().await?;
    factory::create_ticket(db, "200").await?;
    factory::create_mod_log(db, "kick", Some("100")).await?;
    factory::create_mod_log(db, "kick", Some("200")).await?;
    factory::create_game_server_log(db, "100").await?;
    factory::create_command_log(db, "ticket", "100").await?;
    factory::create_command_log(db, "ticket", "200").await?;

    let repo = UserDataRepository::new(db);
    let export = repo.export(100).await?;

    assert_eq!(export.tickets.len(), 2);
    assert!(export.tickets.iter().all(|t| t.user_id == "100"));
    assert_eq!(export.moderation.len(), 1);
    assert_eq!(export.game_server.len(), 1);
    assert_eq!(export.commands.len(), 1);
    assert_eq!(export.commands[0].user_id, "100");

    Ok(())
}

/// Tests exporting a user with no stored data.
///
/// Expected: empty collections
#[tokio::test]
async fn exports_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserDataRepository::new(db);
    let export = repo.export(100).await?;

    assert!(export.tickets.is_empty());
    assert!(export.moderation.is_empty());
    assert!(export.game_server.is_empty());
    assert!(export.commands.is_empty());

    Ok(())
}
