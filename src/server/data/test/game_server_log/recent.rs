use super::*;

/// Tests listing recent events and filtering by player.
///
/// Expected: newest first; player filter returns only that player's events
#[tokio::test]
async fn lists_recent_and_by_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GameServerLogs)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game_server_log(db, "1").await?;
    let second = factory::create_game_server_log(db, "2").await?;

    let repo = GameServerLogRepository::new(db);

    let recent: Vec<i32> = repo.recent(10).await?.iter().map(|l| l.id).collect();
    assert_eq!(recent, vec![second.id, first.id]);

    let by_player = repo.find_by_player("1").await?;
    assert_eq!(by_player.len(), 1);
    assert_eq!(by_player[0].id, first.id);

    Ok(())
}
