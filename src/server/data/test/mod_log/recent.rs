use super::*;

/// Tests that recent entries come back newest first.
///
/// Expected: entries in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(ModLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_mod_log(db, "kick", Some("20")).await?;
    let second = factory::create_mod_log(db, "ban", Some("21")).await?;

    let repo = ModLogRepository::new(db);
    let entries = repo.recent(10).await?;

    let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests filtering entries by target user.
///
/// Expected: only entries targeting the user
#[tokio::test]
async fn finds_entries_by_target() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(ModLogs).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_mod_log(db, "kick", Some("20")).await?;
    factory::create_mod_log(db, "ban", Some("21")).await?;
    factory::create_mod_log(db, "clear", None).await?;

    let repo = ModLogRepository::new(db);
    let entries = repo.find_by_target(20).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action_type, "kick");

    Ok(())
}
