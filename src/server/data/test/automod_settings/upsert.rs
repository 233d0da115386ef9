use super::*;

/// Tests inserting and then replacing a guild's settings.
///
/// Expected: a single row holding the latest values
#[tokio::test]
async fn inserts_then_replaces_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AutomodSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutoModSettingsRepository::new(db);
    repo.upsert(1, AutoModSettings::default()).await?;

    let updated = repo
        .upsert(
            1,
            AutoModSettings {
                link_filter: true,
                max_messages: 4,
                ..AutoModSettings::default()
            },
        )
        .await?;

    assert!(updated.link_filter);
    assert_eq!(updated.max_messages, 4);
    assert_eq!(AutomodSettings::find().count(db).await?, 1);
    assert_eq!(repo.get_or_default(1).await?, updated);

    Ok(())
}
