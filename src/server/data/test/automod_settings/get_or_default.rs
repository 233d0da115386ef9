use super::*;

/// Tests reading settings for an unconfigured guild.
///
/// Expected: defaults (spam and profanity on, links off, 5/10/10) and no row written
#[tokio::test]
async fn returns_defaults_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AutomodSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AutoModSettingsRepository::new(db);
    let settings = repo.get_or_default(1).await?;

    assert_eq!(settings, AutoModSettings::default());
    assert!(settings.spam_detection);
    assert!(settings.profanity_filter);
    assert!(!settings.link_filter);
    assert_eq!(settings.max_mentions, 5);
    assert_eq!(settings.max_messages, 10);
    assert_eq!(settings.time_window, 10);
    assert_eq!(AutomodSettings::find().count(db).await?, 0);

    Ok(())
}

/// Tests reading stored settings.
///
/// Expected: the stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AutomodSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AutomodSettingsFactory::new(db, "1")
        .link_filter(true)
        .max_mentions(2)
        .rate_limit(3, 30)
        .build()
        .await?;

    let repo = AutoModSettingsRepository::new(db);
    let settings = repo.get_or_default(1).await?;

    assert!(settings.link_filter);
    assert_eq!(settings.max_mentions, 2);
    assert_eq!(settings.max_messages, 3);
    assert_eq!(settings.time_window, 30);

    Ok(())
}
