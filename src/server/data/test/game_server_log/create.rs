use super::*;

/// Tests storing a kill event with all optional fields.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn stores_kill_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GameServerLogs)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerLogRepository::new(db);
    let log = repo
        .create(CreateGameServerLogParams {
            event_type: "kill".to_string(),
            player_name: "Miller".to_string(),
            player_id: Some("1".to_string()),
            target_name: Some("Kerry".to_string()),
            target_id: Some("2".to_string()),
            weapon: Some("MX".to_string()),
            money_amount: None,
            distance: Some(312.5),
            server_name: Some("Altis".to_string()),
            additional_data: Some(r#"{"headshot":true}"#.to_string()),
        })
        .await?;

    assert_eq!(log.event_type, "kill");
    assert_eq!(log.target_name, Some("Kerry".to_string()));
    assert_eq!(log.distance, Some(312.5));
    assert_eq!(log.additional_data, Some(r#"{"headshot":true}"#.to_string()));

    Ok(())
}
