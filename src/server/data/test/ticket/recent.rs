use super::*;

/// Tests that recent tickets are newest first and limited.
///
/// Expected: the two newest tickets in descending creation order
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = TicketFactory::new(db, "1")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let middle = TicketFactory::new(db, "2")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = TicketFactory::new(db, "3")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let tickets = repo.recent(2).await?;

    let ids: Vec<i32> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert!(!ids.contains(&oldest.id));

    Ok(())
}
