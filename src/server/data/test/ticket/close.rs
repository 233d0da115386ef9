use super::*;

/// Tests closing an open ticket.
///
/// Verifies that all close fields are written and the open marker is cleared.
///
/// Expected: Some with the closed ticket
#[tokio::test]
async fn closes_open_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;

    let repo = TicketRepository::new(db);
    let closed = repo.close(ticket.id, close_record("staff")).await?.unwrap();

    assert_eq!(closed.status, TicketStatus::Closed);
    assert_eq!(closed.closed_by, Some("staff".to_string()));
    assert_eq!(closed.close_reason, Some("Resolved".to_string()));
    assert_eq!(
        closed.transcript,
        Some("[2026-01-01T12:00:00Z] alice: hello".to_string())
    );
    assert!(closed.closed_at.is_some());

    let stored = Tickets::find_by_id(ticket.id).one(db).await?.unwrap();
    assert!(stored.open_user_id.is_none());

    Ok(())
}

/// Tests that closing an already closed ticket changes nothing.
///
/// Expected: None, original close fields untouched
#[tokio::test]
async fn close_of_closed_ticket_leaves_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = TicketFactory::new(db, "100")
        .closed("first-closer")
        .transcript("original transcript")
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let result = repo.close(ticket.id, close_record("second-closer")).await?;

    assert!(result.is_none());

    let stored = Tickets::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.closed_by, Some("first-closer".to_string()));
    assert_eq!(stored.transcript, Some("original transcript".to_string()));
    assert_eq!(stored.closed_at, ticket.closed_at);
    assert_eq!(stored.close_reason, None);

    Ok(())
}

/// Tests that only the first of two closes succeeds.
///
/// Expected: first Some, second None
#[tokio::test]
async fn second_close_observes_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;

    let repo = TicketRepository::new(db);

    assert!(repo.close(ticket.id, close_record("a")).await?.is_some());
    assert!(repo.close(ticket.id, close_record("b")).await?.is_none());

    Ok(())
}

/// Tests closing a ticket id that does not exist.
///
/// Expected: None
#[tokio::test]
async fn close_of_missing_ticket_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);

    assert!(repo.close(42, close_record("staff")).await?.is_none());

    Ok(())
}
