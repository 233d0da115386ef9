use super::*;

/// Tests creating an open ticket.
///
/// Verifies that the repository stores every field and marks the requester as
/// holding an open ticket.
///
/// Expected: Ok with an open ticket and `open_user_id` set
#[tokio::test]
async fn creates_open_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let ticket = repo.create(create_params(100, 200)).await?;

    assert_eq!(ticket.ticket_id, "ticket-user-200");
    assert_eq!(ticket.user_id, "100");
    assert_eq!(ticket.channel_id, "200");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, "medium");
    assert!(ticket.closed_at.is_none());
    assert!(ticket.transcript.is_none());

    let stored = Tickets::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.open_user_id, Some("100".to_string()));

    Ok(())
}

/// Tests the store-level guard against a second open ticket.
///
/// Verifies that inserting another open ticket for the same requester fails with
/// a unique constraint violation even when the application check is bypassed.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_second_open_ticket_for_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    repo.create(create_params(100, 200)).await?;
    let result = repo.create(create_params(100, 201)).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that closed tickets do not block new ones.
///
/// Expected: Ok when the requester's earlier ticket is closed
#[tokio::test]
async fn allows_new_ticket_after_previous_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db, "100").closed("staff").build().await?;
    TicketFactory::new(db, "100").closed("staff").build().await?;

    let repo = TicketRepository::new(db);
    let result = repo.create(create_params(100, 300)).await;

    assert!(result.is_ok());

    Ok(())
}
