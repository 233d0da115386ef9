use super::*;

/// Tests finding the open ticket of a requester.
///
/// Expected: Some with the open ticket, closed tickets ignored
#[tokio::test]
async fn finds_open_ticket_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db, "100").closed("staff").build().await?;
    let open = factory::create_ticket(db, "100").await?;

    let repo = TicketRepository::new(db);
    let result = repo.find_open_by_user(100).await?;

    assert_eq!(result.map(|t| t.ticket_id), Some(open.ticket_id));

    Ok(())
}

/// Tests that a requester with only closed tickets has no open ticket.
///
/// Expected: None
#[tokio::test]
async fn returns_none_when_only_closed_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db, "100").closed("staff").build().await?;

    let repo = TicketRepository::new(db);

    assert!(repo.find_open_by_user(100).await?.is_none());

    Ok(())
}

/// Tests lookup by public ticket id and by channel id.
///
/// Expected: both lookups return the same ticket, unknown references return None
#[tokio::test]
async fn finds_by_ticket_id_and_channel_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tickets).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = TicketFactory::new(db, "100")
        .ticket_id("ticket-alice-1")
        .channel_id("555")
        .build()
        .await?;

    let repo = TicketRepository::new(db);

    let by_ticket_id = repo.find_by_ticket_id("ticket-alice-1").await?.unwrap();
    let by_channel = repo.find_by_channel_id(555).await?.unwrap();

    assert_eq!(by_ticket_id.id, ticket.id);
    assert_eq!(by_channel.id, ticket.id);
    assert!(repo.find_by_ticket_id("ticket-bob-2").await?.is_none());
    assert!(repo.find_by_channel_id(556).await?.is_none());

    Ok(())
}
