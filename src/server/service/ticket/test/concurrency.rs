use sea_orm::DatabaseConnection;

use crate::server::gateway::{ChannelGateway, GatewayError, OutboundMessage, PrivateChannelSpec};

use super::*;

const CONTENDERS: usize = 8;

/// Gateway that commits a competing open ticket for `user_id` while the channel
/// is being created, as another bot process would between check and insert.
struct CompetingOpenGateway {
    inner: Arc<FakeGateway>,
    db: DatabaseConnection,
    user_id: u64,
}

#[async_trait]
impl ChannelGateway for CompetingOpenGateway {
    async fn find_category(
        &self,
        guild_id: u64,
        name_fragment: &str,
    ) -> Result<Option<u64>, GatewayError> {
        self.inner.find_category(guild_id, name_fragment).await
    }

    async fn create_category(&self, guild_id: u64, name: &str) -> Result<u64, GatewayError> {
        self.inner.create_category(guild_id, name).await
    }

    async fn create_private_channel(&self, spec: PrivateChannelSpec) -> Result<u64, GatewayError> {
        TicketFactory::new(&self.db, self.user_id.to_string())
            .build()
            .await
            .unwrap();
        self.inner.create_private_channel(spec).await
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), GatewayError> {
        self.inner.delete_channel(channel_id).await
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, GatewayError> {
        self.inner.send_message(channel_id, message).await
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, GatewayError> {
        self.inner.fetch_recent_messages(channel_id, limit).await
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), GatewayError> {
        self.inner.delete_message(channel_id, message_id).await
    }

    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<(), GatewayError> {
        self.inner.send_direct_message(user_id, message).await
    }

    async fn fetch_user_name(&self, user_id: u64) -> Result<String, GatewayError> {
        self.inner.fetch_user_name(user_id).await
    }
}

/// Tests concurrent opens for one requester.
///
/// Expected: exactly one Ok, every other request Duplicate, one channel allocated
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_opens_yield_single_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = Arc::new(FakeGateway::new());
    let desk = desk(&gateway);

    let mut handles = Vec::new();
    for _ in 0..CONTENDERS {
        let db = db.clone();
        let desk = desk.clone();
        handles.push(tokio::spawn(async move {
            TicketService::new(&db, &desk)
                .open(open_params(100, "alice"))
                .await
        }));
    }

    let mut opened = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => opened += 1,
            Err(AppError::TicketErr(TicketError::Duplicate { user_id: 100 })) => duplicates += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(opened, 1);
    assert_eq!(duplicates, CONTENDERS - 1);
    assert_eq!(gateway.channels().len(), 1);
    assert_eq!(Tickets::find().count(db).await?, 1);

    Ok(())
}

/// Tests concurrent opens from different requesters in a fresh guild.
///
/// Expected: every request succeeds and share a single support category
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_opens_share_one_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = Arc::new(FakeGateway::new());
    let desk = desk(&gateway);

    let mut handles = Vec::new();
    for user_id in 0..CONTENDERS as u64 {
        let db = db.clone();
        let desk = desk.clone();
        handles.push(tokio::spawn(async move {
            TicketService::new(&db, &desk)
                .open(open_params(100 + user_id, &format!("user{}", user_id)))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    assert_eq!(gateway.categories().len(), 1);
    assert_eq!(gateway.channels().len(), CONTENDERS);

    Ok(())
}

/// Tests concurrent closes of one ticket.
///
/// Expected: exactly one Ok, every other request NotOpen, one deletion scheduled
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_closes_yield_single_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = Arc::new(FakeGateway::new());
    let desk = desk(&gateway);

    let ticket = TicketService::new(db, &desk)
        .open(open_params(100, "alice"))
        .await?;
    let channel_id = channel_of(&ticket);

    let mut handles = Vec::new();
    for i in 0..CONTENDERS {
        let db = db.clone();
        let desk = desk.clone();
        handles.push(tokio::spawn(async move {
            TicketService::new(&db, &desk)
                .close(CloseTicketParams {
                    reference: TicketReference::Channel(channel_id),
                    closed_by: format!("staff{}", i),
                    closed_by_id: Some(500 + i as u64),
                    reason: None,
                })
                .await
        }));
    }

    let mut closed = 0;
    let mut not_open = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => closed += 1,
            Err(AppError::TicketErr(TicketError::NotOpen(_))) => not_open += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    settle().await;

    assert_eq!(closed, 1);
    assert_eq!(not_open, CONTENDERS - 1);
    assert_eq!(gateway.deleted_channels(), vec![channel_id]);

    let close_logs = ModLogs::find()
        .filter(entity::mod_logs::Column::ActionType.eq("ticket_close"))
        .count(db)
        .await?;
    assert_eq!(close_logs, 1);

    Ok(())
}

/// Tests an open losing to a ticket committed after its duplicate check.
///
/// Expected: Duplicate from the unique open_user_id column and the new channel
/// deleted again
#[tokio::test]
async fn store_conflict_after_check_is_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = Arc::new(FakeGateway::new());
    let desk = TicketDesk::new(
        Arc::new(CompetingOpenGateway {
            inner: fake.clone(),
            db: db.clone(),
            user_id: 100,
        }),
        TicketSettings {
            close_delay: Duration::ZERO,
            assist_delay: Duration::ZERO,
            ..TicketSettings::default()
        },
    );

    let result = TicketService::new(db, &desk)
        .open(open_params(100, "alice"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TicketErr(TicketError::Duplicate { user_id: 100 }))
    ));
    assert!(fake.channels().is_empty());
    assert_eq!(fake.deleted_channels().len(), 1);
    assert_eq!(Tickets::find().count(db).await?, 1);

    Ok(())
}

/// Tests concurrent opens for one requester through separate desks, each with
/// its own lock registry, sharing one database.
///
/// Expected: exactly one Ok, every other request Duplicate, every losing
/// channel deleted
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_opens_across_desks_yield_single_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = Arc::new(FakeGateway::new());

    let mut handles = Vec::new();
    for _ in 0..CONTENDERS {
        let db = db.clone();
        let desk = desk(&gateway);
        handles.push(tokio::spawn(async move {
            TicketService::new(&db, &desk)
                .open(open_params(100, "alice"))
                .await
        }));
    }

    let mut opened = Vec::new();
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(ticket) => opened.push(ticket),
            Err(AppError::TicketErr(TicketError::Duplicate { user_id: 100 })) => duplicates += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(opened.len(), 1);
    assert_eq!(duplicates, CONTENDERS - 1);

    let channels = gateway.channels();
    assert_eq!(channels.len(), 1);
    assert!(channels.contains_key(&channel_of(&opened[0])));
    assert!(!gateway.deleted_channels().contains(&channel_of(&opened[0])));
    assert_eq!(Tickets::find().count(db).await?, 1);

    Ok(())
}
