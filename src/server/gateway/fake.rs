//! In-memory [`ChannelGateway`] used by service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use serenity::async_trait;

use super::{ChannelGateway, ChannelMessage, GatewayError, OutboundMessage, PrivateChannelSpec};

#[derive(Default)]
struct FakeState {
    categories: Vec<(u64, u64, String)>,
    channels: HashMap<u64, PrivateChannelSpec>,
    deleted_channels: Vec<u64>,
    sent: Vec<(u64, OutboundMessage)>,
    direct: Vec<(u64, OutboundMessage)>,
    history: HashMap<u64, Vec<ChannelMessage>>,
    deleted_messages: Vec<(u64, u64)>,
    user_names: HashMap<u64, String>,
    failing: HashSet<&'static str>,
}

pub struct FakeGateway {
    state: Mutex<FakeState>,
    next_id: AtomicU64,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
            next_id: AtomicU64::new(5_000),
        }
    }
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call of `operation` fail, e.g. `"create channel"`.
    pub fn fail(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub fn add_category(&self, guild_id: u64, category_id: u64, name: &str) {
        self.state
            .lock()
            .unwrap()
            .categories
            .push((guild_id, category_id, name.to_string()));
    }

    /// Replaces the history returned for `channel_id`, in the given order.
    pub fn set_history(&self, channel_id: u64, messages: Vec<ChannelMessage>) {
        self.state
            .lock()
            .unwrap()
            .history
            .insert(channel_id, messages);
    }

    pub fn set_user_name(&self, user_id: u64, name: &str) {
        self.state
            .lock()
            .unwrap()
            .user_names
            .insert(user_id, name.to_string());
    }

    pub fn categories(&self) -> Vec<(u64, u64, String)> {
        self.state.lock().unwrap().categories.clone()
    }

    pub fn channels(&self) -> HashMap<u64, PrivateChannelSpec> {
        self.state.lock().unwrap().channels.clone()
    }

    pub fn deleted_channels(&self) -> Vec<u64> {
        self.state.lock().unwrap().deleted_channels.clone()
    }

    pub fn sent_messages(&self) -> Vec<(u64, OutboundMessage)> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn direct_messages(&self) -> Vec<(u64, OutboundMessage)> {
        self.state.lock().unwrap().direct.clone()
    }

    pub fn deleted_messages(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().deleted_messages.clone()
    }

    fn check(&self, operation: &'static str) -> Result<(), GatewayError> {
        if self.state.lock().unwrap().failing.contains(operation) {
            return Err(GatewayError::Rejected {
                operation,
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelGateway for FakeGateway {
    async fn find_category(
        &self,
        guild_id: u64,
        name_fragment: &str,
    ) -> Result<Option<u64>, GatewayError> {
        self.check("list channels")?;
        let needle = name_fragment.to_lowercase();
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|(guild, _, name)| *guild == guild_id && name.to_lowercase().contains(&needle))
            .map(|(_, id, _)| *id))
    }

    async fn create_category(&self, guild_id: u64, name: &str) -> Result<u64, GatewayError> {
        self.check("create category")?;
        let id = self.allocate_id();
        self.add_category(guild_id, id, name);
        Ok(id)
    }

    async fn create_private_channel(&self, spec: PrivateChannelSpec) -> Result<u64, GatewayError> {
        self.check("create channel")?;
        let id = self.allocate_id();
        self.state.lock().unwrap().channels.insert(id, spec);
        Ok(id)
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), GatewayError> {
        self.check("delete channel")?;
        let mut state = self.state.lock().unwrap();
        state.channels.remove(&channel_id);
        state.deleted_channels.push(channel_id);
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, GatewayError> {
        self.check("send message")?;
        let id = self.allocate_id();
        self.state.lock().unwrap().sent.push((channel_id, message));
        Ok(id)
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, GatewayError> {
        self.check("fetch messages")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .history
            .get(&channel_id)
            .map(|messages| messages.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), GatewayError> {
        self.check("delete message")?;
        self.state
            .lock()
            .unwrap()
            .deleted_messages
            .push((channel_id, message_id));
        Ok(())
    }

    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<(), GatewayError> {
        self.check("direct message")?;
        self.state.lock().unwrap().direct.push((user_id, message));
        Ok(())
    }

    async fn fetch_user_name(&self, user_id: u64) -> Result<String, GatewayError> {
        self.check("fetch user")?;
        self.state
            .lock()
            .unwrap()
            .user_names
            .get(&user_id)
            .cloned()
            .ok_or(GatewayError::Rejected {
                operation: "fetch user",
                reason: format!("unknown user {}", user_id),
            })
    }
}
