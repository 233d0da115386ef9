use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AutoModSettingsDto {
    pub spam_detection: bool,
    pub profanity_filter: bool,
    pub link_filter: bool,
    pub max_mentions: u32,
    pub max_messages: u32,
    /// Rate window length in seconds.
    pub time_window: u32,
}
