//! Contact messages handled by the admin inbox

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    New,
    Read,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: NaiveDate,
    pub status: MessageStatus,
}
