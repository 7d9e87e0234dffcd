//! Meeting requests and warranty claims submitted through the storefront

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingStatus {
    Pending,
    Confirmed,
    Completed,
}

/// A booking made through the "book a meeting" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    pub topic: String,
    pub status: MeetingStatus,
}

/// Fields the booking form submits; the store assigns id and Pending status.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMeetingRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    pub id: u32,
    pub product_name: String,
    pub purchase_date: NaiveDate,
    pub issue_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: ClaimStatus,
}

/// Fields the warranty form submits.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWarrantyClaim {
    #[validate(length(min = 1, max = 120))]
    pub product_name: String,
    pub purchase_date: NaiveDate,
    #[validate(length(min = 1, max = 1000))]
    pub issue_description: String,
    pub file_name: Option<String>,
}
