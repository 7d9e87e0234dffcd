//! Support inbox: contact messages, meeting bookings, warranty claims
//!
//! Three small collections behind one store. Customer submissions enter in
//! their initial status (`New` or `Pending`); only the admin back-office
//! moves them along.

use crate::core::error::{StoreError, StoreResult};
use crate::model::{
    ClaimStatus, ContactMessage, MeetingRequest, MeetingStatus, MessageStatus, NewMeetingRequest,
    NewWarrantyClaim, WarrantyClaim,
};
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use validator::Validate;

struct SupportInner {
    messages: IndexMap<u32, ContactMessage>,
    next_message_id: u32,
    meetings: IndexMap<u32, MeetingRequest>,
    next_meeting_id: u32,
    claims: IndexMap<u32, WarrantyClaim>,
    next_claim_id: u32,
}

#[derive(Clone)]
pub struct SupportStore {
    inner: Arc<RwLock<SupportInner>>,
}

impl SupportStore {
    pub fn new() -> Self {
        Self::with_messages(Vec::new())
    }

    pub fn with_messages(messages: Vec<ContactMessage>) -> Self {
        let next_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let messages = messages.into_iter().map(|m| (m.id, m)).collect();
        Self {
            inner: Arc::new(RwLock::new(SupportInner {
                messages,
                next_message_id,
                meetings: IndexMap::new(),
                next_meeting_id: 1,
                claims: IndexMap::new(),
                next_claim_id: 1,
            })),
        }
    }

    pub fn messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.messages.values().cloned().collect())
    }

    /// Record a contact-form submission; it lands in the inbox as `New`.
    pub fn submit_message(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> StoreResult<ContactMessage> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = inner.next_message_id;
        inner.next_message_id += 1;
        let entry = ContactMessage {
            id,
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            date: Utc::now().date_naive(),
            status: MessageStatus::New,
        };
        inner.messages.insert(id, entry.clone());
        Ok(entry)
    }

    pub fn set_message_status(&self, id: u32, status: MessageStatus) -> StoreResult<ContactMessage> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let message = inner
            .messages
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("message", id))?;
        message.status = status;
        Ok(message.clone())
    }

    pub fn meetings(&self) -> StoreResult<Vec<MeetingRequest>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.meetings.values().cloned().collect())
    }

    pub fn book_meeting(&self, draft: NewMeetingRequest) -> StoreResult<MeetingRequest> {
        draft.validate().map_err(StoreError::from_validation)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = inner.next_meeting_id;
        inner.next_meeting_id += 1;
        let meeting = MeetingRequest {
            id,
            name: draft.name,
            email: draft.email,
            date: draft.date,
            time: draft.time,
            topic: draft.topic,
            status: MeetingStatus::Pending,
        };
        inner.meetings.insert(id, meeting.clone());
        Ok(meeting)
    }

    pub fn set_meeting_status(&self, id: u32, status: MeetingStatus) -> StoreResult<MeetingRequest> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let meeting = inner
            .meetings
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("meeting", id))?;
        meeting.status = status;
        Ok(meeting.clone())
    }

    pub fn claims(&self) -> StoreResult<Vec<WarrantyClaim>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.claims.values().cloned().collect())
    }

    pub fn file_claim(&self, draft: NewWarrantyClaim) -> StoreResult<WarrantyClaim> {
        draft.validate().map_err(StoreError::from_validation)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = inner.next_claim_id;
        inner.next_claim_id += 1;
        let claim = WarrantyClaim {
            id,
            product_name: draft.product_name,
            purchase_date: draft.purchase_date,
            issue_description: draft.issue_description,
            file_name: draft.file_name,
            status: ClaimStatus::Pending,
        };
        inner.claims.insert(id, claim.clone());
        Ok(claim)
    }

    pub fn set_claim_status(&self, id: u32, status: ClaimStatus) -> StoreResult<WarrantyClaim> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let claim = inner
            .claims
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("claim", id))?;
        claim.status = status;
        Ok(claim.clone())
    }
}

impl Default for SupportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_messages;
    use chrono::NaiveDate;

    #[test]
    fn contact_submissions_land_as_new() {
        let store = SupportStore::with_messages(demo_messages());
        let entry = store
            .submit_message("Sam", "sam@example.com", "Hello", "Just saying hi.")
            .unwrap();
        assert_eq!(entry.id, 5);
        assert_eq!(entry.status, MessageStatus::New);
    }

    #[test]
    fn message_status_moves_through_the_inbox() {
        let store = SupportStore::with_messages(demo_messages());
        let read = store.set_message_status(1, MessageStatus::Read).unwrap();
        assert_eq!(read.status, MessageStatus::Read);
        let archived = store
            .set_message_status(1, MessageStatus::Archived)
            .unwrap();
        assert_eq!(archived.status, MessageStatus::Archived);
    }

    #[test]
    fn bookings_start_pending_and_validate_email() {
        let store = SupportStore::new();
        let bad = NewMeetingRequest {
            name: "Sam".to_string(),
            email: "not-an-email".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: "10:00".to_string(),
            topic: "Bulk pricing".to_string(),
        };
        assert!(store.book_meeting(bad).is_err());

        let good = NewMeetingRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: "10:00".to_string(),
            topic: "Bulk pricing".to_string(),
        };
        let meeting = store.book_meeting(good).unwrap();
        assert_eq!(meeting.status, MeetingStatus::Pending);
        let confirmed = store
            .set_meeting_status(meeting.id, MeetingStatus::Confirmed)
            .unwrap();
        assert_eq!(confirmed.status, MeetingStatus::Confirmed);
    }

    #[test]
    fn claims_start_pending() {
        let store = SupportStore::new();
        let claim = store
            .file_claim(NewWarrantyClaim {
                product_name: "BoomBass Speaker".to_string(),
                purchase_date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
                issue_description: "No sound from the left channel.".to_string(),
                file_name: Some("receipt.pdf".to_string()),
            })
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Pending);
        let approved = store
            .set_claim_status(claim.id, ClaimStatus::Approved)
            .unwrap();
        assert_eq!(approved.status, ClaimStatus::Approved);
    }
}
