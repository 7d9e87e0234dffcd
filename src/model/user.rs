//! User accounts, roles, and shipping addresses

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Whether this role may open the admin back-office
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

/// A shipping address, validated when submitted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub zip: String,
    pub country: String,
    pub phone: String,
}

/// A storefront account.
///
/// The password is a plaintext fixture value compared verbatim at login;
/// there is deliberately no hashing or token scheme in this demo. It is
/// never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub created_at: NaiveDate,
}

impl User {
    /// First name, used in greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: 101,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            password: Some("password123".to_string()),
            role: UserRole::Customer,
            address: None,
            created_at: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn first_name_splits_on_whitespace() {
        let user = User {
            id: 1,
            name: "Bob Smith".to_string(),
            email: String::new(),
            password: None,
            role: UserRole::Customer,
            address: None,
            created_at: NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
        };
        assert_eq!(user.first_name(), "Bob");
    }

    #[test]
    fn role_admin_check() {
        assert!(UserRole::Admin.is_admin());
        assert!(UserRole::SuperAdmin.is_admin());
        assert!(!UserRole::Customer.is_admin());
    }
}
