//! User profile domain types.
//!
//! A single profile record per installation. Edits replace the whole
//! record; there is no field-level patching at this layer.

use serde::{Deserialize, Serialize};

use clementine_core::{Email, UserId};

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// The user's contact and address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: Address,
}

impl Default for UserProfile {
    /// The starter profile used until the user edits theirs.
    fn default() -> Self {
        Self {
            id: UserId::new("user-1"),
            name: "Alex Johnson".to_string(),
            email: Email::parse("alex.j@example.com").expect("default email is valid"),
            phone: "(555) 123-4567".to_string(),
            address: Address {
                street: "123 Market Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip: "94105".to_string(),
                country: "USA".to_string(),
            },
        }
    }
}
