//! User schema - The guest walking through the selection workflow

use serde::{Deserialize, Serialize};

/// Role of a gallery user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Anonymous guest who still has to register
    #[default]
    Guest,
    /// Already registered user; the registration step is skipped
    Customer,
}

/// A user acting on a gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,

    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn guest(id: u64) -> Self {
        User {
            id,
            role: UserRole::Guest,
        }
    }

    pub fn customer(id: u64) -> Self {
        User {
            id,
            role: UserRole::Customer,
        }
    }

    /// Whether the registration step is skipped for this user
    pub fn is_customer(&self) -> bool {
        self.role == UserRole::Customer
    }
}
