use crate::store::Identified;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a customer account.
///
/// Unrecognised values are kept as-is so that decoding stays lenient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Suspended,
    Other(String),
}

impl CustomerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
            CustomerStatus::Suspended => "SUSPENDED",
            CustomerStatus::Other(s) => s,
        }
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::Other(String::new())
    }
}

impl From<String> for CustomerStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ACTIVE" => CustomerStatus::Active,
            "INACTIVE" => CustomerStatus::Inactive,
            "SUSPENDED" => CustomerStatus::Suspended,
            _ => CustomerStatus::Other(s),
        }
    }
}

impl From<CustomerStatus> for String {
    fn from(status: CustomerStatus) -> Self {
        match status {
            CustomerStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: CustomerStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

// A missing `id` key decodes to `""`, which is still a valid identifier.
impl Identified for Customer {
    fn identifier(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl Identified for Product {
    fn identifier(&self) -> Option<&str> {
        Some(&self.id)
    }
}
