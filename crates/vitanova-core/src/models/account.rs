use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::calendar::AvailabilityCalendar;

/// A registered user of the platform.
///
/// Passwords are stored in plaintext: the store stands in for a demo
/// backend and carries no security model.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    /// Present only for counselors. A date key never maps to an empty
    /// slot list; empty lists are pruned on write.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub availability_calendar: Option<AvailabilityCalendar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Student,
    Counselor,
}
