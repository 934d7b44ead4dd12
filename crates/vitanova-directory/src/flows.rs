use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use vitanova_core::calendar::AvailabilityCalendar;
use vitanova_core::models::account::{Account, Role};
use vitanova_store::port::StoragePort;
use vitanova_store::state::{load_document, save_document};

use crate::error::DirectoryError;
use crate::validate;

/// The two seeded demo accounts. Login materializes them on first use and
/// password reset is lenient for them even when no account exists.
pub const DEMO_STUDENT_EMAIL: &str = "student@campus.edu";
pub const DEMO_COUNSELOR_EMAIL: &str = "counselor@campus.edu";
const DEMO_PASSWORD: &str = "password123";

/// Profile data collected by the sign-up flow. The one-time-code step
/// before this accepts any submitted value; only the account creation
/// side effect matters.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub age: Option<u8>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub address: Option<String>,
}

/// Create an account. Counselors start with an empty availability
/// calendar.
pub async fn sign_up<P: StoragePort>(
    port: &P,
    new_account: NewAccount,
) -> Result<Account, DirectoryError> {
    validate::email(&new_account.email)?;
    if let Some(phone) = &new_account.phone {
        validate::phone(phone, "Phone number")?;
    }
    if let Some(contact) = &new_account.emergency_contact {
        validate::phone(contact, "Emergency contact")?;
    }

    let mut doc = load_document(port).await;
    if doc.accounts.iter().any(|a| a.email == new_account.email) {
        return Err(DirectoryError::DuplicateAccount {
            email: new_account.email,
        });
    }

    let account = Account {
        id: Uuid::new_v4(),
        email: new_account.email,
        password: new_account.password,
        role: new_account.role,
        name: new_account.name,
        age: new_account.age,
        phone: new_account.phone,
        emergency_contact: new_account.emergency_contact,
        address: new_account.address,
        availability_calendar: match new_account.role {
            Role::Counselor => Some(AvailabilityCalendar::new()),
            Role::Student => None,
        },
    };
    doc.accounts.push(account.clone());
    save_document(port, &doc).await?;

    info!(account_id = %account.id, role = ?account.role, "account created");
    Ok(account)
}

/// Look up an account by email + role.
///
/// The two demo accounts are created on their first login when absent, so
/// a fresh store is usable without sign-up.
pub async fn login<P: StoragePort>(
    port: &P,
    email: &str,
    role: Role,
) -> Result<Account, DirectoryError> {
    let doc = load_document(port).await;
    if let Some(account) = doc
        .accounts
        .iter()
        .find(|a| a.email == email && a.role == role)
    {
        return Ok(account.clone());
    }

    match (email, role) {
        (DEMO_STUDENT_EMAIL, Role::Student) => {
            materialize_demo(port, email, role, "Alex Johnson").await
        }
        (DEMO_COUNSELOR_EMAIL, Role::Counselor) => {
            materialize_demo(port, email, role, "Dr. Emily Carter").await
        }
        _ => Err(DirectoryError::AccountNotFound),
    }
}

async fn materialize_demo<P: StoragePort>(
    port: &P,
    email: &str,
    role: Role,
    name: &str,
) -> Result<Account, DirectoryError> {
    info!(email, "seeding demo account on first login");
    sign_up(
        port,
        NewAccount {
            email: email.to_string(),
            password: DEMO_PASSWORD.to_string(),
            role,
            name: name.to_string(),
            age: None,
            phone: None,
            emergency_contact: None,
            address: None,
        },
    )
    .await
}

/// Overwrite the stored password for `email`.
///
/// Unknown emails fail, except the two demo addresses which succeed as a
/// no-op — preserved demo leniency, not intended product behavior.
pub async fn reset_password<P: StoragePort>(
    port: &P,
    email: &str,
    new_password: &str,
) -> Result<(), DirectoryError> {
    validate::email(email)?;

    let mut doc = load_document(port).await;
    match doc.accounts.iter_mut().find(|a| a.email == email) {
        Some(account) => {
            account.password = new_password.to_string();
            save_document(port, &doc).await?;
            info!(email, "password reset");
            Ok(())
        }
        None if email == DEMO_STUDENT_EMAIL || email == DEMO_COUNSELOR_EMAIL => Ok(()),
        None => Err(DirectoryError::AccountNotFound),
    }
}

/// Replace a counselor's availability calendar.
///
/// Empty date keys are pruned on write so the stored calendar never
/// carries an empty slot list.
pub async fn update_availability<P: StoragePort>(
    port: &P,
    counselor_id: Uuid,
    mut calendar: AvailabilityCalendar,
) -> Result<Account, DirectoryError> {
    calendar.prune_empty();

    let mut doc = load_document(port).await;
    let Some(account) = doc.account_by_id_mut(counselor_id) else {
        return Err(DirectoryError::AccountNotFound);
    };
    account.availability_calendar = Some(calendar);
    let updated = account.clone();
    save_document(port, &doc).await?;

    info!(counselor_id = %counselor_id, "availability updated");
    Ok(updated)
}
