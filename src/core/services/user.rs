use crate::core::models::user::{Profile, UserSample};
use crate::core::ports::repository::{Store, UserCommon};
use crate::error::Error;

pub async fn login<S>(store: &mut S, phone: Option<String>, password: Option<String>) -> Result<Profile, Error>
where
    S: Store,
{
    let (phone, password) = match (phone.filter(|p| !p.is_empty()), password.filter(|p| !p.is_empty())) {
        (Some(phone), Some(password)) => (phone, password),
        _ => return Err(Error::BadRequest("Phone and password are required".into())),
    };
    let user = UserCommon::get_by_phone(store, &phone).await?.ok_or(Error::InvalidCredentials)?;
    // stored as plain text, hashing is out of scope for this service
    if user.password_hash != password {
        return Err(Error::InvalidCredentials);
    }
    Ok(user.into())
}

pub const SAMPLE_SIZE: i64 = 5;

/// First few users, for checking that the `users` table is seeded.
pub async fn sample<S>(store: &mut S) -> Result<UserSample, Error>
where
    S: Store,
{
    let users = UserCommon::sample(store, SAMPLE_SIZE).await?;
    Ok(UserSample { count: users.len(), users })
}
