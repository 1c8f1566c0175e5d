use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Profile {
            id: user.id,
            name: user.name,
            phone: user.phone,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UserSample {
    pub count: usize,
    pub users: Vec<Profile>,
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub phone: Option<String>,
    pub password: Option<String>,
}
