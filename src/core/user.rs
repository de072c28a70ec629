//! User business logic. Accounts are recorded only; no operation authenticates.

use super::validation::{KeyMatch, UniqueKey, append_checked, require_fields};
use crate::{
    entities::{UserModel, user},
    errors::Result,
    store::RecordStore,
};

/// Raw form input for a new user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub full_name: String,
    pub created_at: String,
}

impl NewUser {
    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("role", self.role.as_str()),
            ("full_name", self.full_name.as_str()),
            ("created_at", self.created_at.as_str()),
        ]
    }
}

pub fn create_user<S: RecordStore>(store: &S, input: &NewUser) -> Result<UserModel> {
    require_fields(&input.fields())?;

    // Passwords are kept exactly as typed, surrounding whitespace included.
    let model = UserModel {
        username: input.username.trim().to_string(),
        password: input.password.clone(),
        role: input.role.trim().to_string(),
        full_name: input.full_name.trim().to_string(),
        created_at: input.created_at.trim().to_string(),
    };

    append_checked(
        store,
        user::COLLECTION,
        &model,
        Some(UniqueKey {
            field: user::KEY_FIELD,
            value: &model.username,
            matching: KeyMatch::CaseSensitive,
        }),
    )?;
    Ok(model)
}

pub fn list_users<S: RecordStore>(store: &S) -> Result<Vec<UserModel>> {
    store.load(user::COLLECTION)
}
