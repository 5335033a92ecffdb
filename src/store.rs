//! In-memory user and chirp storage.
//!
//! A stand-in for a real database: records live for the lifetime of the
//! process. Ids are assigned sequentially starting at 1.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chirp {
    pub id: u64,
    pub body: String,
    pub user_id: u64,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    chirps: Vec<Chirp>,
}

#[derive(Default)]
pub struct Store {
    tables: Mutex<Tables>,
}

impl Store {
    // The lock is never held across an await or a user callback, so a
    // poisoned mutex still guards consistent data.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_user(&self, email: String) -> User {
        let mut tables = self.tables();
        let user = User { id: tables.users.len() as u64 + 1, email };
        tables.users.push(user.clone());
        user
    }

    /// Stores a chirp for `user_id`, or returns `None` if no such user exists.
    pub fn create_chirp(&self, body: String, user_id: u64) -> Option<Chirp> {
        let mut tables = self.tables();
        if !tables.users.iter().any(|u| u.id == user_id) {
            return None;
        }
        let chirp = Chirp { id: tables.chirps.len() as u64 + 1, body, user_id };
        tables.chirps.push(chirp.clone());
        Some(chirp)
    }

    /// All chirps in creation order.
    pub fn chirps(&self) -> Vec<Chirp> {
        self.tables().chirps.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let store = Store::default();
        assert_eq!(store.create_user("a@example.com".into()).id, 1);
        assert_eq!(store.create_user("b@example.com".into()).id, 2);
    }

    #[test]
    fn chirp_requires_an_existing_user() {
        let store = Store::default();
        assert_eq!(store.create_chirp("hello".into(), 1), None);

        let user = store.create_user("a@example.com".into());
        let chirp = store.create_chirp("hello".into(), user.id).unwrap();
        assert_eq!(chirp, Chirp { id: 1, body: "hello".into(), user_id: 1 });
        assert_eq!(store.chirps(), vec![chirp]);
    }
}
