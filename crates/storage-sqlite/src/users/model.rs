//! Database models for users.

use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub username: String,
    pub password_hash: String,
}

impl From<UserDB> for fundfolio_core::users::User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            password_hash: db.password_hash,
        }
    }
}

impl From<fundfolio_core::users::NewUser> for NewUserDB {
    fn from(domain: fundfolio_core::users::NewUser) -> Self {
        Self {
            username: domain.username,
            password_hash: domain.password_hash,
        }
    }
}
