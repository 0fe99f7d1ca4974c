//! Diesel table definitions.
//!
//! Mirrors `migrations/*_create_users/up.sql`. Keep the two in step; Diesel
//! type-checks queries against this file only.

diesel::table! {
    /// Registered users; `email` carries the `users_email_key` unique constraint.
    users (id) {
        id -> Int8,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        created_at -> Timestamptz,
    }
}
