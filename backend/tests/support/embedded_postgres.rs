//! Per-test databases on the embedded cluster.
//!
//! Databases are created with the `postgres` client so `CREATE DATABASE`
//! runs outside any transaction, then migrated with the service's embedded
//! migrations.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use user_service::outbound::persistence::apply_migrations;
use uuid::Uuid;

use super::format_postgres_error;

/// Create an empty, migrated database and return its URL.
pub fn provision_database(cluster: &TestCluster) -> Result<String, String> {
    let connection = cluster.connection();
    let name = format!("test_{}", Uuid::new_v4().simple());

    let mut admin = Client::connect(&connection.database_url("postgres"), NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;

    let url = connection.database_url(&name);
    apply_migrations(&url).map_err(|err| err.to_string())?;
    Ok(url)
}

/// Drop the users table to simulate schema loss.
pub fn drop_users_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS users")
        .map_err(|err| format_postgres_error(&err))
}
