//! MySqlInviteStore - Store persistente su MySQL
//!
//! La tabella `invites` ha `id` come chiave primaria: è il vincolo di unicità
//! a garantire la creazione atomica (un INSERT su chiave già presente fallisce
//! con una unique violation, che diventa `StoreError::AlreadyExists`).
//! Lo schema viene creato dalle migrazioni in `./migrations`.

use super::{InviteStore, StoreError};
use crate::entities::{Invite, InviteId};
use async_trait::async_trait;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::time::Duration;
use tracing::{debug, info, instrument};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub struct MySqlInviteStore {
    connection_pool: MySqlPool,
}

impl MySqlInviteStore {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Apre il pool di connessioni ed esegue le migrazioni pendenti
    #[instrument(skip(database_url))]
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connection_lifetime: Duration,
    ) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .max_lifetime(connection_lifetime)
            .connect(database_url)
            .await?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        info!("MySQL invite store ready");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl InviteStore for MySqlInviteStore {
    async fn create(&self, invite: &Invite) -> Result<(), StoreError> {
        debug!("Inserting invite {}", invite.id);
        sqlx::query(
            r#"
            INSERT INTO invites (id, name, phone, location, event1, event2, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invite.id)
        .bind(&invite.name)
        .bind(&invite.phone)
        .bind(&invite.location)
        .bind(invite.event1)
        .bind(invite.event2)
        .bind(invite.timestamp)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: &InviteId) -> Result<Option<Invite>, StoreError> {
        let invite = sqlx::query_as::<_, Invite>(
            r#"
            SELECT id, name, phone, location, event1, event2, created_at
            FROM invites
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(invite)
    }

    async fn delete(&self, id: &InviteId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM invites WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Invite>, StoreError> {
        let invites = sqlx::query_as::<_, Invite>(
            "SELECT id, name, phone, location, event1, event2, created_at FROM invites",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(invites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SubsecRound, Utc};

    /// Richiede un MySQL raggiungibile: `DATABASE_URL=... cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_mysql_lifecycle() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let store = MySqlInviteStore::connect(&url, 2, Duration::from_secs(60))
            .await
            .expect("Failed to connect to MySQL");

        let invite = Invite {
            id: InviteId::derive("Mysql Test", "000"),
            name: "Mysql Test".to_string(),
            phone: "000".to_string(),
            location: "Hall".to_string(),
            event1: 1.0,
            event2: 0.0,
            timestamp: Utc::now().trunc_subsecs(6),
        };
        let _ = store.delete(&invite.id).await;

        store.create(&invite).await.unwrap();
        assert!(matches!(
            store.create(&invite).await,
            Err(StoreError::AlreadyExists)
        ));
        assert_eq!(store.get(&invite.id).await.unwrap(), Some(invite.clone()));
        assert!(store.scan().await.unwrap().contains(&invite));

        // NO PAD: uno spazio finale nel telefono dà una chiave diversa
        let padded = Invite {
            id: InviteId::derive("Mysql Test", "000 "),
            phone: "000 ".to_string(),
            location: "L".repeat(70_000),
            ..invite.clone()
        };
        let _ = store.delete(&padded.id).await;
        store.create(&padded).await.unwrap();
        assert_eq!(store.get(&padded.id).await.unwrap(), Some(padded.clone()));

        store.delete(&padded.id).await.unwrap();
        assert_eq!(store.get(&invite.id).await.unwrap(), Some(invite.clone()));

        store.delete(&invite.id).await.unwrap();
        assert!(matches!(
            store.delete(&invite.id).await,
            Err(StoreError::NotFound)
        ));
    }
}
