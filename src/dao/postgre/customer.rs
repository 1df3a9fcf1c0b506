use sqlx::Error;

use crate::model::{Customer, Table};

impl Table<Customer> {
    pub async fn insert(&self, name: &str) -> Result<Customer, Error> {
        const SQL: &str = r#"
        INSERT INTO "customer" ("name")
        VALUES ($1)
        RETURNING "id", "name"
        "#;

        sqlx::query_as(SQL).bind(name).fetch_one(&self.pool).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Customer>, Error> {
        const SQL: &str = r#"
        SELECT "id", "name"
        FROM "customer"
        WHERE "id" = $1
        "#;

        sqlx::query_as(SQL).bind(id).fetch_optional(&self.pool).await
    }

    pub async fn get_all(&self) -> Result<Vec<Customer>, Error> {
        const SQL: &str = r#"
        SELECT "id", "name"
        FROM "customer"
        ORDER BY "id" ASC
        "#;

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }
}
