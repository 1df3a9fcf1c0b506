use sqlx::{Error, Transaction};

use crate::model::{Loan, LoanStatus, NewLoan, Table};

use super::{DataBase, QueryResult};

impl Table<Loan> {
    pub async fn insert(&self, data: &NewLoan) -> Result<Loan, Error> {
        const SQL: &str = r#"
        INSERT INTO "loan" (
            "customer_id",
            "principal",
            "interest_rate",
            "period_years",
            "total_amount",
            "emi_amount",
            "total_interest",
            "start_date",
            "status"
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#;

        sqlx::query_as(SQL)
            .bind(data.customer_id)
            .bind(&data.principal)
            .bind(&data.interest_rate)
            .bind(data.period_years)
            .bind(&data.terms.total_amount)
            .bind(&data.terms.emi_amount)
            .bind(&data.terms.total_interest)
            .bind(data.start_date)
            .bind(LoanStatus::Active)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Loan>, Error> {
        const SQL: &str = r#"
        SELECT *
        FROM "loan"
        WHERE "id" = $1
        "#;

        sqlx::query_as(SQL).bind(id).fetch_optional(&self.pool).await
    }

    pub async fn get_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Loan>, Error> {
        const SQL: &str = r#"
        SELECT *
        FROM "loan"
        WHERE "customer_id" = $1
        ORDER BY "id" ASC
        "#;

        sqlx::query_as(SQL)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Row-locks the loan for the rest of the transaction.
    pub async fn lock_status(
        &self,
        id: i64,
        transaction: &mut Transaction<'_, DataBase>,
    ) -> Result<Option<LoanStatus>, Error> {
        const SQL: &str = r#"
        SELECT "status"
        FROM "loan"
        WHERE "id" = $1
        FOR UPDATE
        "#;

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&mut **transaction)
            .await
            .map(|result| result.map(|(status,)| status))
    }

    pub async fn close(
        &self,
        id: i64,
        transaction: &mut Transaction<'_, DataBase>,
    ) -> Result<QueryResult, Error> {
        const SQL: &str = r#"
        UPDATE "loan"
        SET "status" = $2
        WHERE
            "id" = $1 AND
            "status" = $3
        "#;

        sqlx::query(SQL)
            .bind(id)
            .bind(LoanStatus::Closed)
            .bind(LoanStatus::Active)
            .execute(&mut **transaction)
            .await
    }
}
