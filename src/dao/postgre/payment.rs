use sqlx::{Error, Transaction};

use crate::model::{NewPayment, Payment, Table};

use super::DataBase;

impl Table<Payment> {
    pub async fn insert(
        &self,
        data: &NewPayment,
        transaction: &mut Transaction<'_, DataBase>,
    ) -> Result<Payment, Error> {
        const SQL: &str = r#"
        INSERT INTO "payment" (
            "loan_id",
            "payment_date",
            "amount",
            "payment_type"
        )
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#;

        sqlx::query_as(SQL)
            .bind(data.loan_id)
            .bind(data.payment_date)
            .bind(&data.amount)
            .bind(&data.payment_type)
            .fetch_one(&mut **transaction)
            .await
    }

    pub async fn get_by_loan(
        &self,
        loan_id: i64,
    ) -> Result<Vec<Payment>, Error> {
        const SQL: &str = r#"
        SELECT *
        FROM "payment"
        WHERE "loan_id" = $1
        ORDER BY "id" ASC
        "#;

        sqlx::query_as(SQL)
            .bind(loan_id)
            .fetch_all(&self.pool)
            .await
    }
}
