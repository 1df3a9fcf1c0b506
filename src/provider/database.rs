use async_trait::async_trait;
use tracing::debug;

use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType, Storage},
    error::Error,
    model::{
        Customer, Loan, LoanStatus, NewLoan, NewPayment, Payment, Table,
    },
};

#[derive(Debug)]
pub struct DatabasePool {
    pub customer: Table<Customer>,
    pub loan: Table<Loan>,
    pub payment: Table<Payment>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .max_connections(config.max_connections)
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool {
            customer: Table::new(pool.clone()),
            loan: Table::new(pool.clone()),
            payment: Table::new(pool.clone()),
            pool,
        })
    }

    pub fn get_pool(&self) -> &PoolType {
        &self.pool
    }
}

#[async_trait]
impl Storage for DatabasePool {
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, Error> {
        Ok(self.customer.get(id).await?)
    }

    async fn insert_customer(&self, name: &str) -> Result<Customer, Error> {
        Ok(self.customer.insert(name).await?)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        Ok(self.customer.get_all().await?)
    }

    async fn get_loan(&self, id: i64) -> Result<Option<Loan>, Error> {
        Ok(self.loan.get(id).await?)
    }

    async fn get_loans_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Loan>, Error> {
        Ok(self.loan.get_by_customer(customer_id).await?)
    }

    async fn insert_loan(&self, loan: &NewLoan) -> Result<Loan, Error> {
        Ok(self.loan.insert(loan).await?)
    }

    async fn get_payments(&self, loan_id: i64) -> Result<Vec<Payment>, Error> {
        Ok(self.payment.get_by_loan(loan_id).await?)
    }

    async fn commit_payment(
        &self,
        data: &NewPayment,
        close_loan: bool,
    ) -> Result<Payment, Error> {
        let mut transaction = self.payment.begin().await?;

        match self.loan.lock_status(data.loan_id, &mut transaction).await? {
            None => return Err(Error::LoanNotFound(data.loan_id)),
            Some(LoanStatus::Closed) => {
                return Err(Error::LoanNotActive(data.loan_id))
            },
            Some(LoanStatus::Active) => {},
        }

        let payment = self.payment.insert(data, &mut transaction).await?;

        if close_loan {
            let result = self.loan.close(data.loan_id, &mut transaction).await?;
            debug!(
                "Loan {} closed, {} row(s) updated",
                data.loan_id,
                result.rows_affected()
            );
        }

        transaction.commit().await?;

        Ok(payment)
    }
}
