use actix_web::{get, web, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
};

#[get("/ledger/{loan_id}")]
pub async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let loan_id = path.into_inner();
    let ledger = state.engine.get_ledger(loan_id).await?;

    Ok(web::Json(ledger))
}
