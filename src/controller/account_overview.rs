use actix_web::{get, web, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
};

#[get("/account_overview/{customer_id}")]
pub async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let customer_id = path.into_inner();
    let overview = state.engine.get_account_overview(customer_id).await?;

    Ok(web::Json(overview))
}
