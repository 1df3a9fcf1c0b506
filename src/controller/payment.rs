use actix_web::{post, web, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::PaymentRequest,
};

#[post("/payment")]
pub async fn index(
    state: web::Data<AppState<State>>,
    data: web::Json<PaymentRequest>,
) -> Result<impl Responder, Error> {
    let order = data.validate()?;
    let result = state.engine.record_payment(order).await?;

    Ok(web::Json(result))
}
