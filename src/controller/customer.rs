use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::CustomerRequest,
};

#[post("/customer")]
pub async fn post_index(
    state: web::Data<AppState<State>>,
    data: web::Json<CustomerRequest>,
) -> Result<HttpResponse, Error> {
    let name = data.validate()?;
    let customer = state.engine.create_customer(&name).await?;

    Ok(HttpResponse::Created().json(customer))
}

#[get("/customers")]
pub async fn get_index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let customers = state.engine.list_customers().await?;

    Ok(web::Json(customers))
}
