use actix_web::{post, web, HttpResponse};

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::LendRequest,
};

#[post("/lend")]
pub async fn index(
    state: web::Data<AppState<State>>,
    data: web::Json<LendRequest>,
) -> Result<HttpResponse, Error> {
    let application = data.validate()?;
    let loan = state.engine.originate(application).await?;

    Ok(HttpResponse::Created().json(loan))
}
