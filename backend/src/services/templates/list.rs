use actix_web::{web, HttpResponse};

use crate::error::StoreError;
use crate::store::TemplateStore;

pub async fn process(store: web::Data<TemplateStore>) -> Result<HttpResponse, StoreError> {
    Ok(HttpResponse::Ok().json(store.list()?))
}
