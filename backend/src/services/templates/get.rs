use actix_web::{web, HttpResponse};

use common::requests::LoadTemplateResponse;

use crate::error::StoreError;
use crate::store::TemplateStore;

/// `GET /api/templates/{name}`: the JSON artifact the builder hydrates from.
pub async fn process(
    store: web::Data<TemplateStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let record = store.load(&name)?;
    Ok(HttpResponse::Ok().json(LoadTemplateResponse {
        json_data: record.json,
    }))
}

/// `GET /api/templates/{name}/html`: the rendered artifact, served as a page.
pub async fn html(
    store: web::Data<TemplateStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let record = store.load(&name)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(record.html))
}
