use actix_web::{web, HttpResponse};
use log::info;

use common::requests::{SaveTemplateRequest, SaveTemplateResponse};

use crate::error::StoreError;
use crate::store::TemplateStore;

pub async fn process(
    store: web::Data<TemplateStore>,
    payload: web::Json<SaveTemplateRequest>,
) -> Result<HttpResponse, StoreError> {
    let request = payload.into_inner();
    store.save(&request.name, &request.html, &request.json, request.overwrite)?;

    let name = request.name.trim();
    info!("saved template '{}' (overwrite: {})", name, request.overwrite);
    Ok(HttpResponse::Ok().json(SaveTemplateResponse {
        html_url: format!("/api/templates/{}/html", name),
        json_url: format!("/api/templates/{}", name),
    }))
}
