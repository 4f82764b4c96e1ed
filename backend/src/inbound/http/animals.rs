//! Animal endpoints.
//!
//! ```text
//! POST   /api/animals
//! GET    /api/animals?species=&breed=&size=&location=&age=&limit=&offset=
//! GET    /api/animals/{id}
//! PUT    /api/animals/{id}
//! DELETE /api/animals/{id}
//! ```

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::PageRequest;
use serde_json::Value;

use crate::domain::{AnimalChanges, AnimalDraft, AnimalFilters, Error, ResourceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::extractors::json_body;
use crate::inbound::http::state::HttpState;

const RESOURCE: &str = "Animal";

/// Reported when no animal has the requested identifier.
pub const NOT_FOUND: &str = "Animal not found";
const CREATED: &str = "Animal created successfully";
const RETRIEVED: &str = "Animal retrieved successfully";
const UPDATED: &str = "Animal updated successfully";

fn parse_id(req: &HttpRequest, state: &HttpState, raw: &str) -> ApiResult<ResourceId> {
    ResourceId::parse(raw).map_err(|errors| state.reject(req, Error::validation(&errors)))
}

/// Create an animal.
#[post("")]
pub async fn create_animal(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = AnimalDraft::from_json(&*payload)
        .map_err(|errors| state.reject(&req, Error::validation(&errors)))?;
    let animal = state
        .animals
        .create(&draft)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?;
    Ok(envelope::created(animal, CREATED, state.clock.utc()))
}

/// List animals matching the query filters, newest first.
#[get("")]
pub async fn list_animals(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let page = PageRequest::from_raw(
        query.get("limit").map(String::as_str),
        query.get("offset").map(String::as_str),
    );
    let filters = AnimalFilters::from_query(&*query);
    let listing = state
        .animals
        .list(&filters, page)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?;
    Ok(envelope::paginated(
        listing.items,
        page,
        listing.total,
        state.clock.utc(),
    ))
}

/// Fetch one animal.
#[get("/{id}")]
pub async fn get_animal(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let animal = state
        .animals
        .find_by_id(id)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?
        .ok_or_else(|| state.reject(&req, Error::not_found(NOT_FOUND)))?;
    Ok(envelope::ok(animal, Some(RETRIEVED), state.clock.utc()))
}

/// Partially update one animal.
#[put("/{id}")]
pub async fn update_animal(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let payload = json_body(&body).map_err(|err| state.reject(&req, err))?;
    let changes = AnimalChanges::from_json(&payload)
        .map_err(|errors| state.reject(&req, Error::validation(&errors)))?;
    let animal = state
        .animals
        .update(id, &changes)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?
        .ok_or_else(|| state.reject(&req, Error::not_found(NOT_FOUND)))?;
    Ok(envelope::ok(animal, Some(UPDATED), state.clock.utc()))
}

/// Delete one animal.
#[delete("/{id}")]
pub async fn delete_animal(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let removed = state
        .animals
        .delete(id)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?;
    if removed {
        Ok(envelope::no_content())
    } else {
        Err(state.reject(&req, Error::not_found(NOT_FOUND)))
    }
}

/// Mount the animal routes under `/api/animals`.
pub fn scope() -> actix_web::Scope {
    web::scope("/api/animals")
        .service(create_animal)
        .service(list_animals)
        .service(get_animal)
        .service(update_animal)
        .service(delete_animal)
}
