//! Member endpoints.
//!
//! ```text
//! POST   /api/members
//! GET    /api/members?fullName=&email=&limit=&offset=
//! GET    /api/members/{id}
//! PUT    /api/members/{id}
//! DELETE /api/members/{id}
//! ```

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::PageRequest;
use serde_json::Value;

use crate::domain::{Error, MemberChanges, MemberDraft, MemberFilters, ResourceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::extractors::json_body;
use crate::inbound::http::state::HttpState;

const RESOURCE: &str = "Member";

/// Reported when no member has the requested identifier.
pub const NOT_FOUND: &str = "Member not found";
const CREATED: &str = "Member created successfully";
const RETRIEVED: &str = "Member retrieved successfully";
const UPDATED: &str = "Member updated successfully";

fn parse_id(req: &HttpRequest, state: &HttpState, raw: &str) -> ApiResult<ResourceId> {
    ResourceId::parse(raw).map_err(|errors| state.reject(req, Error::validation(&errors)))
}

/// Create a member.
#[post("")]
pub async fn create_member(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = MemberDraft::from_json(&*payload)
        .map_err(|errors| state.reject(&req, Error::validation(&errors)))?;
    let member = state
        .members
        .create(&draft)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?;
    Ok(envelope::created(member, CREATED, state.clock.utc()))
}

/// List members matching the query filters, in id order.
#[get("")]
pub async fn list_members(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let page = PageRequest::from_raw(
        query.get("limit").map(String::as_str),
        query.get("offset").map(String::as_str),
    );
    let filters = MemberFilters::from_query(&*query);
    let listing = state
        .members
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

/// Fetch one member.
#[get("/{id}")]
pub async fn get_member(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let member = state
        .members
        .find_by_id(id)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?
        .ok_or_else(|| state.reject(&req, Error::not_found(NOT_FOUND)))?;
    Ok(envelope::ok(member, Some(RETRIEVED), state.clock.utc()))
}

/// Partially update one member.
#[put("/{id}")]
pub async fn update_member(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let payload = json_body(&body).map_err(|err| state.reject(&req, err))?;
    let changes = MemberChanges::from_json(&payload)
        .map_err(|errors| state.reject(&req, Error::validation(&errors)))?;
    let member = state
        .members
        .update(id, &changes)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?
        .ok_or_else(|| state.reject(&req, Error::not_found(NOT_FOUND)))?;
    Ok(envelope::ok(member, Some(UPDATED), state.clock.utc()))
}

/// Delete one member.
#[delete("/{id}")]
pub async fn delete_member(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&req, &state, &id)?;
    let removed = state
        .members
        .delete(id)
        .await
        .map_err(|err| state.reject(&req, err.into_domain(RESOURCE)))?;
    if removed {
        Ok(envelope::no_content())
    } else {
        Err(state.reject(&req, Error::not_found(NOT_FOUND)))
    }
}

/// Mount the member routes under `/api/members`.
pub fn scope() -> actix_web::Scope {
    web::scope("/api/members")
        .service(create_member)
        .service(list_members)
        .service(get_member)
        .service(update_member)
        .service(delete_member)
}
