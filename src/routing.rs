use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/tickets", get(get_tickets).post(post_ticket))
        .route(
            "/api/tickets/:id",
            get(get_ticket).put(put_ticket).delete(delete_ticket),
        )
}

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.find_tickets().await?;

    Ok(Json(tickets))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let response = match tickets_service.find_ticket(id).await? {
        Some(ticket) => Json(ticket).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

async fn post_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    payload: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(ticket) = payload?;
    let ticket = tickets_service.create_ticket(ticket).await?;
    let location = format!("/api/tickets/{}", ticket.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(ticket)))
}

async fn put_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<i32>,
    payload: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<StatusCode, Error> {
    let Json(ticket) = payload?;
    let status = match tickets_service.update_ticket(id, ticket).await? {
        true => StatusCode::NO_CONTENT,
        false => StatusCode::BAD_REQUEST,
    };

    Ok(status)
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    let status = match tickets_service.delete_ticket(id).await? {
        true => StatusCode::NO_CONTENT,
        false => StatusCode::NOT_FOUND,
    };

    Ok(status)
}
