use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::ticket::{CloseTicketDto, CreateTicketDto, TicketDto, TranscriptDto},
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::ticket::{
            CloseTicketParams, OpenTicketParams, Ticket, TicketPriority, TicketReference,
        },
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Closer name recorded when the request does not supply one.
const ADMIN_PANEL_CLOSER: &str = "Admin Panel";

/// List the most recent tickets, newest first.
///
/// # Returns
/// - `200 OK` - Up to 100 tickets
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let tickets = TicketService::new(&state.db, &state.ticket_desk)
        .recent()
        .await?;

    let dtos: Vec<TicketDto> = tickets.into_iter().map(Ticket::into_dto).collect();

    Ok(Json(dtos))
}

/// Open a ticket on behalf of a guild member.
///
/// The requester's display name is looked up on Discord since the API client only
/// supplies the ID.
///
/// # Returns
/// - `201 Created` - The new ticket
/// - `400 Bad Request` - Unknown priority
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `409 Conflict` - The user already has an open ticket
/// - `502 Bad Gateway` - User lookup or channel creation failed
/// - `500 Internal Server Error` - Database error
pub async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let priority = match payload.priority.as_deref() {
        Some(priority) => priority
            .parse::<TicketPriority>()
            .map_err(AppError::BadRequest)?,
        None => TicketPriority::default(),
    };

    let username = state
        .ticket_desk
        .gateway()
        .fetch_user_name(payload.user_id)
        .await?;

    let ticket = TicketService::new(&state.db, &state.ticket_desk)
        .open(OpenTicketParams {
            guild_id: state.guild_id,
            user_id: payload.user_id,
            username,
            category: payload.category,
            description: payload.description,
            priority,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Close an open ticket by its ticket ID.
///
/// The JSON body is optional; without one the admin panel is recorded as the closer.
///
/// # Returns
/// - `200 OK` - The closed ticket
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `404 Not Found` - No open ticket with this ID
/// - `500 Internal Server Error` - Database error
pub async fn close_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<String>,
    payload: Option<Json<CloseTicketDto>>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    let ticket = TicketService::new(&state.db, &state.ticket_desk)
        .close(CloseTicketParams {
            reference: TicketReference::TicketId(ticket_id),
            closed_by: payload
                .closed_by
                .unwrap_or_else(|| ADMIN_PANEL_CLOSER.to_string()),
            closed_by_id: None,
            reason: payload.reason,
        })
        .await?;

    Ok(Json(ticket.into_dto()))
}

/// Get the transcript captured when a ticket was closed.
///
/// # Returns
/// - `200 OK` - The transcript; empty while the ticket is open
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `404 Not Found` - No ticket with this ID
/// - `500 Internal Server Error` - Database error
pub async fn get_transcript(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let transcript = TicketService::new(&state.db, &state.ticket_desk)
        .transcript(&ticket_id)
        .await?;

    Ok(Json(TranscriptDto {
        ticket_id,
        transcript,
    }))
}
