//! Notification handlers over the per-user store, plus the SSE stream.

use std::convert::Infallible;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast;
use uuid::Uuid;

use mistica_core::error::AppError;

use crate::dto::response::{
    ApiResponse, CountResponse, MessageResponse, NotificationListResponse, PermissionResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NotificationListResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    let store = store.lock().await;
    Ok(Json(ApiResponse::ok(NotificationListResponse {
        notifications: store.records().to_vec(),
        unread_count: store.unread_count(),
        push_permission: store.push_permission(),
    })))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    let count = store.lock().await.unread_count();
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// POST /api/notifications/permission
pub async fn request_permission(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PermissionResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    let mut store = store.lock().await;
    let granted = store.request_push_permission().await;
    Ok(Json(ApiResponse::ok(PermissionResponse {
        granted,
        permission: store.push_permission(),
    })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    store.lock().await.mark_read(id).await;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Marked as read".to_string(),
    })))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    store.lock().await.mark_all_read().await;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "All marked as read".to_string(),
    })))
}

/// DELETE /api/notifications/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    store.lock().await.remove(id).await;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Removed".to_string(),
    })))
}

/// DELETE /api/notifications
pub async fn clear_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let store = state.notification_center.store_for(auth.user_id).await;
    store.lock().await.clear_all().await;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Cleared".to_string(),
    })))
}

/// GET /api/notifications/stream
///
/// Server-sent events carrying the caller's push messages as they are
/// shown. Only available when the broadcast push channel is configured.
pub async fn stream(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let channel = state
        .push_broadcast
        .as_ref()
        .ok_or_else(|| AppError::service_unavailable("Push channel is not configured"))?;

    let rx = channel.subscribe();
    let user_id = auth.user_id;

    let stream = futures::stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(message) if message.user_id == user_id => {
                    match Event::default().event("notification").json_data(&message) {
                        Ok(event) => return Some((Ok(event), rx)),
                        Err(_) => continue,
                    }
                }
                // Messages for other users and dropped backlog are skipped.
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
