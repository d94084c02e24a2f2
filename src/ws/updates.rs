use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::options::FullDocumentType;
use serde::Deserialize;

use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::{Poll, POLLS_COLLECTION};
use crate::state::AppState;

const NO_POLL_MSG: &str = "Required parameter `poll` missing!";
const INVALID_POLL_ID: &str = "There is no poll with that id!";
const SERVER_ERROR_MSG: &str = "An error occurred on the server.";

#[derive(Deserialize)]
pub struct UpdatesParams {
    poll: Option<String>,
}

/// WebSocket upgrade handler for live poll updates. One connection maps
/// to one change subscription on one poll document.
pub async fn poll_updates(
    ws: WebSocketUpgrade,
    Query(params): Query<UpdatesParams>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| stream_poll(socket, state, params.poll))
}

async fn stream_poll(mut socket: WebSocket, state: AppState, poll_id: Option<String>) {
    let Some(poll_id) = poll_id else {
        let _ = socket.send(Message::Text(NO_POLL_MSG.to_string())).await;
        let _ = socket.close().await;
        return;
    };

    println!("Live connection for poll {}", poll_id);

    let coll = state.db.collection::<Poll>(POLLS_COLLECTION);

    let poll = match coll.find_one(doc! { "_id": &poll_id }).await {
        Ok(Some(poll)) => poll,
        Ok(None) => {
            let _ = socket.send(Message::Text(INVALID_POLL_ID.to_string())).await;
            let _ = socket.close().await;
            return;
        }
        Err(e) => {
            eprintln!("Poll lookup failed for {}: {}", poll_id, e);
            let _ = socket.send(Message::Text(SERVER_ERROR_MSG.to_string())).await;
            let _ = socket.close().await;
            return;
        }
    };

    // Subscribe before pushing the snapshot so a write that lands between
    // the fetch and the subscription still reaches the viewer.
    let mut changes = match coll
        .watch()
        .pipeline([doc! { "$match": { "documentKey._id": &poll_id } }])
        .full_document(FullDocumentType::UpdateLookup)
        .await
    {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Change subscription failed for {}: {}", poll_id, e);
            let _ = socket.send(Message::Text(SERVER_ERROR_MSG.to_string())).await;
            let _ = socket.close().await;
            return;
        }
    };

    if push_poll(&mut socket, poll).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            change = changes.next() => {
                match change {
                    Some(Ok(event)) => {
                        // Deletes and invalidations carry no document.
                        let Some(poll) = event.full_document else { continue };
                        if push_poll(&mut socket, poll).await.is_err() {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        eprintln!("Change stream error for {}: {}", poll_id, e);
                        let _ = socket.send(Message::Text(SERVER_ERROR_MSG.to_string())).await;
                        let _ = socket.close().await;
                        break;
                    }
                    None => break,
                }
            }
            msg = socket.recv() => {
                match msg {
                    // No client-to-server protocol; only closure matters.
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    // Dropping the change stream deregisters the subscription; no further
    // store notifications are delivered to this connection.
    println!("Live connection closed for poll {}", poll_id);
}

async fn push_poll(socket: &mut WebSocket, poll: Poll) -> Result<(), axum::Error> {
    let payload = match serde_json::to_string(&PollResponse::from(poll)) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize poll document: {}", e);
            return Ok(());
        }
    };
    socket.send(Message::Text(payload)).await
}
