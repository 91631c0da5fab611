//! Webex REST notifier.
//!
//! Endpoints used, all authenticated with a bearer token:
//! - `POST /rooms` - create the destination room
//! - `POST /memberships` - add each roster member by email
//! - `POST /messages` - post a text message with a card attachment

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::Notifier;
use super::card::{Attachment, build_card};
use crate::config::ChatConfig;
use crate::error::NotificationError;
use crate::models::CreatureRecord;

const MESSAGE_TEXT: &str = "Pokémon Search Result";

#[derive(Serialize)]
struct CreateRoom<'a> {
    title: &'a str,
}

#[derive(Deserialize)]
struct Room {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMembership<'a> {
    room_id: &'a str,
    person_email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessage<'a> {
    room_id: &'a str,
    text: &'a str,
    attachments: Vec<Attachment>,
}

#[derive(Debug)]
pub struct WebexNotifier {
    http: Client,
    base_url: String,
    token: Option<String>,
    room_title: String,
    members: Vec<String>,
    room_id: Option<String>,
}

impl WebexNotifier {
    /// Build the notifier. No request is made until [`Notifier::initialize`].
    pub fn new(config: &ChatConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            room_title: config.room_title.clone(),
            members: config.members.clone(),
            room_id: None,
        })
    }

    /// Id of the provisioned room, if any
    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Response, NotificationError> {
        let token = self.token.as_deref().ok_or(NotificationError::MissingToken)?;
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "chat request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .map_err(|source| NotificationError::Transport { endpoint: endpoint.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NotificationError::Status { endpoint: endpoint.to_string(), status, body });
        }

        Ok(response)
    }
}

impl Notifier for WebexNotifier {
    fn initialize(&mut self) -> Result<(), NotificationError> {
        if self.room_id.is_some() {
            return Ok(());
        }

        let room: Room = self
            .post("rooms", &CreateRoom { title: &self.room_title })?
            .json()
            .map_err(|source| NotificationError::Decode { endpoint: "rooms".to_string(), source })?;
        info!(room_id = %room.id, title = %self.room_title, "created chat room");

        for email in &self.members {
            let membership = CreateMembership { room_id: &room.id, person_email: email };
            match self.post("memberships", &membership) {
                Ok(_) => debug!(%email, "added room member"),
                Err(e) => warn!(%email, error = %e, "failed to add room member"),
            }
        }

        self.room_id = Some(room.id);
        Ok(())
    }

    fn announce(&self, record: &CreatureRecord) -> Result<(), NotificationError> {
        let room_id = self.room_id.as_deref().ok_or(NotificationError::RoomNotProvisioned)?;

        let message = CreateMessage {
            room_id,
            text: MESSAGE_TEXT,
            attachments: vec![Attachment::from(build_card(record))],
        };
        self.post("messages", &message)?;
        debug!(name = %record.name, "posted card");
        Ok(())
    }
}
