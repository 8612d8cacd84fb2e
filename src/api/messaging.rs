//! Conversation and message endpoints (all authenticated).

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	model::{Conversation, Message},
	request::{self, RequestDescriptor},
};

const CONVERSATIONS_PATH: &str = "/api/messaging/conversations/";
const MESSAGES_PATH: &str = "/api/messaging/messages/";

impl ApiClient {
	/// Fetches the user's conversations via `GET /api/messaging/conversations/`.
	pub async fn conversations(&self) -> Result<Vec<Conversation>> {
		let body = self.execute(RequestDescriptor::get(CONVERSATIONS_PATH)).await?;

		request::list_from_body(body)
	}

	/// Fetches one conversation's messages via
	/// `GET /api/messaging/messages/?conversation={id}`.
	pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
		let query = url::form_urlencoded::Serializer::new(String::new())
			.append_pair("conversation", conversation_id)
			.finish();
		let body =
			self.execute(RequestDescriptor::get(format!("{MESSAGES_PATH}?{query}"))).await?;

		request::list_from_body(body)
	}

	/// Sends a message via `POST /api/messaging/messages/`.
	pub async fn send_message(&self, conversation_id: &str, message_body: &str) -> Result<Message> {
		self.execute_as(RequestDescriptor::post(MESSAGES_PATH).json(&json!({
			"conversation": conversation_id,
			"message_body": message_body,
		}))?)
		.await
	}
}
