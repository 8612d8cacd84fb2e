// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use homestay_client::{
	client::ApiClient,
	http::HttpClient,
	store::{MemoryStore, SessionKey, SessionStore},
	url::Url,
};
// std
use std::sync::Arc;

async fn authenticated_client(server: &MockServer, access: &str) -> ApiClient {
	let store_backend = Arc::new(MemoryStore::default());

	store_backend
		.set(SessionKey::AccessToken, access.to_string())
		.await
		.expect("Failed to seed access token into the store.");
	store_backend
		.set(SessionKey::RefreshToken, "r1".to_string())
		.await
		.expect("Failed to seed refresh token into the store.");

	let store: Arc<dyn SessionStore> = store_backend;
	let base_url = Url::parse(&server.url("/")).expect("Mock server URL should parse.");

	ApiClient::with_http_client(base_url, store, HttpClient::default())
		.await
		.expect("Failed to build test client.")
}

#[tokio::test]
async fn property_listings_support_query_filters_and_skip_the_bearer_header() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "t1").await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/properties/api/list/")
				.query_param("city", "Lisbon")
				.query_param("property_type", "apartment")
				.header_missing("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":1,"title":"Alfama loft","price_per_night":"95.00"}]"#);
		})
		.await;
	let listings = client
		.properties(&[("city", "Lisbon"), ("property_type", "apartment")])
		.await
		.expect("Filtered listing fetch should succeed.");

	mock.assert_async().await;

	assert_eq!(listings.len(), 1);
	assert_eq!(listings[0].title, "Alfama loft");
	assert_eq!(listings[0].price_per_night.as_deref(), Some("95.00"));
}

#[tokio::test]
async fn property_detail_reviews_and_anonymous_review_posting() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "t1").await;
	let detail = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/properties/api/7/");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":7,"title":"Casa Azul","average_rating":4.5}"#);
		})
		.await;
	let reviews = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/properties/api/7/reviews/");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":3,"rating":5,"comment":"Lovely","reviewer_name":"Ada"}]"#);
		})
		.await;
	let add_review = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/properties/api/7/add-review/")
				.json_body(json!({ "rating": 4, "comment": "Nice", "guest_name": "Guest" }));
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":4,"rating":4,"comment":"Nice","guest_name":"Guest"}"#);
		})
		.await;
	let property = client.property(7).await.expect("Property detail should succeed.");
	let listed = client.property_reviews(7).await.expect("Review fetch should succeed.");
	let created = client
		.add_review(7, &json!({ "rating": 4, "comment": "Nice", "guest_name": "Guest" }))
		.await
		.expect("Anonymous review should succeed.");

	detail.assert_async().await;
	reviews.assert_async().await;
	add_review.assert_async().await;

	assert_eq!(property.id, 7);
	assert_eq!(property.average_rating, Some(4.5));
	assert_eq!(listed[0].reviewer_name.as_deref(), Some("Ada"));
	assert_eq!(created.id, 4);
}

#[tokio::test]
async fn property_creation_requires_the_bearer_header() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "host-token").await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/properties/api/create/")
				.header("authorization", "Bearer host-token");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":11,"title":"New place"}"#);
		})
		.await;
	let created = client
		.create_property(&json!({ "title": "New place", "price_per_night": "80.00" }))
		.await
		.expect("Property creation should succeed.");

	mock.assert_async().await;

	assert_eq!(created.id, 11);
}

#[tokio::test]
async fn travel_listings_and_bookings_round_trip() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "t1").await;
	let listings = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/travel/listings/");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":1,"title":"Beach hut","is_active":true}]"#);
		})
		.await;
	let create_listing = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/travel/listings/").header("authorization", "Bearer t1");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":2,"title":"Cabin"}"#);
		})
		.await;
	let create_booking = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/travel/bookings/create/").header_missing("authorization");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":5,"status":"pending","guest_name":"Guest"}"#);
		})
		.await;
	let my_bookings = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/travel/bookings/my/").header("authorization", "Bearer t1");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":5,"status":"pending"}]"#);
		})
		.await;
	let cancel = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/travel/bookings/5/cancel/")
				.header("authorization", "Bearer t1");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":5,"status":"cancelled"}"#);
		})
		.await;
	let fetched = client.travel_listings().await.expect("Listing fetch should succeed.");
	let created = client
		.create_travel_listing(&json!({ "title": "Cabin", "price_per_night": "60.00" }))
		.await
		.expect("Listing creation should succeed.");
	let booked = client
		.create_booking(&json!({
			"listing_id": 1,
			"guest_name": "Guest",
			"guest_email": "g@h.com",
			"check_in": "2026-09-01",
			"check_out": "2026-09-05",
			"guests": 2,
		}))
		.await
		.expect("Anonymous booking should succeed.");
	let mine = client.my_bookings().await.expect("Booking list should succeed.");
	let cancelled = client.cancel_booking(5).await.expect("Cancellation should succeed.");

	listings.assert_async().await;
	create_listing.assert_async().await;
	create_booking.assert_async().await;
	my_bookings.assert_async().await;
	cancel.assert_async().await;

	assert_eq!(fetched[0].title, "Beach hut");
	assert_eq!(created.id, 2);
	assert_eq!(booked.status.as_deref(), Some("pending"));
	assert_eq!(mine.len(), 1);
	assert_eq!(cancelled.status.as_deref(), Some("cancelled"));
}

#[tokio::test]
async fn messaging_endpoints_use_the_conversation_query_and_paginated_envelopes() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "t1").await;
	let conversations = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/messaging/conversations/")
				.header("authorization", "Bearer t1");
			then.status(200).header("content-type", "application/json").body(
				r#"{"count":1,"next":null,"previous":null,"results":[{"conversation_id":"c-1","participants":[{"user_id":"u-1"}]}]}"#,
			);
		})
		.await;
	let messages = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/messaging/messages/")
				.query_param("conversation", "c-1")
				.header("authorization", "Bearer t1");
			then.status(200).header("content-type", "application/json").body(
				r#"{"count":1,"results":[{"message_id":"m-1","message_body":"hello","conversation":"c-1"}]}"#,
			);
		})
		.await;
	let send = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/messaging/messages/")
				.header("authorization", "Bearer t1")
				.json_body(json!({ "conversation": "c-1", "message_body": "hi there" }));
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"message_id":"m-2","message_body":"hi there","conversation":"c-1"}"#);
		})
		.await;
	let convs = client.conversations().await.expect("Conversation list should succeed.");
	let msgs = client.messages("c-1").await.expect("Message list should succeed.");
	let sent = client.send_message("c-1", "hi there").await.expect("Send should succeed.");

	conversations.assert_async().await;
	messages.assert_async().await;
	send.assert_async().await;

	assert_eq!(convs[0].conversation_id, "c-1");
	assert_eq!(msgs[0].message_body, "hello");
	assert_eq!(sent.message_id, "m-2");
}
