//! Travel listing and booking endpoints.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	model::{Booking, Listing},
	request::{self, RequestDescriptor},
};

const LISTINGS_PATH: &str = "/api/travel/listings/";
const BOOKINGS_PATH: &str = "/api/travel/bookings/";
const CREATE_BOOKING_PATH: &str = "/api/travel/bookings/create/";
const MY_BOOKINGS_PATH: &str = "/api/travel/bookings/my/";

impl ApiClient {
	/// Fetches travel listings via `GET /api/travel/listings/`.
	pub async fn travel_listings(&self) -> Result<Vec<Listing>> {
		let body = self.execute(RequestDescriptor::get(LISTINGS_PATH).anonymous()).await?;

		request::list_from_body(body)
	}

	/// Creates a travel listing via `POST /api/travel/listings/` (authenticated).
	pub async fn create_travel_listing(&self, listing: &impl Serialize) -> Result<Listing> {
		self.execute_as(RequestDescriptor::post(LISTINGS_PATH).json(listing)?).await
	}

	/// Fetches every visible booking via `GET /api/travel/bookings/` (authenticated).
	pub async fn bookings(&self) -> Result<Vec<Booking>> {
		let body = self.execute(RequestDescriptor::get(BOOKINGS_PATH)).await?;

		request::list_from_body(body)
	}

	/// Creates a booking via `POST /api/travel/bookings/create/`.
	///
	/// The endpoint accepts anonymous bookings carrying guest contact fields, so no
	/// credential is attached.
	pub async fn create_booking(&self, booking: &impl Serialize) -> Result<Booking> {
		self.execute_as(RequestDescriptor::post(CREATE_BOOKING_PATH).json(booking)?.anonymous())
			.await
	}

	/// Fetches the authenticated user's bookings via `GET /api/travel/bookings/my/`.
	pub async fn my_bookings(&self) -> Result<Vec<Booking>> {
		let body = self.execute(RequestDescriptor::get(MY_BOOKINGS_PATH)).await?;

		request::list_from_body(body)
	}

	/// Cancels a booking via `POST /api/travel/bookings/{id}/cancel/` (authenticated).
	pub async fn cancel_booking(&self, booking_id: i64) -> Result<Booking> {
		self.execute_as(RequestDescriptor::post(format!(
			"/api/travel/bookings/{booking_id}/cancel/"
		)))
		.await
	}
}
