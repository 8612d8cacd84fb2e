//! Property listing, detail, creation, and review endpoints.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	model::{Property, Review},
	request::{self, RequestDescriptor},
};

const LIST_PATH: &str = "/api/properties/api/list/";
const CREATE_PATH: &str = "/api/properties/api/create/";

impl ApiClient {
	/// Fetches property listings via `GET /api/properties/api/list/`.
	///
	/// `filters` are appended verbatim as query parameters (`city`, `property_type`,
	/// `max_price`, ...); pass an empty slice for the unfiltered list.
	pub async fn properties(&self, filters: &[(&str, &str)]) -> Result<Vec<Property>> {
		let path = if filters.is_empty() {
			LIST_PATH.to_string()
		} else {
			let query = url::form_urlencoded::Serializer::new(String::new())
				.extend_pairs(filters)
				.finish();

			format!("{LIST_PATH}?{query}")
		};
		let body = self.execute(RequestDescriptor::get(path).anonymous()).await?;

		request::list_from_body(body)
	}

	/// Fetches one property via `GET /api/properties/api/{id}/`.
	pub async fn property(&self, id: i64) -> Result<Property> {
		self.execute_as(RequestDescriptor::get(format!("/api/properties/api/{id}/")).anonymous())
			.await
	}

	/// Creates a property via `POST /api/properties/api/create/` (authenticated).
	pub async fn create_property(&self, property: &impl Serialize) -> Result<Property> {
		self.execute_as(RequestDescriptor::post(CREATE_PATH).json(property)?).await
	}

	/// Fetches a property's reviews via `GET /api/properties/api/{id}/reviews/`.
	pub async fn property_reviews(&self, property_id: i64) -> Result<Vec<Review>> {
		let body = self
			.execute(
				RequestDescriptor::get(format!("/api/properties/api/{property_id}/reviews/"))
					.anonymous(),
			)
			.await?;

		request::list_from_body(body)
	}

	/// Adds a review via `POST /api/properties/api/{id}/add-review/`.
	///
	/// The endpoint accepts anonymous reviews carrying a `guest_name`, so no credential is
	/// attached.
	pub async fn add_review(&self, property_id: i64, review: &impl Serialize) -> Result<Review> {
		self.execute_as(
			RequestDescriptor::post(format!("/api/properties/api/{property_id}/add-review/"))
				.json(review)?
				.anonymous(),
		)
		.await
	}
}
