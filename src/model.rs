//! Typed payloads exchanged with the Homestay backend.
//!
//! Field sets follow the backend serializers; anything the backend may omit or null out is
//! optional with a default, so older or trimmed-down responses still deserialize. Unknown
//! fields are ignored. Decimal amounts arrive as strings and are kept as such—currency math
//! is not this crate's business.

// self
use crate::_prelude::*;

/// User record returned by the auth endpoints and nested in domain payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Backend-assigned user identifier (UUID).
	#[serde(default)]
	pub user_id: String,
	/// Given name.
	#[serde(default)]
	pub first_name: String,
	/// Family name.
	#[serde(default)]
	pub last_name: String,
	/// Login email address.
	#[serde(default)]
	pub email: String,
	/// Optional contact number.
	#[serde(default)]
	pub phone_number: Option<String>,
	/// Platform role (`guest`, `host`, ...).
	#[serde(default)]
	pub role: Option<String>,
	/// Account creation timestamp, RFC 3339.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Response of `POST /api/auth/login/`.
///
/// The token pair is optional because the backend returns a bare error object on bad
/// credentials; [`login`](crate::client::ApiClient) only installs a session when both halves
/// are present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
	/// Newly issued access token.
	#[serde(default)]
	pub access: Option<String>,
	/// Newly issued refresh token.
	#[serde(default)]
	pub refresh: Option<String>,
	/// User record bundled with the token pair.
	#[serde(default)]
	pub user: Option<UserProfile>,
}

/// Response of `POST /api/auth/register/`.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
	/// Human-readable confirmation message.
	#[serde(default)]
	pub message: String,
	/// The freshly created user record.
	pub user: UserProfile,
}

/// Payload of `POST /api/auth/register/`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
	/// Login email address.
	pub email: String,
	/// Plain-text password, sent once over TLS.
	pub password: String,
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
	/// Optional contact number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone_number: Option<String>,
	/// Platform role, defaults server-side to `guest`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
}

/// Response of `POST /api/token/refresh/`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RefreshResponse {
	/// Replacement access token; the refresh token is not rotated by this endpoint.
	#[serde(default)]
	pub access: Option<String>,
}

/// Property record from the listing and detail endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Property {
	/// Numeric property identifier.
	pub id: i64,
	/// Listing title.
	#[serde(default)]
	pub title: String,
	/// Long-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Property category (`apartment`, `house`, ...).
	#[serde(default)]
	pub property_type: Option<String>,
	/// Nightly rate as a decimal string.
	#[serde(default)]
	pub price_per_night: Option<String>,
	/// Free-form location label.
	#[serde(default)]
	pub location: Option<String>,
	/// City name.
	#[serde(default)]
	pub city: Option<String>,
	/// Country name.
	#[serde(default)]
	pub country: Option<String>,
	/// Bedroom count.
	#[serde(default)]
	pub bedrooms: Option<i64>,
	/// Bathroom count, halves allowed.
	#[serde(default)]
	pub bathrooms: Option<f64>,
	/// Bed count.
	#[serde(default)]
	pub beds: Option<i64>,
	/// Guest capacity.
	#[serde(default)]
	pub max_guests: Option<i64>,
	/// Cover image URL.
	#[serde(default)]
	pub image_url: Option<String>,
	/// Featured-listing flag.
	#[serde(default)]
	pub is_featured: Option<bool>,
	/// Display name of the host.
	#[serde(default)]
	pub host_name: Option<String>,
	/// Mean review rating.
	#[serde(default)]
	pub average_rating: Option<f64>,
	/// Number of approved reviews.
	#[serde(default)]
	pub review_count: Option<i64>,
	/// Record creation timestamp, RFC 3339.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Review attached to a property.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Review {
	/// Numeric review identifier.
	pub id: i64,
	/// Star rating, 1 through 5.
	#[serde(default)]
	pub rating: Option<i64>,
	/// Review text.
	#[serde(default)]
	pub comment: Option<String>,
	/// Display name resolved from the user or guest fields.
	#[serde(default)]
	pub reviewer_name: Option<String>,
	/// Guest-supplied name for anonymous reviews.
	#[serde(default)]
	pub guest_name: Option<String>,
	/// Record creation timestamp, RFC 3339.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Travel listing record (the lighter-weight sibling of [`Property`]).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Listing {
	/// Numeric listing identifier.
	pub id: i64,
	/// Listing title.
	#[serde(default)]
	pub title: String,
	/// Long-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Nightly rate as a decimal string.
	#[serde(default)]
	pub price_per_night: Option<String>,
	/// Free-form location label.
	#[serde(default)]
	pub location: Option<String>,
	/// Cover image URL.
	#[serde(default)]
	pub image_url: Option<String>,
	/// Whether the listing is currently bookable.
	#[serde(default)]
	pub is_active: Option<bool>,
	/// Host record.
	#[serde(default)]
	pub host: Option<UserProfile>,
}

/// Booking record covering both property and listing reservations.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Booking {
	/// Numeric booking identifier.
	pub id: i64,
	/// Booked property, when the reservation targets one.
	#[serde(default)]
	pub property: Option<Property>,
	/// Booked travel listing, when the reservation targets one.
	#[serde(default)]
	pub listing: Option<Listing>,
	/// Authenticated booker, absent for anonymous bookings.
	#[serde(default)]
	pub user: Option<UserProfile>,
	/// Guest-supplied name for anonymous bookings.
	#[serde(default)]
	pub guest_name: Option<String>,
	/// Guest-supplied email for anonymous bookings.
	#[serde(default)]
	pub guest_email: Option<String>,
	/// Check-in date, ISO 8601.
	#[serde(default)]
	pub check_in: Option<String>,
	/// Check-out date, ISO 8601.
	#[serde(default)]
	pub check_out: Option<String>,
	/// Guest head count.
	#[serde(default)]
	pub guests: Option<i64>,
	/// Total price as a decimal string.
	#[serde(default)]
	pub total_price: Option<String>,
	/// Booking lifecycle status (`pending`, `confirmed`, `cancelled`, ...).
	#[serde(default)]
	pub status: Option<String>,
	/// Free-form special requests.
	#[serde(default)]
	pub special_requests: Option<String>,
	/// Record creation timestamp, RFC 3339.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Conversation between platform users.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Conversation {
	/// Backend-assigned conversation identifier (UUID).
	#[serde(default)]
	pub conversation_id: String,
	/// Users taking part in the conversation.
	#[serde(default)]
	pub participants: Vec<UserProfile>,
	/// Messages nested by the detail serializer; the list endpoint omits them.
	#[serde(default)]
	pub messages: Vec<Message>,
	/// Record creation timestamp, RFC 3339.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Single message inside a conversation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Message {
	/// Backend-assigned message identifier (UUID).
	#[serde(default)]
	pub message_id: String,
	/// Sending user.
	#[serde(default)]
	pub sender: Option<UserProfile>,
	/// Identifier of the owning conversation.
	#[serde(default)]
	pub conversation: Option<String>,
	/// Message text.
	#[serde(default)]
	pub message_body: String,
	/// Send timestamp, RFC 3339.
	#[serde(default)]
	pub sent_at: Option<String>,
}
