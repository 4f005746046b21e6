//! Validated entity shapes, one per persisted collection.
//!
//! Each entity deserializes from client JSON, applies its documented
//! defaults, and exposes a `validate` method enforcing the numeric and
//! format bounds. The [`crate::domain::schema::SchemaRegistry`] is the only
//! caller; nothing persists an entity that has not passed through it.

mod community_event;
mod contact_message;
mod enrollment;
mod media_item;
mod order;
mod product;
mod testimonial;
mod user;
pub(crate) mod validation;

pub use self::community_event::CommunityEvent;
pub use self::contact_message::ContactMessage;
pub use self::enrollment::Enrollment;
pub use self::media_item::MediaItem;
pub use self::order::{Order, OrderItem};
pub use self::product::Product;
pub use self::testimonial::Testimonial;
pub use self::user::User;
