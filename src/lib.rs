//! Typed Rust client for the Pushpad web push API.
//!
//! The crate has three layers: a domain layer of entities and request parameters, a
//! transport layer for wire-format details (JSON bodies, repeated query keys, the
//! `X-Total-Count` header), and a client layer that sends one request per operation.
//!
//! ```rust,no_run
//! use pushpad::{AuthToken, NotificationCreate, PushpadClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushpad::PushpadError> {
//!     let client = PushpadClient::builder(AuthToken::new("...")?)
//!         .project_id(123)
//!         .build()?;
//!
//!     let mut notification = NotificationCreate::new("Hello world!")?;
//!     notification.target_url = Some("https://example.com".to_owned());
//!     let created = client.send_notification(notification).await?;
//!     println!("notification {} reached {:?} devices", created.id, created.scheduled);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushpadClient, PushpadClientBuilder, PushpadError};
pub use domain::{
    AuthToken, Notification, NotificationAction, NotificationCreate, NotificationCreated,
    NotificationList, Project, ProjectCreate, ProjectUpdate, Sender, SenderCreate, SenderUpdate,
    Subscription, SubscriptionCount, SubscriptionCreate, SubscriptionList, SubscriptionPage,
    SubscriptionUpdate, ValidationError, signature_for,
};
