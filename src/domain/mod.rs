//! Domain layer: entities, request parameters and validation (no I/O).

mod notification;
mod project;
mod sender;
mod signature;
mod subscription;
mod validation;
mod value;

pub use notification::{
    Notification, NotificationAction, NotificationCreate, NotificationCreated, NotificationList,
};
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use sender::{Sender, SenderCreate, SenderUpdate};
pub use signature::signature_for;
pub use subscription::{
    Subscription, SubscriptionCount, SubscriptionCreate, SubscriptionList, SubscriptionPage,
    SubscriptionUpdate,
};
pub use validation::ValidationError;
pub(crate) use validation::require_id;
pub use value::AuthToken;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_errors_name_the_field() {
        let errors = [
            NotificationCreate::new("").unwrap_err(),
            SubscriptionCreate::new(" ").unwrap_err(),
            SenderCreate::new("").unwrap_err(),
            ProjectCreate::new(1, "", "https://example.com").unwrap_err(),
        ];
        let messages = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "body must not be empty",
                "endpoint must not be empty",
                "name must not be empty",
                "name must not be empty",
            ]
        );
    }

    #[test]
    fn list_params_default_to_no_filters() {
        let list = SubscriptionList::default();
        assert_eq!(list.project_id, None);
        assert_eq!(list.page, None);
        assert_eq!(list.uids, None);
        assert_eq!(NotificationList::default().page, None);
    }
}
