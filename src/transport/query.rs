use crate::domain::{NotificationList, SubscriptionCount, SubscriptionList};

const PAGE: &str = "page";
const PER_PAGE: &str = "per_page";
const UIDS: &str = "uids[]";
const TAGS: &str = "tags[]";

pub fn encode_notification_list_query(request: &NotificationList) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_positive(&mut params, PAGE, request.page);
    params
}

pub fn encode_subscription_list_query(request: &SubscriptionList) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_positive(&mut params, PAGE, request.page);
    push_positive(&mut params, PER_PAGE, request.per_page);
    push_repeated(&mut params, UIDS, request.uids.as_deref());
    push_repeated(&mut params, TAGS, request.tags.as_deref());
    params
}

pub fn encode_subscription_count_query(request: &SubscriptionCount) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_repeated(&mut params, UIDS, request.uids.as_deref());
    push_repeated(&mut params, TAGS, request.tags.as_deref());
    params
}

fn push_positive(params: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|value| *value > 0) {
        params.push((key.to_owned(), value.to_string()));
    }
}

fn push_repeated(params: &mut Vec<(String, String)>, key: &str, values: Option<&[String]>) {
    for value in values.unwrap_or_default() {
        params.push((key.to_owned(), value.clone()));
    }
}
