use pushpad::{PushpadClient, SubscriptionList};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PushpadClient::from_env()?;

    let tags = std::env::var("PUSHPAD_TAG").ok().map(|tag| vec![tag]);
    let request = SubscriptionList {
        page: Some(1),
        per_page: Some(20),
        tags,
        ..Default::default()
    };

    let page = client.list_subscriptions(request).await?;
    println!("total: {:?}", page.total_count);
    for subscription in page.subscriptions {
        println!(
            "{} uid={:?} tags={:?}",
            subscription.id, subscription.uid, subscription.tags
        );
    }

    Ok(())
}
