use pushpad::{PushpadClient, SubscriptionCount};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PushpadClient::from_env()?;

    let request = SubscriptionCount {
        tags: std::env::var("PUSHPAD_TAG").ok().map(|tag| vec![tag]),
        ..Default::default()
    };
    let count = client.count_subscriptions(request).await?;
    println!("subscriptions: {count}");

    Ok(())
}
