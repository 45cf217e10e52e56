use pushpad::{NotificationCreate, PushpadClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads PUSHPAD_AUTH_TOKEN and PUSHPAD_PROJECT_ID.
    let client = PushpadClient::from_env()?;

    let body = std::env::var("PUSHPAD_MESSAGE")
        .unwrap_or_else(|_| "Hello from the pushpad demo.".to_owned());
    let mut notification = NotificationCreate::new(body)?;
    notification.title = Some("Pushpad demo".to_owned());
    if let Ok(uid) = std::env::var("PUSHPAD_UID") {
        notification.uids = Some(vec![uid]);
    }

    let created = client.send_notification(notification).await?;
    println!(
        "id: {}, scheduled: {:?}, uids: {:?}",
        created.id, created.scheduled, created.uids
    );

    Ok(())
}
