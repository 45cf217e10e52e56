use pushpad::PushpadClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PushpadClient::from_env()?;

    for project in client.list_projects().await? {
        println!(
            "{} name={:?} website={:?} sender={:?}",
            project.id, project.name, project.website, project.sender_id
        );
    }

    Ok(())
}
