use std::io;

use pushpad::{AuthToken, signature_for};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PUSHPAD_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHPAD_AUTH_TOKEN environment variable is required",
        )
    })?;
    let uid = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "usage: signature <uid>")
    })?;

    println!("{}", signature_for(&AuthToken::new(token)?, &uid));

    Ok(())
}
