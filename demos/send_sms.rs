use std::io;

use infobip_sms::{
    AccountConfig, MessageText, OutboundMessage, PhoneNumber, SendResult, SmsClient,
};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let domain = required_env("INFOBIP_DOMAIN")?;
    let api_key = required_env("INFOBIP_API_KEY")?;
    let destination = required_env("SMS_DESTINATION")?;
    let text = std::env::var("SMS_TEXT")
        .unwrap_or_else(|_| "Hello from the infobip-sms demo.".to_owned());

    let client = SmsClient::new();
    let config = AccountConfig::new(domain, api_key)?;

    let phone = PhoneNumber::parse(None, destination)?;
    let message = OutboundMessage::to_phone_number(phone, MessageText::new(text)?);

    match client.send_message(&config, &message).await {
        SendResult::Sent(sent) => println!(
            "message_id: {}, status: {}, category: {}",
            sent.message_id, sent.status, sent.category
        ),
        SendResult::Failed(failure) => {
            println!("send failed ({:?}): {}", failure.kind, failure.error_message);
            if let Some(details) = failure.error_details {
                println!("details: {details}");
            }
        }
    }

    Ok(())
}
