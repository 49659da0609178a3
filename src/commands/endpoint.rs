//! Endpoint command implementation

use crate::{cli::EndpointArgs, mineplex::{EndpointOptions, MineplexClient}, Result};

/// Handle the endpoint command
pub async fn handle_endpoint(
    client: &MineplexClient,
    kind: &str,
    method: &str,
    args: EndpointArgs,
    url_only: bool,
) -> Result<()> {
    let options = EndpointOptions::from(args);

    if url_only {
        println!("{}", client.endpoint_url(kind, method, &options)?);
        return Ok(());
    }

    let response = client.call_endpoint(kind, method, &options).await?;
    eprintln!("{} {}", response.status, response.url);

    // Pretty-print JSON bodies, pass anything else through untouched
    match response.json::<serde_json::Value>() {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", response.body),
    }

    Ok(())
}
