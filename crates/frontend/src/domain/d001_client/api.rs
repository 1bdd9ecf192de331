use contracts::domain::d001_client::Client;
use gloo_net::http::Request;
use uuid::Uuid;

/// Fetch all clients
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get("/api/domain/clients")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch clients: {}", response.status()));
    }

    response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete client
pub async fn delete_client(id: Uuid) -> Result<(), String> {
    let response = Request::delete(&format!("/api/domain/clients/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete client: {}", response.status()));
    }
    Ok(())
}
