use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("AIRLINE_TICKET_SALE_API_BIND_ADDRESS").unwrap()
}

pub fn tickets_url() -> String {
    format!("http://{}/api/tickets", address())
}

pub async fn response_json(response: reqwest::Response) -> serde_json::Value {
    let body = response.bytes().await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
