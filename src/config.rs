use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub whatsapp_api_url: String,
    pub whatsapp_api_key: String,
    pub shop_name: String,
    pub shop_phone: String,
    pub shop_address: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            whatsapp_api_url: env::var("WHATSAPP_API_URL")
                .unwrap_or_else(|_| "https://api.interakt.ai/v1/public/message/".to_string()),
            whatsapp_api_key: env::var("WHATSAPP_API_KEY").unwrap_or_default(),
            shop_name: env::var("SHOP_NAME").unwrap_or_else(|_| "Sharma Tailors".to_string()),
            shop_phone: env::var("SHOP_PHONE").unwrap_or_else(|_| "+91 98765-43210".to_string()),
            shop_address: env::var("SHOP_ADDRESS")
                .unwrap_or_else(|_| "Shop No. 5, Malviya Nagar, Jaipur - 302017".to_string()),
        }
    }
}
