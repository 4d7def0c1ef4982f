use crate::config::AppConfig;
use crate::models::{CustomerFields, Intent, Reply};
use crate::services::intent::Classifier;
use crate::store::Store;

const PRICE_LIST: &str = "📋 हमारे Rates:\n\n👔 Shirt: ₹800\n👖 Pant: ₹600\n🤵 Full Suit: ₹2,500\n👕 Kurta: ₹700\n\n⏰ Delivery: 7 days\n⚡ Urgent (3 days): +₹200\n\nOrder देना चाहते हैं? 😊";

const ORDER_STATUS_PROMPT: &str = "📦 Order Status Check:\n\nकृपया बताइए:\n1️⃣ Order Number (जैसे: ORD123)\n2️⃣ या Mobile Number\n\nमैं तुरंत status check कर दूंगा!";

const NO_ORDER_NUMBER: &str = "🔎 मुझे order number नहीं मिला!\n\nकृपया ऐसे भेजिए: ORD123";

const APPOINTMENT_SLOTS: &str = "📅 Appointment Booking:\n\n✅ Available Slots Tomorrow:\n\n🌅 Morning: 10:00 AM, 11:00 AM\n🌞 Afternoon: 2:00 PM, 3:00 PM\n🌆 Evening: 5:00 PM, 6:30 PM\n\nकौन सा slot चुनेंगे?";

const MEASUREMENT_GUIDE: &str = "📏 Measurements:\n\n👔 Shirt:\n• Chest, Shoulder, Length, Sleeve\n\n👖 Pant:\n• Waist, Length, Hip\n\nएक-एक करके बताइए!";

const MAIN_MENU: &str = "💰 Prices\n📦 Order Status\n📅 Appointment\n📏 Measurements\n📍 Location";

/// Combined intent classifier and response generator. Replies are canned
/// bilingual templates; the only state it touches is the store, for order
/// lookups and name learning.
pub struct Agent {
    classifier: Classifier,
}

impl Agent {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    pub fn respond(
        &self,
        store: &Store,
        config: &AppConfig,
        phone: &str,
        message: &str,
    ) -> anyhow::Result<Reply> {
        let intent = self.classifier.classify(message);

        tracing::debug!(phone = %phone, intent = ?intent, "classified message");

        let reply = match intent {
            Intent::PriceInquiry => Reply::text(PRICE_LIST),
            Intent::OrderStatusMenu => Reply::text(ORDER_STATUS_PROMPT),
            Intent::OrderLookup { order_id } => order_lookup(store, config, order_id),
            Intent::Appointment => Reply::text(APPOINTMENT_SLOTS),
            Intent::Measurements => Reply::text(MEASUREMENT_GUIDE),
            Intent::Address => Reply::text(shop_address(config)),
            Intent::Unknown => fallback(store, phone, message),
        };

        Ok(reply)
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

fn order_lookup(store: &Store, config: &AppConfig, order_id: Option<String>) -> Reply {
    let Some(order_id) = order_id else {
        // Digit run with no ORD<n> token in the message.
        return Reply::text(NO_ORDER_NUMBER);
    };

    match store.get_order(&order_id) {
        Some(order) => Reply::text(format!(
            "✅ Order Found!\n\n📦 Order #{}\n💰 Amount: ₹{}\n🎯 Status: {}",
            order.order_id,
            order.amount.unwrap_or(1400),
            order.status,
        )),
        None => Reply::text(format!(
            "❌ Order नहीं मिला!\n\nCall करें: {}",
            config.shop_phone
        )),
    }
}

fn shop_address(config: &AppConfig) -> String {
    format!(
        "📍 Shop Address:\n\n🏪 {}\n{}\n\n📞 {}\n\n⏰ Mon-Sat: 10 AM - 8 PM",
        config.shop_name, config.shop_address, config.shop_phone,
    )
}

/// No rule matched. A short message from a customer with no name on file is
/// taken to be their name; anything else gets the help menu.
fn fallback(store: &Store, phone: &str, message: &str) -> Reply {
    let has_name = store
        .get_customer(phone)
        .and_then(|c| c.name)
        .is_some_and(|n| !n.is_empty());

    let len = message.chars().count();
    if !has_name && len > 2 && len < 30 {
        store.save_customer(
            phone,
            CustomerFields {
                name: Some(message.to_string()),
                ..Default::default()
            },
        );
        return Reply::text(format!(
            "बहुत खूब {message} जी! 🙏\n\nकैसे help कर सकता हूँ?\n\n{MAIN_MENU}"
        ));
    }

    Reply::text(format!("मुझे समझ नहीं आया 🤔\n\nमैं इनमें help कर सकता हूँ:\n\n{MAIN_MENU}"))
}
