use serde::{Deserialize, Serialize};

use crate::model::locale::Locale;
use crate::model::service::Service;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contacts {
    pub phone: String,
    pub instagram: String,
    pub address: String,
}

impl Contacts {
    pub fn phone_link(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn instagram_link(&self) -> String {
        format!("https://instagram.com/{}", self.instagram.trim_start_matches('@'))
    }

    pub fn map_link(&self) -> String {
        format!("https://maps.google.com/?q={}", self.address)
    }
}

impl Default for Contacts {
    fn default() -> Self {
        Self {
            phone: "+7 (495) 123-45-67".to_string(),
            instagram: "blackbeard.bshop".to_string(),
            address: "Москва, ул. Тверская, 1".to_string(),
        }
    }
}

/// Shop settings read from `config.json` in the data directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShopConfig {
    pub shop_name: String,
    pub locale: Locale,
    /// Month the calendar opens on, as `YYYY-MM`. Defaults to the current month.
    pub start_month: Option<String>,
    pub services: Vec<Service>,
    pub contacts: Contacts,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "Black Beard".to_string(),
            locale: Locale::Ru,
            start_month: None,
            services: vec![
                Service::new("Мужская стрижка", "2 500 ₽"),
                Service::new("Стрижка бороды", "1 500 ₽"),
                Service::new("Стрижка + борода", "3 500 ₽"),
                Service::new("Королевское бритьё", "2 000 ₽"),
                Service::new("Детская стрижка", "1 800 ₽"),
                Service::new("Камуфляж седины", "1 500 ₽"),
            ],
            contacts: Contacts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links() {
        let c = Contacts::default();
        assert_eq!(c.phone_link(), "tel:+74951234567");
        assert_eq!(c.instagram_link(), "https://instagram.com/blackbeard.bshop");
        assert!(c.map_link().starts_with("https://maps.google.com/?q="));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ShopConfig = serde_json::from_str(r#"{"locale": "en"}"#).unwrap();
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.shop_name, "Black Beard");
        assert_eq!(cfg.services.len(), 6);
        assert!(cfg.start_month.is_none());
    }
}
