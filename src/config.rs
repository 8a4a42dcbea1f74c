//! Store configuration.

use serde::{Deserialize, Serialize};

/// Static configuration for a storefront session.
///
/// Carries the branding and destination values baked into the order
/// messages: the store name used in greeting lines and the WhatsApp
/// destination number for outbound links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store name used in message greetings.
    pub store_name: String,
    /// WhatsApp destination number (digits only, with country code).
    pub whatsapp_number: String,
}

impl StoreConfig {
    /// Create a new configuration.
    pub fn new(store_name: impl Into<String>, whatsapp_number: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            whatsapp_number: whatsapp_number.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("Infantes 3D", "34619029065")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "Infantes 3D");
        assert_eq!(config.whatsapp_number, "34619029065");
    }

    #[test]
    fn test_config_from_json() {
        let config: StoreConfig = serde_json::from_str(
            r#"{"store_name": "Mi Tienda", "whatsapp_number": "34600000000"}"#,
        )
        .unwrap();
        assert_eq!(config.store_name, "Mi Tienda");
        assert_eq!(config.whatsapp_number, "34600000000");
    }
}
