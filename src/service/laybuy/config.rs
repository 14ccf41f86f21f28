use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::client::{encryptor::Encryptor, scope_config::ScopeConfig};

use super::constants::{
    ASSET_URL, CODE, DEFAULT_PATH_PATTERN, FULL_LOGO, KEY_ACTIVE, KEY_API_KEY,
    KEY_MAX_ORDER_TOTAL, KEY_MERCHANT_ID, KEY_MIN_ORDER_TOTAL, KEY_PAYMENT_ACTION,
    KEY_SHOW_FULL_LOGO, KEY_SHOW_IN_CART_PAGE, KEY_SHOW_IN_CATEGORY_PAGE,
    KEY_SHOW_IN_PRODUCT_PAGE, KEY_TITLE, KEY_USE_SANDBOX, SMALL_LOGO, SUPPORTED_CURRENCY_CODES,
};
use super::StoreId;

/// Typed, store-scoped view over the host configuration for the Laybuy
/// payment method.
#[derive(Clone)]
pub struct Config {
    scope_config: Arc<dyn ScopeConfig>,
    encryptor: Arc<dyn Encryptor>,
    method_code: String,
    path_pattern: String,
}

pub fn path_for(path_pattern: &str, method_code: &str, field: &str) -> String {
    path_pattern
        .replace("{method}", method_code)
        .replace("{field}", field)
}

/// Loose truthiness of a stored flag: unset, empty, "0" and "false" are off.
fn is_flag_set(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

impl Config {
    pub fn new(scope_config: Arc<dyn ScopeConfig>, encryptor: Arc<dyn Encryptor>) -> Self {
        Self::with_method(scope_config, encryptor, CODE, DEFAULT_PATH_PATTERN)
    }

    pub fn with_method(
        scope_config: Arc<dyn ScopeConfig>,
        encryptor: Arc<dyn Encryptor>,
        method_code: &str,
        path_pattern: &str,
    ) -> Self {
        Config {
            scope_config,
            encryptor,
            method_code: method_code.to_string(),
            path_pattern: path_pattern.to_string(),
        }
    }

    pub fn path(&self, field: &str) -> String {
        path_for(&self.path_pattern, &self.method_code, field)
    }

    fn get_value(&self, field: &str, store_id: Option<StoreId>) -> Option<String> {
        self.scope_config.get_value(&self.path(field), store_id)
    }

    fn get_non_empty(&self, field: &str, store_id: Option<StoreId>) -> Option<String> {
        self.get_value(field, store_id).filter(|v| !v.is_empty())
    }

    fn get_flag(&self, field: &str, store_id: Option<StoreId>) -> bool {
        is_flag_set(self.get_value(field, store_id).as_deref())
    }

    fn get_amount(&self, field: &str, store_id: Option<StoreId>) -> Option<BigDecimal> {
        let raw = self.get_non_empty(field, store_id)?;
        match BigDecimal::from_str(raw.trim()) {
            Ok(amount) => Some(amount),
            Err(e) => {
                tracing::warn!(
                    "ignoring invalid {} value {:?} for store {:?}: {}",
                    field,
                    raw,
                    store_id,
                    e
                );
                None
            }
        }
    }

    pub fn is_active(&self, store_id: Option<StoreId>) -> bool {
        self.get_flag(KEY_ACTIVE, store_id)
    }

    pub fn use_sandbox(&self, store_id: Option<StoreId>) -> bool {
        self.get_flag(KEY_USE_SANDBOX, store_id)
    }

    pub fn merchant_id(&self, store_id: Option<StoreId>) -> Option<String> {
        self.get_non_empty(KEY_MERCHANT_ID, store_id)
    }

    /// Returns the decrypted API key. An unset or empty stored value is
    /// returned as `None` without touching the encryptor.
    pub fn api_key(&self, store_id: Option<StoreId>) -> Option<String> {
        self.get_non_empty(KEY_API_KEY, store_id)
            .map(|ciphertext| self.encryptor.decrypt(&ciphertext))
    }

    pub fn title(&self, store_id: Option<StoreId>) -> Option<String> {
        self.get_non_empty(KEY_TITLE, store_id)
    }

    pub fn payment_action(&self, store_id: Option<StoreId>) -> Option<String> {
        self.get_non_empty(KEY_PAYMENT_ACTION, store_id)
    }

    pub fn min_order_total(&self, store_id: Option<StoreId>) -> Option<BigDecimal> {
        self.get_amount(KEY_MIN_ORDER_TOTAL, store_id)
    }

    pub fn max_order_total(&self, store_id: Option<StoreId>) -> Option<BigDecimal> {
        self.get_amount(KEY_MAX_ORDER_TOTAL, store_id)
    }

    /// Checks `total` against the configured bounds, both inclusive. A
    /// missing bound does not restrict.
    pub fn is_order_total_allowed(&self, total: &BigDecimal, store_id: Option<StoreId>) -> bool {
        let above_min = self
            .min_order_total(store_id)
            .map_or(true, |min| *total >= min);
        let below_max = self
            .max_order_total(store_id)
            .map_or(true, |max| *total <= max);
        above_min && below_max
    }

    pub fn show_in_product_page(&self, store_id: Option<StoreId>) -> bool {
        self.get_flag(KEY_SHOW_IN_PRODUCT_PAGE, store_id)
    }

    pub fn show_in_category_page(&self, store_id: Option<StoreId>) -> bool {
        self.get_flag(KEY_SHOW_IN_CATEGORY_PAGE, store_id)
    }

    pub fn show_in_cart_page(&self, store_id: Option<StoreId>) -> bool {
        self.get_flag(KEY_SHOW_IN_CART_PAGE, store_id)
    }

    pub fn logo(&self, store_id: Option<StoreId>) -> &'static str {
        if self.get_flag(KEY_SHOW_FULL_LOGO, store_id) {
            FULL_LOGO
        } else {
            SMALL_LOGO
        }
    }

    pub fn asset_url(path: &str) -> String {
        format!("{}{}", ASSET_URL, path)
    }

    pub fn is_currency_supported(currency_code: &str) -> bool {
        SUPPORTED_CURRENCY_CODES
            .iter()
            .any(|code| code.eq_ignore_ascii_case(currency_code.trim()))
    }
}
