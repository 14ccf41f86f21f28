pub const CODE: &str = "laybuy_payment";
pub const DEFAULT_PATH_PATTERN: &str = "payment/{method}/{field}";

pub const KEY_ACTIVE: &str = "active";
pub const KEY_USE_SANDBOX: &str = "sandbox";
pub const KEY_MIN_ORDER_TOTAL: &str = "min_order_total";
pub const KEY_MAX_ORDER_TOTAL: &str = "max_order_total";
pub const KEY_PAYMENT_ACTION: &str = "payment_action";
pub const KEY_TITLE: &str = "title";
pub const KEY_MERCHANT_ID: &str = "merchant_id";
pub const KEY_API_KEY: &str = "merchant_api_key";
pub const KEY_SHOW_IN_PRODUCT_PAGE: &str = "show_in_product_page";
pub const KEY_SHOW_IN_CATEGORY_PAGE: &str = "show_in_category_page";
pub const KEY_SHOW_IN_CART_PAGE: &str = "show_in_cart_page";
pub const KEY_SHOW_FULL_LOGO: &str = "show_full_logo";

pub const API_ENDPOINT_LIVE: &str = "https://api.laybuy.com";
pub const API_ENDPOINT_SANDBOX: &str = "https://sandbox-api.laybuy.com";

pub const API_ORDER_CREATE: &str = "/order/create";
pub const API_ORDER_CONFIRM: &str = "/order/confirm";
pub const API_ORDER_CANCEL: &str = "/order/cancel";
pub const API_ORDER_REFUND: &str = "/order/refund";
pub const API_ORDER_CHECK: &str = "/order/merchant";

pub const LAYBUY_SUCCESS: &str = "SUCCESS";
pub const LAYBUY_FAILURE: &str = "ERROR";
pub const LAYBUY_CANCELLED: &str = "CANCELLED";

/// Label used by the host when it stores the provider's order id on an order.
pub const LAYBUY_FIELD_REFERENCE_ORDER_ID: &str = "Reference Order Id";

pub const SUPPORTED_CURRENCY_CODES: [&str; 3] = ["NZD", "AUD", "GBP"];

pub const FULL_LOGO: &str = "logo/full.svg";
pub const SMALL_LOGO: &str = "logo/small.svg";
pub const ASSET_URL: &str = "https://integration-assets.laybuy.com/magento1_laybuy/";
