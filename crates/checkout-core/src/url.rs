//! # Checkout URL Builder
//!
//! Derives the hosted checkout URL from a purchase and config. The URL is a
//! pure function of its inputs: same inputs, byte-identical output.

use crate::config::CheckoutConfig;
use crate::purchase::PurchaseInfo;

/// Route for the branded checkout page
pub const PAY_PATH: &str = "/pay";

/// Route for the unbranded (direct) checkout page
pub const DIRECT_PAY_PATH: &str = "/pay/direct";

/// Build the full checkout URL for a purchase.
///
/// Purchase and config fields merge into one query string with a pinned
/// field order: `amount`, `purchaseDescription`, `customerPhoneNumber`,
/// `clientReference`, then `branding`, `callbackUrl`, `integrationType`,
/// `branchId`, `businessId`, `bearerToken`, `merchantAccount`, `basicAuth`.
/// Unset optional fields are dropped entirely; every value is
/// percent-encoded. The `/pay/direct` route is selected only when branding
/// is explicitly disabled.
pub fn build_checkout_url(
    purchase: &PurchaseInfo,
    config: &CheckoutConfig,
    base_url: &str,
) -> String {
    let mut params: Vec<(&str, String)> = vec![
        ("amount", purchase.amount.to_string()),
        ("purchaseDescription", purchase.purchase_description.clone()),
        (
            "customerPhoneNumber",
            purchase.customer_phone_number.clone(),
        ),
        ("clientReference", purchase.client_reference.clone()),
    ];

    if let Some(branding) = config.branding {
        params.push(("branding", branding.as_str().to_string()));
    }
    params.push(("callbackUrl", config.callback_url.clone()));
    params.push((
        "integrationType",
        config.integration_type.as_str().to_string(),
    ));
    if let Some(ref branch_id) = config.branch_id {
        params.push(("branchId", branch_id.clone()));
    }
    if let Some(ref business_id) = config.business_id {
        params.push(("businessId", business_id.clone()));
    }
    if let Some(ref bearer_token) = config.bearer_token {
        params.push(("bearerToken", bearer_token.clone()));
    }
    if let Some(merchant_account) = config.merchant_account {
        params.push(("merchantAccount", merchant_account.to_string()));
    }
    if let Some(ref basic_auth) = config.basic_auth {
        params.push(("basicAuth", basic_auth.clone()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let path = if config.branding_disabled() {
        DIRECT_PAY_PATH
    } else {
        PAY_PATH
    };

    format!("{}{}?{}", base_url, path, query)
}
