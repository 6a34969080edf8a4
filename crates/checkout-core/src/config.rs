//! # Checkout Configuration
//!
//! Merchant-side configuration for a checkout attempt: callback URL,
//! branding mode, integration type, and the credential set that goes with
//! the integration type.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// Branding mode for the hosted checkout page.
///
/// When enabled (the default), the merchant name displays above the payment
/// channels and the branded `/pay` route is used; when disabled the
/// unbranded `/pay/direct` route is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branding {
    Enabled,
    Disabled,
}

impl Branding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branding::Enabled => "enabled",
            Branding::Disabled => "disabled",
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Branding::Enabled
    }
}

/// Distinguishes merchants calling from the provider's own internal systems
/// (bearer-token auth) from external third-party merchants (merchant-account
/// plus basic auth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationType {
    Internal,
    External,
}

impl IntegrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationType::Internal => "Internal",
            IntegrationType::External => "External",
        }
    }
}

/// Configuration for a checkout attempt.
///
/// Exactly one credential set is expected populated, selected by
/// `integration_type`: internal integrations carry branch ID, business ID
/// and bearer token; external integrations carry merchant account and basic
/// auth. Use [`CheckoutConfig::internal`] / [`CheckoutConfig::external`] to
/// build a config with the right set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Branding mode; absent means enabled and is omitted from the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,

    /// URL receiving server-side payment notifications
    pub callback_url: String,

    /// The integration type
    pub integration_type: IntegrationType,

    /// Branch ID (internal integrations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,

    /// Business ID (internal integrations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,

    /// Bearer token of the paying user (internal integrations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    /// Merchant account number (external integrations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<u64>,

    /// Basic authentication token (external integrations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<String>,
}

impl CheckoutConfig {
    /// Create a config for an internal integration
    pub fn internal(
        callback_url: impl Into<String>,
        branch_id: impl Into<String>,
        business_id: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            branding: None,
            callback_url: callback_url.into(),
            integration_type: IntegrationType::Internal,
            branch_id: Some(branch_id.into()),
            business_id: Some(business_id.into()),
            bearer_token: Some(bearer_token.into()),
            merchant_account: None,
            basic_auth: None,
        }
    }

    /// Create a config for an external integration
    pub fn external(
        callback_url: impl Into<String>,
        merchant_account: u64,
        basic_auth: impl Into<String>,
    ) -> Self {
        Self {
            branding: None,
            callback_url: callback_url.into(),
            integration_type: IntegrationType::External,
            branch_id: None,
            business_id: None,
            bearer_token: None,
            merchant_account: Some(merchant_account),
            basic_auth: Some(basic_auth.into()),
        }
    }

    /// Builder: set the branding mode explicitly
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = Some(branding);
        self
    }

    /// True when the unbranded `/pay/direct` route should be used
    pub fn branding_disabled(&self) -> bool {
        self.branding == Some(Branding::Disabled)
    }

    /// Validate that the credential set required by the integration type is
    /// populated. Offered to hosts; the embed path does not enforce it.
    pub fn validate(&self) -> CheckoutResult<()> {
        if self.callback_url.is_empty() {
            return Err(CheckoutError::Configuration(
                "callbackUrl must not be empty".to_string(),
            ));
        }

        match self.integration_type {
            IntegrationType::Internal => {
                let required = [
                    ("branchId", self.branch_id.is_some()),
                    ("businessId", self.business_id.is_some()),
                    ("bearerToken", self.bearer_token.is_some()),
                ];
                for (field, present) in required {
                    if !present {
                        return Err(CheckoutError::MissingCredential {
                            integration: "Internal",
                            field,
                        });
                    }
                }
            }
            IntegrationType::External => {
                if self.merchant_account.is_none() {
                    return Err(CheckoutError::MissingCredential {
                        integration: "External",
                        field: "merchantAccount",
                    });
                }
                if self.basic_auth.is_none() {
                    return Err(CheckoutError::MissingCredential {
                        integration: "External",
                        field: "basicAuth",
                    });
                }
            }
        }

        Ok(())
    }
}
