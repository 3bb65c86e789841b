//! # Validate Address Use Case
//!
//! Checks an address for deliverability with the provider.

use crate::application::error::ApplicationResult;
use crate::domain::entities::AddressVerification;
use crate::domain::value_objects::Address;
use crate::infrastructure::carriers::traits::ShippingProvider;
use std::sync::Arc;
use tracing::info;

/// Use case for address validation.
#[derive(Debug)]
pub struct ValidateAddressUseCase {
    provider: Arc<dyn ShippingProvider>,
}

impl ValidateAddressUseCase {
    /// Creates a new ValidateAddressUseCase.
    #[must_use]
    pub fn new(provider: Arc<dyn ShippingProvider>) -> Self {
        Self { provider }
    }

    /// Executes the use case.
    ///
    /// An undeliverable address is a successful result with
    /// `verified == false`.
    ///
    /// # Errors
    ///
    /// - Validation error if street1 or ZIP is missing
    /// - Provider errors
    #[tracing::instrument(skip_all, fields(zip = %address.zip))]
    pub async fn execute(&self, address: Address) -> ApplicationResult<AddressVerification> {
        address.validate_for_verification()?;

        let verification = self.provider.verify_address(&address).await?;
        info!(
            verified = verification.verified,
            issues = verification.errors.len(),
            "address checked"
        );
        Ok(verification)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::MockProvider;
    use crate::domain::entities::VerificationIssue;
    use crate::infrastructure::carriers::error::ProviderError;

    fn address() -> Address {
        Address::street("417 Montgomery St", "San Francisco", "CA", "94104")
    }

    #[tokio::test]
    async fn returns_provider_verdict() {
        let mut provider = MockProvider::with_rates(vec![]);
        provider.verification = Ok(AddressVerification::rejected(
            address(),
            vec![VerificationIssue {
                code: Some("E.ADDRESS.NOT_FOUND".to_string()),
                field: Some("address".to_string()),
                message: "Address not found".to_string(),
            }],
        ));
        let use_case = ValidateAddressUseCase::new(Arc::new(provider));

        let verification = use_case.execute(address()).await.unwrap();
        assert!(!verification.verified);
        assert_eq!(verification.errors.len(), 1);
    }

    #[tokio::test]
    async fn requires_street_and_zip() {
        let provider = Arc::new(MockProvider::with_rates(vec![]));
        let use_case = ValidateAddressUseCase::new(provider.clone());

        let mut no_street = address();
        no_street.street1 = None;
        assert!(use_case.execute(no_street).await.unwrap_err().is_validation());

        let mut no_zip = address();
        no_zip.zip = String::new();
        assert!(use_case.execute(no_zip).await.unwrap_err().is_validation());

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_authentication_failure_surfaces() {
        let use_case = ValidateAddressUseCase::new(Arc::new(MockProvider::failing(
            ProviderError::authentication("bad key"),
        )));
        assert!(use_case.execute(address()).await.unwrap_err().is_unauthorized());
    }
}
