//! Input model and submit plan of the create customer dialog.

use contracts::domain::a001_customer::aggregate::Address;
use contracts::domain::a001_customer::request::{AddCustomerAddressDto, CreateCustomerDto};
use serde_json::{Map, Value};

use crate::shared::validation::{non_blank, validate_email};

/// One key/value row of the metadata editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// Raw input of the create customer form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub metadata: Vec<MetadataEntry>,
    pub address_first_name: String,
    pub address_last_name: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country_code: String,
    pub address_phone: String,
}

/// Metadata rows with a non-blank key; `None` when nothing is left.
pub fn submittable_metadata(entries: &[MetadataEntry]) -> Option<Map<String, Value>> {
    let map: Map<String, Value> = entries
        .iter()
        .filter_map(|entry| {
            non_blank(&entry.key).map(|key| (key, Value::String(entry.value.trim().to_string())))
        })
        .collect();
    (!map.is_empty()).then_some(map)
}

impl CustomerForm {
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// An address is sent only when its first line is filled in.
    pub fn has_address(&self) -> bool {
        non_blank(&self.address_1).is_some()
    }

    /// Validate the form and build the create request plus the optional
    /// address request.
    pub fn to_requests(&self) -> Result<(CreateCustomerDto, Option<AddCustomerAddressDto>), String> {
        if !validate_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }

        let customer = CreateCustomerDto {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: non_blank(&self.phone),
            metadata: submittable_metadata(&self.metadata),
        };

        if !self.has_address() {
            return Ok((customer, None));
        }

        let required = |value: &str, label: &str| {
            non_blank(value).ok_or_else(|| format!("{} is required for the address", label))
        };
        let address = Address {
            first_name: non_blank(&self.address_first_name),
            last_name: non_blank(&self.address_last_name),
            company: non_blank(&self.company),
            address_1: required(&self.address_1, "Address")?,
            address_2: non_blank(&self.address_2),
            city: required(&self.city, "City")?,
            province: non_blank(&self.province),
            postal_code: required(&self.postal_code, "Postal code")?,
            country_code: required(&self.country_code, "Country")?.to_lowercase(),
            phone: non_blank(&self.address_phone),
        };

        Ok((
            customer,
            Some(AddCustomerAddressDto {
                shipping_address: address,
            }),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    Create,
    AddAddress,
    Invite,
}

/// What already succeeded in earlier submit attempts of the same dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitProgress {
    pub customer_id: Option<String>,
    pub address_saved: bool,
}

impl SubmitProgress {
    /// Steps still to run, in order. A retry resumes at the step that failed
    /// and never creates the customer twice.
    pub fn remaining_steps(&self, has_address: bool) -> Vec<SubmitStep> {
        let mut steps = Vec::with_capacity(3);
        if self.customer_id.is_none() {
            steps.push(SubmitStep::Create);
        }
        if has_address && !self.address_saved {
            steps.push(SubmitStep::AddAddress);
        }
        steps.push(SubmitStep::Invite);
        steps
    }

    pub fn is_started(&self) -> bool {
        self.customer_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            email: " jan@example.com ".to_string(),
            first_name: "Jan".to_string(),
            last_name: "Jansen".to_string(),
            ..Default::default()
        }
    }

    fn entry(key: &str, value: &str) -> MetadataEntry {
        MetadataEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_pristine() {
        assert!(CustomerForm::default().is_pristine());
        assert!(!filled().is_pristine());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let form = CustomerForm {
            email: "jan@".to_string(),
            ..filled()
        };
        assert!(form.to_requests().is_err());
    }

    #[test]
    fn test_without_address() {
        let (dto, address) = filled().to_requests().unwrap();
        assert_eq!(dto.email, "jan@example.com");
        assert_eq!(dto.phone, None);
        assert_eq!(dto.metadata, None);
        assert!(address.is_none());
    }

    #[test]
    fn test_with_address() {
        let form = CustomerForm {
            address_1: "Damrak 1".to_string(),
            city: "Amsterdam".to_string(),
            postal_code: "1012 LG".to_string(),
            country_code: "NL".to_string(),
            ..filled()
        };
        let (_, address) = form.to_requests().unwrap();
        let address = address.unwrap().shipping_address;
        assert_eq!(address.address_1, "Damrak 1");
        assert_eq!(address.country_code, "nl");
        assert_eq!(address.company, None);
    }

    #[test]
    fn test_incomplete_address_rejected() {
        let form = CustomerForm {
            address_1: "Damrak 1".to_string(),
            ..filled()
        };
        let err = form.to_requests().unwrap_err();
        assert!(err.contains("City"));
    }

    #[test]
    fn test_metadata_skips_blank_keys() {
        let entries = vec![entry("dealer", " Fietsplus "), entry("  ", "ignored"), entry("vip", "")];
        let metadata = submittable_metadata(&entries).unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["dealer"], Value::String("Fietsplus".to_string()));
        assert_eq!(metadata["vip"], Value::String(String::new()));

        assert_eq!(submittable_metadata(&[entry("", "x")]), None);
        assert_eq!(submittable_metadata(&[]), None);
    }

    #[test]
    fn test_metadata_reaches_create_request() {
        let form = CustomerForm {
            metadata: vec![entry("source", "showroom")],
            ..filled()
        };
        let (dto, _) = form.to_requests().unwrap();
        let metadata = dto.metadata.unwrap();
        assert_eq!(metadata["source"], Value::String("showroom".to_string()));
    }

    #[test]
    fn test_fresh_submit_runs_every_step() {
        let progress = SubmitProgress::default();
        assert_eq!(
            progress.remaining_steps(true),
            vec![SubmitStep::Create, SubmitStep::AddAddress, SubmitStep::Invite]
        );
        assert_eq!(
            progress.remaining_steps(false),
            vec![SubmitStep::Create, SubmitStep::Invite]
        );
        assert!(!progress.is_started());
    }

    #[test]
    fn test_retry_after_address_failure_skips_create() {
        let progress = SubmitProgress {
            customer_id: Some("cus_01".to_string()),
            address_saved: false,
        };
        assert!(progress.is_started());
        assert_eq!(
            progress.remaining_steps(true),
            vec![SubmitStep::AddAddress, SubmitStep::Invite]
        );
    }

    #[test]
    fn test_retry_after_invite_failure_only_invites() {
        let progress = SubmitProgress {
            customer_id: Some("cus_01".to_string()),
            address_saved: true,
        };
        assert_eq!(progress.remaining_steps(true), vec![SubmitStep::Invite]);

        let without_address = SubmitProgress {
            customer_id: Some("cus_01".to_string()),
            address_saved: false,
        };
        assert_eq!(without_address.remaining_steps(false), vec![SubmitStep::Invite]);
    }
}
