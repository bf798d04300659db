//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Campaign Types** - On-chain campaign data and local drafts
//! - **Toast Types** - User-facing notifications
//! - **Currency Helpers** - CELO / wei conversion
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::NATIVE_DECIMALS;

// =============================================================================
// Campaign Types
// =============================================================================

/// A crowdfunding campaign as fetched from the minter contract.
///
/// Read-only from this layer's perspective: funds accounting lives in the
/// contract, the UI only reflects the latest fetched values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Token index of the campaign NFT
    pub index: u64,
    /// Address of the campaign creator
    pub owner: String,
    /// Campaign title
    pub name: String,
    /// Campaign description
    pub description: String,
    /// Content-address URI of the campaign image
    pub image: String,
    /// Funding goal, CELO-denominated
    pub goal: f64,
    /// Funds raised so far, in wei.
    ///
    /// Delivered as a decimal string from JS because wei amounts exceed
    /// the safe integer range of a JS number.
    #[serde(with = "wei_string")]
    pub funds_raised: u128,
}

impl Campaign {
    /// Raised funds in display units (CELO).
    pub fn raised_celo(&self) -> f64 {
        from_wei(self.funds_raised)
    }
}

/// Serde helper for wei amounts encoded as decimal strings.
mod wei_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u128>().map_err(de::Error::custom)
    }
}

/// A new campaign being assembled in the creation form.
///
/// Lives only as long as the modal instance; discarded on close or
/// successful submit, never persisted by this layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftCampaign {
    /// Campaign title
    pub name: String,
    /// Content-address URI, empty until the upload succeeds
    pub image: String,
    /// Campaign description
    pub description: String,
    /// Funding goal in CELO, kept as typed (string) form input
    pub goal: String,
    /// Connected address, filled in at submit time
    pub owner: String,
}

impl DraftCampaign {
    /// Whether the draft can be submitted.
    ///
    /// All four fields must be non-empty and the goal non-zero; no range
    /// or length validation beyond that.
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
            && !self.image.is_empty()
            && !self.description.is_empty()
            && self.goal.parse::<f64>().map(|g| g != 0.0).unwrap_or(false)
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Outcome flavor of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    /// Action completed
    Success,
    /// Action failed
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// A queued notification, auto-dismissed by the toast stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Queue-unique id, used to remove the toast after its lifetime
    pub id: u32,
    /// Success or error
    pub kind: ToastKind,
    /// User-facing message
    pub message: String,
}

// =============================================================================
// Currency Helpers
// =============================================================================

/// Convert a wei amount to display units (CELO).
pub fn from_wei(wei: u128) -> f64 {
    wei as f64 / 10f64.powi(NATIVE_DECIMALS as i32)
}

/// Parse a CELO-denominated decimal string into wei.
///
/// Accepts an optional fractional part of up to 18 digits.
pub fn to_wei(celo: &str) -> AppResult<u128> {
    let celo = celo.trim();
    let (whole, frac) = match celo.split_once('.') {
        Some((w, f)) => (w, f),
        None => (celo, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(AppError::Validation("empty amount".into()));
    }
    // Plain digits only; `u128::from_str` would wave through a leading `+`
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(frac) {
        return Err(AppError::Validation(format!("invalid amount: {}", celo)));
    }
    if frac.len() > NATIVE_DECIMALS as usize {
        return Err(AppError::Validation(format!(
            "more than {} fractional digits: {}",
            NATIVE_DECIMALS, celo
        )));
    }
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid amount: {}", celo)))?
    };
    let mut frac_wei: u128 = 0;
    if !frac.is_empty() {
        frac_wei = frac
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid amount: {}", celo)))?;
        frac_wei *= 10u128.pow(NATIVE_DECIMALS - frac.len() as u32);
    }
    whole
        .checked_mul(10u128.pow(NATIVE_DECIMALS))
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| AppError::Validation(format!("amount overflows: {}", celo)))
}

/// Shorten an address for display: first six and last four characters.
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// File upload failed.
    #[error("Upload error: {0}")]
    Upload(String),
    /// Wallet connection failed.
    #[error("Wallet error: {0}")]
    Wallet(String),
    /// Contract call failed.
    #[error("Contract error: {0}")]
    Contract(String),
    /// Invalid data format.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_deserialization() {
        // Shape returned by the ContractKit bridge
        let json = r#"{
            "index": 3,
            "owner": "0xA1b2C3d4E5f60718293a4B5c6D7e8F9012345678",
            "name": "Clean Water",
            "description": "Wells for the village",
            "image": "ipfs://bafy.../well.png",
            "goal": 100.0,
            "fundsRaised": "5000000000000000000"
        }"#;

        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.index, 3);
        assert_eq!(campaign.funds_raised, 5_000_000_000_000_000_000);
        assert_eq!(campaign.raised_celo(), 5.0);
    }

    #[test]
    fn test_campaign_rejects_non_numeric_raised() {
        let json = r#"{
            "index": 0,
            "owner": "0xA",
            "name": "x",
            "description": "y",
            "image": "z",
            "goal": 1.0,
            "fundsRaised": "not-a-number"
        }"#;
        assert!(serde_json::from_str::<Campaign>(json).is_err());
    }

    #[test]
    fn test_draft_submittable_requires_every_field() {
        let full = DraftCampaign {
            name: "Clean Water".into(),
            image: "ipfs://bafy.../well.png".into(),
            description: "Wells for the village".into(),
            goal: "100".into(),
            owner: String::new(),
        };
        assert!(full.is_submittable());

        for missing in ["name", "image", "description", "goal"] {
            let mut draft = full.clone();
            match missing {
                "name" => draft.name.clear(),
                "image" => draft.image.clear(),
                "description" => draft.description.clear(),
                _ => draft.goal.clear(),
            }
            assert!(!draft.is_submittable(), "submittable without {}", missing);
        }

        let zero_goal = DraftCampaign {
            goal: "0".into(),
            ..full
        };
        assert!(!zero_goal.is_submittable());
    }

    #[test]
    fn test_to_wei_whole_and_fractional() {
        assert_eq!(to_wei("1").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(to_wei("0.5").unwrap(), 500_000_000_000_000_000);
        assert_eq!(to_wei("2.25").unwrap(), 2_250_000_000_000_000_000);
        assert_eq!(to_wei(".1").unwrap(), 100_000_000_000_000_000);
        assert_eq!(to_wei("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_to_wei_rejects_garbage() {
        assert!(to_wei("").is_err());
        assert!(to_wei("abc").is_err());
        assert!(to_wei("1.0000000000000000001").is_err());
        assert!(to_wei("-1").is_err());
        // Signs hidden in either fragment must not slip through
        assert!(to_wei("+1").is_err());
        assert!(to_wei("1.+5").is_err());
        assert!(to_wei("1.-5").is_err());
    }

    #[test]
    fn test_from_wei_round_trip() {
        let wei = to_wei("12.5").unwrap();
        assert_eq!(from_wei(wei), 12.5);
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0xA1b2C3d4E5f60718293a4B5c6D7e8F9012345678"),
            "0xA1b2...5678"
        );
        assert_eq!(truncate_address("0xA1b2"), "0xA1b2");
    }
}
