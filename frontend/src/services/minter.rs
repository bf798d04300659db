//! Minter contract interaction service.
//!
//! Uses the ContractKit SDK directly via JavaScript for signing and submitting.
//! Every state-changing call goes through the wallet's action executor so the
//! extension can prompt the user for each transaction.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::BLOCKCHAIN_RPC;
use crate::services::wallet::ActionExecutor;
use crate::types::{from_wei, to_wei, AppError, AppResult, Campaign, DraftCampaign};

/// Handle to the deployed campaign minter contract.
///
/// Wraps the web3 contract instance created on the JS side.
#[derive(Debug, Clone)]
pub struct MinterContract {
    handle: JsValue,
}

impl MinterContract {
    /// Instantiate the contract against the configured RPC endpoint.
    pub async fn connect() -> AppResult<Self> {
        let promise = get_minter_contract_js(BLOCKCHAIN_RPC);
        let handle = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        log::info!("📜 Minter contract ready");
        Ok(Self { handle })
    }

    /// Fetch every minted campaign.
    pub async fn fetch_campaigns(&self) -> AppResult<Vec<Campaign>> {
        let promise = get_campaigns_js(&self.handle);
        let js_result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        let campaigns: Vec<Campaign> = serde_wasm_bindgen::from_value(js_result)
            .map_err(|e| AppError::Contract(format!("Failed to parse campaigns: {}", e)))?;

        log::info!("📦 Fetched {} campaigns", campaigns.len());
        Ok(campaigns)
    }

    /// Mint a new campaign NFT from a completed draft.
    pub async fn create_campaign(
        &self,
        executor: &ActionExecutor,
        draft: &DraftCampaign,
    ) -> AppResult<()> {
        let draft_js = serde_wasm_bindgen::to_value(draft)
            .map_err(|e| AppError::Contract(format!("Failed to serialize draft: {}", e)))?;

        log::info!("📤 Minting campaign '{}'...", draft.name);

        let promise = create_campaign_js(&self.handle, executor.as_js(), &draft_js);
        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        log::info!("✅ Campaign '{}' minted", draft.name);
        Ok(())
    }

    /// Donate `amount` CELO to the campaign with id `campaign_id`.
    ///
    /// On success the contract's new raised-funds total is fed through
    /// `on_raised` (in display units) so the card can refresh its counter.
    /// The id is passed through as typed; the contract rejects unknown ids.
    pub async fn donate(
        &self,
        executor: &ActionExecutor,
        amount: &str,
        on_raised: impl Fn(f64),
        campaign_id: &str,
    ) -> AppResult<()> {
        let wei = to_wei(amount)?;

        log::info!("📤 Donating {} CELO to campaign {}...", amount, campaign_id);

        let promise = donate_js(
            &self.handle,
            executor.as_js(),
            &wei.to_string(),
            campaign_id,
        );
        let js_result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        on_raised(parse_wei_total(js_result.as_string())?);

        log::info!("✅ Donation confirmed, campaign {} total updated", campaign_id);
        Ok(())
    }

    /// Withdraw the raised funds of the campaign with id `campaign_id`.
    ///
    /// The contract enforces that only the owner can withdraw.
    pub async fn withdraw(&self, executor: &ActionExecutor, campaign_id: &str) -> AppResult<()> {
        log::info!("📤 Withdrawing funds of campaign {}...", campaign_id);

        let promise = withdraw_js(&self.handle, executor.as_js(), campaign_id);
        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        log::info!("✅ Withdrawal confirmed for campaign {}", campaign_id);
        Ok(())
    }
}

/// Decode the raised-funds total the donate bridge resolves with.
///
/// The bridge hands back the campaign's new wei total as a decimal
/// string; the returned value is what the card displays, with no
/// independent re-derivation.
fn parse_wei_total(raw: Option<String>) -> AppResult<f64> {
    let raw = raw.ok_or_else(|| AppError::Contract("Raised total is not a string".to_string()))?;
    let wei: u128 = raw
        .parse()
        .map_err(|e| AppError::Contract(format!("Failed to parse raised total: {}", e)))?;
    Ok(from_wei(wei))
}

/// Extract a readable message from a JS rejection value.
fn js_error_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

/// JavaScript functions from minter.js
#[wasm_bindgen(module = "/src/js/minter.js")]
extern "C" {
    #[wasm_bindgen(js_name = "getMinterContract")]
    fn get_minter_contract_js(rpc_url: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "getCampaigns")]
    fn get_campaigns_js(contract: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "createCampaign")]
    fn create_campaign_js(
        contract: &JsValue,
        perform_actions: &JsValue,
        draft: &JsValue,
    ) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "donateToCampaign")]
    fn donate_js(
        contract: &JsValue,
        perform_actions: &JsValue,
        amount_wei: &str,
        campaign_id: &str,
    ) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "withdrawFromCampaign")]
    fn withdraw_js(
        contract: &JsValue,
        perform_actions: &JsValue,
        campaign_id: &str,
    ) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wei_total_feeds_display_units() {
        // 5 CELO raised, reported in wei
        assert_eq!(
            parse_wei_total(Some("5000000000000000000".to_string())).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_parse_wei_total_rejects_missing_or_garbage() {
        assert!(parse_wei_total(None).is_err());
        assert!(parse_wei_total(Some("not-a-number".to_string())).is_err());
    }
}
