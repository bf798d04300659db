//! Wrapper for the Celo extension wallet and other injected providers.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::BLOCKCHAIN_RPC;
use crate::types::{AppError, AppResult};

/// Wallet-provided function that signs and submits contract calls
/// on behalf of the connected address.
///
/// Opaque JS handle; only ever passed back into the ContractKit bridge.
#[derive(Debug, Clone)]
pub struct ActionExecutor(JsValue);

impl ActionExecutor {
    /// Raw JS handle for the bridge functions.
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

/// A connected wallet session.
#[derive(Debug, Clone)]
pub struct WalletSession {
    pub address: String,
    pub executor: ActionExecutor,
}

/// Rust wrapper for the wallet connection (Celo extension, MetaMask, Valora via WalletConnect)
pub struct CeloWallet;

impl CeloWallet {
    /// Check whether a compatible injected provider exists
    pub fn is_available() -> bool {
        let window = web_sys::window().expect("no global window");

        // The Celo extension injects `celo`, MetaMask injects `ethereum`
        let has_injected = ["celo", "ethereum"].iter().any(|key| {
            js_sys::Reflect::get(&window, &JsValue::from_str(key))
                .map(|v| !v.is_null() && !v.is_undefined())
                .unwrap_or(false)
        });

        if has_injected {
            log::info!("✅ Injected wallet provider detected");
        } else {
            log::warn!("⚠️  No wallet provider found");
        }

        has_injected
    }

    /// Connect the wallet and return the active session.
    ///
    /// The session carries the connected address and the action executor
    /// used to sign donate/withdraw/create transactions.
    pub async fn connect() -> AppResult<WalletSession> {
        if !Self::is_available() {
            return Err(AppError::Wallet(
                "No wallet provider found. Please install the Celo extension wallet or MetaMask."
                    .to_string(),
            ));
        }

        log::info!("🔌 Connecting to wallet...");

        let promise = connect_wallet();
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to connect wallet: {:?}", e)))?;

        let address = js_sys::Reflect::get(&result, &JsValue::from_str("address"))
            .map_err(|e| AppError::Wallet(format!("Failed to get address: {:?}", e)))?
            .as_string()
            .ok_or_else(|| AppError::Wallet("Address is not a string".to_string()))?;

        let executor = js_sys::Reflect::get(&result, &JsValue::from_str("performActions"))
            .map_err(|e| AppError::Wallet(format!("Failed to get action executor: {:?}", e)))?;
        if executor.is_undefined() || executor.is_null() {
            return Err(AppError::Wallet(
                "Provider returned no action executor".to_string(),
            ));
        }

        log::info!("✅ Connected to wallet: {}", address);

        Ok(WalletSession {
            address,
            executor: ActionExecutor(executor),
        })
    }

    /// Get the native balance of `address` from the chain.
    pub async fn get_balance(address: &str) -> AppResult<WalletBalance> {
        let promise = get_balance_js(BLOCKCHAIN_RPC, address);
        let js_result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to get balance: {:?}", e)))?;

        serde_wasm_bindgen::from_value(js_result)
            .map_err(|e| AppError::Wallet(format!("Failed to parse balance: {}", e)))
    }

    /// Tear down the current session.
    pub async fn disconnect() -> AppResult<()> {
        let promise = disconnect_wallet();
        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to disconnect wallet: {:?}", e)))?;

        log::info!("👋 Wallet disconnected");
        Ok(())
    }
}

/// Wallet balance info
#[derive(Debug, Clone, Deserialize)]
pub struct WalletBalance {
    pub balance: f64,
    pub formatted: String,
}

/// Import of the JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "getWalletBalance")]
    fn get_balance_js(rpc_url: &str, wallet_address: &str) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_deserialization() {
        // Shape returned by the wallet.js bridge
        let json = r#"{ "balance": 12.34567, "formatted": "12.35" }"#;
        let balance: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.balance, 12.34567);
        assert_eq!(balance.formatted, "12.35");
    }
}
