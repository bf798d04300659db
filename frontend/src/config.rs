//! Application configuration.
//!
//! Centralized configuration for the GiveCelo frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Blockchain RPC endpoint.
///
/// HTTPS URL for the Celo Alfajores node (Forno).
pub const BLOCKCHAIN_RPC: &str = "https://alfajores-forno.celo-testnet.org";

/// Application name for wallet connection.
///
/// Displayed in wallet extension popups.
pub const APP_NAME: &str = "GiveCelo";

/// Ticker symbol of the native currency.
pub const NATIVE_SYMBOL: &str = "CELO";

/// Decimals of the native currency.
///
/// 1 CELO = 10^18 wei.
pub const NATIVE_DECIMALS: u32 = 18;

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_LIFETIME_MS: u32 = 5_000;
