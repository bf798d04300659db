//! Wallet, contract and storage services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - Campaign image upload to web3.storage
//! - [`wallet`] - Celo wallet extension integration (Celo extension, MetaMask)
//! - [`minter`] - Campaign minter contract calls
//!
//! # JavaScript Bindings
//!
//! The services use JavaScript bindings located in `src/js/`:
//! - `wallet.js` - Injected provider / ContractKit session
//! - `minter.js` - web3 contract instance and transactions
//! - `storage.js` - web3.storage SDK

pub mod minter;
pub mod upload;
pub mod wallet;

pub use minter::*;
pub use upload::*;
pub use wallet::*;
