//! UI Components for the GiveCelo application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet chip and disconnect
//! - [`Cover`] - Landing page shown while no wallet is connected
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`CampaignList`] - Campaign grid with the creation modal
//! - [`CampaignCard`] - One campaign with donate/withdraw actions
//! - [`AddCampaignModal`] - Form for minting a new campaign
//! - [`ToastStack`] - Success/error notifications
//! - [`Identicon`] - Address fingerprint avatar

mod add;
mod campaigns;
mod card;
mod cover;
mod footer;
mod header;
mod identicon;
mod notifications;

pub use add::*;
pub use campaigns::*;
pub use card::*;
pub use cover::*;
pub use footer::*;
pub use header::*;
pub use identicon::*;
pub use notifications::*;
