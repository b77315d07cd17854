pub mod account_manager;
pub mod paths;

pub use account_manager::{AccountManager, MAX_CHECKING_ACCOUNTS, MAX_SAVINGS_ACCOUNTS};
