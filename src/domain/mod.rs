pub mod account;

pub use account::{Account, AccountKind, DEFAULT_WITHDRAWAL_LIMIT};
