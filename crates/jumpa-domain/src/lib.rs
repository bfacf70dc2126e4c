// jumpa-domain library entry point
pub mod account;
pub mod contact;
pub mod credentials;
pub mod error;
pub mod keypad;
pub mod pin;
pub mod wallet;
pub use account::BankAccountNumber;
pub use contact::{EmailAddress, PhoneNumber};
pub use credentials::Password;
pub use error::DomainError;
pub use keypad::AmountKeypad;
pub use pin::{Pin, PinPad, PIN_LENGTH};
pub use wallet::{CryptoChain, WalletAddress};
