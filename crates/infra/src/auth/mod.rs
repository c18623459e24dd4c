//! Request authentication adapters

pub mod token;

pub use token::TokenAuthenticator;
