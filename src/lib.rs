// Declare all our modules
mod client;
mod error;
mod models;
pub mod parsers;
mod state;

// Publicly export the parts of our library that users will need
pub use client::{ApiClient, SelfServiceClient};
pub use error::{Result, ScraperError};
pub use models::*; // Exposes all structs like UserDetails, ResetPasswordRequest, etc.
pub use state::{OperationSnapshot, OperationState};
