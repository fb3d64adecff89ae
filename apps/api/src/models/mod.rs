pub mod analysis;
pub mod document;
pub mod record;
pub mod user;
