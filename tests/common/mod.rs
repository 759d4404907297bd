pub mod fake;
pub mod helpers;
