pub mod extract;
pub mod standards;
pub mod survey;
