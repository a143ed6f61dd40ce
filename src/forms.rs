pub mod lead_intake;
pub use lead_intake::LeadIntakeForm;
