//! UI control flows: each pairs one widget's behavior with the store
//! update discipline (mutate only after a successful round trip).

pub mod add_form;
pub mod checkout;
pub mod stepper;

pub use add_form::ProductAddForm;
pub use checkout::Checkout;
pub use stepper::{can_increase, next_decrement, QuantityStepper, Step, StepOutcome};
