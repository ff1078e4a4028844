mod deposit;
mod initiate_validator_exit;
mod penalize_validator;

pub use deposit::process_deposit;
pub use initiate_validator_exit::initiate_validator_exit;
pub use penalize_validator::penalize_validator;
