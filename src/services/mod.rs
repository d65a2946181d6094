pub mod balance_service;
pub mod feature_service;
pub mod history_service;
pub mod payment_service;
