pub mod naming_service;
pub mod setup_service;

pub use naming_service::NamingCheckService;
pub use setup_service::{SetupReport, SetupService, StepOutcome, StepStatus};
