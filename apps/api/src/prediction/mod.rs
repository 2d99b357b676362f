// Salary prediction core.
// Feature adjustment and report building are pure; the model is the only
// injected collaborator and is reached through `SalaryPredictor`.

pub mod features;
pub mod handlers;
pub mod model;
pub mod report;
pub mod service;
pub mod validation;
