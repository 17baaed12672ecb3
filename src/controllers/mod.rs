pub mod auth_controller;
pub mod vehicle_controller;
pub mod team_controller;
pub mod user_controller;
pub mod material_controller;
pub mod penalty_controller;
pub mod document_controller;
pub mod expense_controller;
pub mod maintenance_controller;
