//! Servicios de negocio
//!
//! Aquí vive la lógica que cruza varias tablas o necesita transacciones:
//! el ledger de materiales, las asignaciones de vehículos, las sanciones
//! y los informes. El CRUD simple va directo de controller a repositorio.

pub mod material_ledger_service;
pub mod assignment_service;
pub mod penalty_service;
pub mod report_service;
pub mod jwt_service;
