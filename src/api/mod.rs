//! HTTP API module for the HR dashboard.
//!
//! This module provides the REST endpoints for employee CRUD, id
//! generation, and the dashboard statistics views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeQuery, EmployeeRequest};
pub use response::{
    ApiError, ApiErrorResponse, CreatedResponse, HealthResponse, MessageResponse,
    NextIdResponse, UpdatedResponse,
};
pub use state::AppState;
