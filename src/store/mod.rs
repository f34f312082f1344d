//! Employee storage.
//!
//! The store sits behind [`EmployeeRepository`], one async call per logical
//! query. [`InMemoryEmployeeRepository`] is the bundled implementation; it
//! keeps records in insertion order and can be seeded from a YAML file.

mod id;
mod memory;
mod seed;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Employee, EmploymentStatus};

pub use id::IdScheme;
pub use memory::InMemoryEmployeeRepository;
pub use seed::load_seed;

/// Access to the set of employee records.
///
/// Lookups by id fail with `EmployeeNotFound`; creating an id that already
/// exists fails with `DuplicateEmployee`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns every employee in storage order.
    async fn fetch_all(&self) -> EngineResult<Vec<Employee>>;

    /// Returns the employee with the given id.
    async fn fetch_by_id(&self, id: &str) -> EngineResult<Employee>;

    /// Returns employees whose department string or department key equals
    /// `department`.
    async fn fetch_by_department(&self, department: &str) -> EngineResult<Vec<Employee>>;

    /// Returns employees holding the given status.
    async fn fetch_by_status(&self, status: EmploymentStatus) -> EngineResult<Vec<Employee>>;

    /// Stores a new employee and returns it as stored.
    async fn create(&self, employee: Employee) -> EngineResult<Employee>;

    /// Stores a new employee under the next free id and returns it as
    /// stored. The id is chosen and inserted in one step, so concurrent
    /// callers never receive the same id.
    async fn create_with_next_id(&self, employee: Employee) -> EngineResult<Employee>;

    /// Replaces the employee with the same id and returns it as stored.
    async fn update(&self, employee: Employee) -> EngineResult<Employee>;

    /// Removes the employee with the given id.
    async fn delete(&self, id: &str) -> EngineResult<()>;

    /// Returns the id the next created employee should receive.
    async fn next_id(&self) -> EngineResult<String>;
}
