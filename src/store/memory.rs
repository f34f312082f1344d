//! In-memory employee repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmploymentStatus};

use super::{EmployeeRepository, IdScheme};

/// Keeps employees in a vector guarded by a tokio `RwLock`.
///
/// Records are returned in the order they were inserted.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
    ids: IdScheme,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository using the given id scheme.
    pub fn new(ids: IdScheme) -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
            ids,
        }
    }

    /// Creates a repository pre-populated with `employees`.
    ///
    /// Fails with `DuplicateEmployee` if two records share an id.
    pub fn with_employees(ids: IdScheme, employees: Vec<Employee>) -> EngineResult<Self> {
        for (i, employee) in employees.iter().enumerate() {
            if employees[..i].iter().any(|e| e.id == employee.id) {
                return Err(EngineError::DuplicateEmployee {
                    id: employee.id.clone(),
                });
            }
        }

        Ok(Self {
            employees: RwLock::new(employees),
            ids,
        })
    }

    /// Returns the id scheme used by [`EmployeeRepository::next_id`].
    pub fn id_scheme(&self) -> &IdScheme {
        &self.ids
    }

    fn not_found(id: &str) -> EngineError {
        EngineError::EmployeeNotFound { id: id.to_string() }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn fetch_all(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> EngineResult<Employee> {
        self.employees
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn fetch_by_department(&self, department: &str) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .iter()
            .filter(|e| e.department == department || e.department_code() == department)
            .cloned()
            .collect())
    }

    async fn fetch_by_status(&self, status: EmploymentStatus) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .iter()
            .filter(|e| e.status == Some(status))
            .cloned()
            .collect())
    }

    async fn create(&self, employee: Employee) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        if employees.iter().any(|e| e.id == employee.id) {
            return Err(EngineError::DuplicateEmployee { id: employee.id });
        }

        debug!(employee_id = %employee.id, "Inserting employee");
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn create_with_next_id(&self, mut employee: Employee) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        employee.id = self.ids.next_after(employees.iter().map(|e| e.id.as_str()))?;

        debug!(employee_id = %employee.id, "Inserting employee with assigned id");
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        let slot = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| Self::not_found(&employee.id))?;

        debug!(employee_id = %employee.id, "Replacing employee");
        *slot = employee.clone();
        Ok(employee)
    }

    async fn delete(&self, id: &str) -> EngineResult<()> {
        let mut employees = self.employees.write().await;
        let position = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        debug!(employee_id = %id, "Removing employee");
        employees.remove(position);
        Ok(())
    }

    async fn next_id(&self) -> EngineResult<String> {
        let employees = self.employees.read().await;
        self.ids.next_after(employees.iter().map(|e| e.id.as_str()))
    }
}
