//! Employee query and aggregation service.
//!
//! Implements the facade operations by composing upstream directory calls
//! with in-memory collection operations. Aggregates and searches always
//! work on a full, freshly fetched snapshot; nothing is cached between
//! invocations, so two concurrent calls may observe different snapshots.

use std::sync::Arc;

use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::domain::{Employee, NewEmployee};

/// Number of names returned by [`EmployeeService::top_ten_earning_names`].
const TOP_EARNER_COUNT: usize = 10;

/// Facade over the upstream employee directory.
///
/// Stateless apart from the directory handle; concurrent invocations are
/// independent.
#[derive(Clone)]
pub struct EmployeeService<D> {
    directory: Arc<D>,
}

impl<D> EmployeeService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D: EmployeeDirectory> EmployeeService<D> {
    /// Retrieve all employees in upstream order.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn get_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        self.snapshot().await
    }

    /// Find one employee by id. Absence is a normal `None`, not an error.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeDirectoryError> {
        self.directory.find_by_id(id).await.inspect_err(|error| {
            tracing::error!(employee_id = id, error = %error, "could not retrieve employee by id");
        })
    }

    /// Find employees whose name equals `query` exactly, case-sensitively.
    ///
    /// No partial or fuzzy matching; an empty result is normal.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn search_by_name(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        let employees = self.snapshot().await?;
        Ok(employees
            .into_iter()
            .filter(|employee| employee.name == query)
            .collect())
    }

    /// Highest salary across the directory; `None` when it is empty.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn highest_salary(&self) -> Result<Option<u32>, EmployeeDirectoryError> {
        let employees = self.snapshot().await?;
        Ok(employees.iter().map(|employee| employee.salary).max())
    }

    /// Names of the ten highest-earning employees, salary descending.
    ///
    /// The sort is stable: employees with equal salaries keep their
    /// relative order from the upstream listing. Fewer than ten records
    /// yield all of them.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn top_ten_earning_names(&self) -> Result<Vec<String>, EmployeeDirectoryError> {
        let mut employees = self.snapshot().await?;
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        employees.truncate(TOP_EARNER_COUNT);
        Ok(employees
            .into_iter()
            .map(|employee| employee.name)
            .collect())
    }

    /// Create an employee; the upstream assigns the id.
    ///
    /// The upstream create contract carries only name, salary, age, and
    /// title; the adapter never sends an id or email.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call,
    /// including [`EmployeeDirectoryError::InvalidInput`] when the
    /// upstream rejects the payload.
    pub async fn create(
        &self,
        employee: &NewEmployee,
    ) -> Result<Option<Employee>, EmployeeDirectoryError> {
        self.directory.create(employee).await.inspect_err(|error| {
            tracing::error!(error = %error, "could not create employee");
        })
    }

    /// Delete records matching `name`. Success is the absence of an error.
    ///
    /// # Errors
    ///
    /// Propagates any [`EmployeeDirectoryError`] from the upstream call.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), EmployeeDirectoryError> {
        self.directory.delete_by_name(name).await.inspect_err(|error| {
            tracing::error!(employee_name = name, error = %error, "could not delete employee");
        })
    }

    async fn snapshot(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        self.directory.list_all().await.inspect_err(|error| {
            tracing::error!(error = %error, "could not retrieve employee listing");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixtureEmployeeDirectory, MockEmployeeDirectory};

    fn employee(id: &str, name: &str, salary: u32) -> Employee {
        Employee {
            id: id.to_owned(),
            name: name.to_owned(),
            salary,
            age: 34,
            title: "Field Engineer".to_owned(),
            email: Some("someone@example.com".to_owned()),
        }
    }

    fn service_with_listing(employees: Vec<Employee>) -> EmployeeService<MockEmployeeDirectory> {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_list_all()
            .times(1)
            .return_once(move || Ok(employees));
        EmployeeService::new(Arc::new(directory))
    }

    #[tokio::test]
    async fn highest_salary_picks_the_maximum() {
        let service =
            service_with_listing(vec![employee("1", "A", 100), employee("2", "B", 200)]);

        let highest = service.highest_salary().await.expect("listing succeeds");
        assert_eq!(highest, Some(200));
    }

    #[tokio::test]
    async fn highest_salary_is_absent_for_an_empty_directory() {
        let service = EmployeeService::new(Arc::new(FixtureEmployeeDirectory));

        let highest = service.highest_salary().await.expect("listing succeeds");
        assert_eq!(highest, None);
    }

    #[tokio::test]
    async fn search_matches_names_exactly() {
        let service =
            service_with_listing(vec![employee("1", "A", 100), employee("2", "B", 200)]);

        let matches = service.search_by_name("A").await.expect("listing succeeds");
        assert_eq!(matches, vec![employee("1", "A", 100)]);
    }

    #[tokio::test]
    async fn search_is_case_sensitive_and_never_partial() {
        let service = service_with_listing(vec![
            employee("1", "Ada", 100),
            employee("2", "ada", 200),
            employee("3", "Ada Lovelace", 300),
        ]);

        let matches = service
            .search_by_name("Ada")
            .await
            .expect("listing succeeds");
        assert_eq!(matches, vec![employee("1", "Ada", 100)]);
    }

    #[tokio::test]
    async fn search_returns_empty_when_nothing_matches() {
        let service =
            service_with_listing(vec![employee("1", "A", 100), employee("2", "B", 200)]);

        let matches = service.search_by_name("C").await.expect("listing succeeds");
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn top_earners_drop_the_lowest_salary_beyond_ten() {
        let mut employees: Vec<Employee> = (1_u32..=10)
            .map(|n| employee(&n.to_string(), &n.to_string(), n * 100))
            .collect();
        employees.push(employee("0", "0", 5));
        let service = service_with_listing(employees);

        let names = service
            .top_ten_earning_names()
            .await
            .expect("listing succeeds");
        assert_eq!(names.len(), 10);
        assert!(!names.contains(&"0".to_owned()));
    }

    #[tokio::test]
    async fn top_earners_are_ordered_by_salary_descending() {
        let service = service_with_listing(vec![
            employee("1", "A", 100),
            employee("2", "B", 200),
            employee("3", "C", 300),
        ]);

        let names = service
            .top_ten_earning_names()
            .await
            .expect("listing succeeds");
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn top_earners_keep_upstream_order_for_equal_salaries() {
        let service = service_with_listing(vec![
            employee("1", "first", 200),
            employee("2", "second", 200),
            employee("3", "low", 100),
            employee("4", "third", 200),
        ]);

        let names = service
            .top_ten_earning_names()
            .await
            .expect("listing succeeds");
        assert_eq!(names, vec!["first", "second", "third", "low"]);
    }

    #[tokio::test]
    async fn get_by_id_returns_the_matching_record() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_find_by_id()
            .withf(|id| id == "e-1")
            .times(1)
            .return_once(|_| Ok(Some(employee("e-1", "A", 100))));
        let service = EmployeeService::new(Arc::new(directory));

        let found = service.get_by_id("e-1").await.expect("lookup succeeds");
        assert_eq!(found, Some(employee("e-1", "A", 100)));
    }

    #[tokio::test]
    async fn get_by_id_treats_missing_data_as_absent() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        let service = EmployeeService::new(Arc::new(directory));

        let found = service.get_by_id("e-1").await.expect("lookup succeeds");
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn get_by_id_propagates_upstream_failures() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Err(EmployeeDirectoryError::Unavailable { status: 500 }));
        let service = EmployeeService::new(Arc::new(directory));

        let error = service.get_by_id("e-1").await.expect_err("lookup fails");
        assert_eq!(error, EmployeeDirectoryError::Unavailable { status: 500 });
    }

    #[tokio::test]
    async fn aggregate_calls_propagate_rate_limiting() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_list_all()
            .times(1)
            .return_once(|| Err(EmployeeDirectoryError::RateLimited));
        let service = EmployeeService::new(Arc::new(directory));

        let error = service.highest_salary().await.expect_err("listing fails");
        assert_eq!(error, EmployeeDirectoryError::RateLimited);
    }

    #[tokio::test]
    async fn create_forwards_the_payload_and_returns_the_assigned_record() {
        let request = NewEmployee {
            name: "A".to_owned(),
            salary: 100,
            age: 34,
            title: "Field Engineer".to_owned(),
            email: Some("someone@example.com".to_owned()),
        };
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_create()
            .withf(|candidate| candidate.name == "A" && candidate.salary == 100)
            .times(1)
            .return_once(|_| Ok(Some(employee("assigned", "A", 100))));
        let service = EmployeeService::new(Arc::new(directory));

        let created = service.create(&request).await.expect("create succeeds");
        assert_eq!(created.map(|record| record.id), Some("assigned".to_owned()));
    }

    #[tokio::test]
    async fn create_surfaces_upstream_rejections() {
        let request = NewEmployee {
            name: String::new(),
            salary: 0,
            age: 0,
            title: String::new(),
            email: None,
        };
        let mut directory = MockEmployeeDirectory::new();
        directory.expect_create().times(1).return_once(|_| {
            Err(EmployeeDirectoryError::invalid_input("name must not be blank"))
        });
        let service = EmployeeService::new(Arc::new(directory));

        let error = service.create(&request).await.expect_err("create fails");
        assert_eq!(
            error,
            EmployeeDirectoryError::invalid_input("name must not be blank")
        );
    }

    #[tokio::test]
    async fn delete_forwards_the_name() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_delete_by_name()
            .withf(|name| name == "A")
            .times(1)
            .return_once(|_| Ok(()));
        let service = EmployeeService::new(Arc::new(directory));

        service.delete_by_name("A").await.expect("delete succeeds");
    }
}
