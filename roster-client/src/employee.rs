//! Employee access layer

use async_trait::async_trait;
use shared::{Confirmation, Employee, paths};

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Typed operations on the employee collection
///
/// Views depend on this trait rather than on the transport, so it stays
/// object-safe.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /employees`
    async fn list(&self) -> ClientResult<Vec<Employee>>;

    /// `GET /employees/{id}`; a missing record is a 404 status error
    async fn get(&self, id: i64) -> ClientResult<Employee>;

    /// `POST /employees`
    async fn create(&self, employee: &Employee) -> ClientResult<Confirmation>;

    /// `PUT /employees/{id}`
    async fn update(&self, id: i64, employee: &Employee) -> ClientResult<Confirmation>;

    /// `DELETE /employees/{id}`
    async fn delete(&self, id: i64) -> ClientResult<Confirmation>;
}

/// [`EmployeeApi`] over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct EmployeeService<H = NetworkHttpClient> {
    http: H,
}

impl EmployeeService<NetworkHttpClient> {
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<H: HttpClient> EmployeeService<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

#[async_trait]
impl<H: HttpClient> EmployeeApi for EmployeeService<H> {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .http
            .get_json(paths::EMPLOYEES)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching employees"))?;
        tracing::debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.http
            .get_json(&paths::employee(id))
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error fetching employee"))
    }

    async fn create(&self, employee: &Employee) -> ClientResult<Confirmation> {
        let text = self
            .http
            .post_text(paths::EMPLOYEES, employee)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error creating employee"))?;
        tracing::info!(name = %employee.name, "Employee created");
        Ok(Confirmation::from(text))
    }

    async fn update(&self, id: i64, employee: &Employee) -> ClientResult<Confirmation> {
        let text = self
            .http
            .put_text(&paths::employee(id), employee)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error updating employee"))?;
        tracing::info!(id, "Employee updated");
        Ok(Confirmation::from(text))
    }

    async fn delete(&self, id: i64) -> ClientResult<Confirmation> {
        let text = self
            .http
            .delete_text(&paths::employee(id))
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error deleting employee"))?;
        tracing::info!(id, response = %text, "Employee deleted");
        Ok(Confirmation::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use reqwest::StatusCode;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use std::sync::Mutex;

    /// Records every call and answers from canned values
    #[derive(Default)]
    struct FakeHttp {
        calls: Mutex<Vec<String>>,
        json: Option<serde_json::Value>,
        text: String,
        fail_with: Option<StatusCode>,
    }

    impl FakeHttp {
        fn record(&self, call: String) -> ClientResult<()> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with {
                Some(status) => Err(ClientError::from_status(status, "nope")),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for FakeHttp {
        async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            self.record(format!("GET {path}"))?;
            let value = self.json.clone().unwrap_or(serde_json::Value::Null);
            serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
        }

        async fn post_text<B: Serialize + Sync>(
            &self,
            path: &str,
            body: &B,
        ) -> ClientResult<String> {
            self.record(format!("POST {path} {}", serde_json::to_string(body).unwrap()))?;
            Ok(self.text.clone())
        }

        async fn put_text<B: Serialize + Sync>(
            &self,
            path: &str,
            body: &B,
        ) -> ClientResult<String> {
            self.record(format!("PUT {path} {}", serde_json::to_string(body).unwrap()))?;
            Ok(self.text.clone())
        }

        async fn delete_text(&self, path: &str) -> ClientResult<String> {
            self.record(format!("DELETE {path}"))?;
            Ok(self.text.clone())
        }
    }

    #[tokio::test]
    async fn test_list_decodes_array() {
        let service = EmployeeService::new(FakeHttp {
            json: Some(serde_json::json!([
                {"id": 1, "name": "Ada", "phone": "1", "email": "ada@example.com"},
                {"id": 2, "name": "Grace", "phone": "2", "email": "grace@example.com"}
            ])),
            ..Default::default()
        });

        let employees = service.list().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].id, Some(2));
        assert_eq!(service.http().calls(), vec!["GET employees"]);
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let service = EmployeeService::new(FakeHttp {
            text: "Employee created successfully".into(),
            ..Default::default()
        });

        let confirmation = service
            .create(&Employee::new("Ada", "1", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(confirmation.as_str(), "Employee created successfully");
        assert_eq!(
            service.http().calls(),
            vec![r#"POST employees {"name":"Ada","phone":"1","email":"ada@example.com"}"#]
        );
    }

    #[tokio::test]
    async fn test_update_puts_to_record() {
        let service = EmployeeService::new(FakeHttp::default());
        let employee = Employee::new("Ada", "1", "ada@example.com").with_id(5);

        service.update(5, &employee).await.unwrap();

        let calls = service.http().calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("PUT employees/5 "));
        assert!(calls[0].contains(r#""id":5"#));
    }

    #[tokio::test]
    async fn test_delete_targets_record() {
        let service = EmployeeService::new(FakeHttp {
            text: "Employee deleted successfully".into(),
            ..Default::default()
        });

        let confirmation = service.delete(9).await.unwrap();
        assert_eq!(confirmation.to_string(), "Employee deleted successfully");
        assert_eq!(service.http().calls(), vec!["DELETE employees/9"]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let service = EmployeeService::new(FakeHttp {
            fail_with: Some(StatusCode::NOT_FOUND),
            ..Default::default()
        });

        let err = service.get(42).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.http().calls(), vec!["GET employees/42"]);
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_body() {
        let service = EmployeeService::new(FakeHttp {
            json: Some(serde_json::json!({"unexpected": true})),
            ..Default::default()
        });

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
