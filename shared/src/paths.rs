//! REST paths of the employee API
//!
//! Paths are relative to the configured host, without a leading slash.

/// Collection path: `GET` lists, `POST` creates.
pub const EMPLOYEES: &str = "employees";

/// Single record path: `GET`, `PUT` and `DELETE` by id.
pub fn employee(id: i64) -> String {
    format!("{EMPLOYEES}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_path() {
        assert_eq!(employee(5), "employees/5");
        assert_eq!(employee(-1), "employees/-1");
    }
}
