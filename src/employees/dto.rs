use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::error::AppError;

use super::repo::Employee;

/// Incoming create payload. Required fields are `Option` so their absence is
/// reported as a 400 with a field-specific message rather than a
/// deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub hire_date: Option<String>,
}

/// Create payload after validation, ready to bind into the INSERT.
#[derive(Debug)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub hire_date: Option<Date>,
}

impl CreateEmployeeRequest {
    pub fn validate(self) -> Result<NewEmployee, AppError> {
        let first_name = require(self.first_name, "first_name")?;
        let last_name = require(self.last_name, "last_name")?;
        let email = require(self.email, "email")?;

        if !email.contains('@') {
            return Err(AppError::Validation("Invalid email format".into()));
        }
        if let Some(salary) = self.salary {
            if salary.is_sign_negative() {
                return Err(AppError::Validation(
                    "Invalid salary: must be non-negative".into(),
                ));
            }
        }
        let hire_date = self.hire_date.as_deref().map(parse_hire_date).transpose()?;

        Ok(NewEmployee {
            first_name,
            last_name,
            email,
            phone: self.phone,
            department: self.department,
            position: self.position,
            salary: self.salary,
            hire_date,
        })
    }
}

fn require(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {name}"
        ))),
    }
}

fn parse_hire_date(raw: &str) -> Result<Date, AppError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format).map_err(|_| {
        AppError::Validation("Invalid hire_date format, expected YYYY-MM-DD".into())
    })
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub message: &'static str,
    pub employee: Employee,
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn valid() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            email: Some("ann@x.com".into()),
            phone: None,
            department: None,
            position: None,
            salary: None,
            hire_date: None,
        }
    }

    fn error_message(err: AppError) -> String {
        err.to_string()
    }

    #[test]
    fn accepts_minimal_valid_payload() {
        let new = valid().validate().unwrap();
        assert_eq!(new.first_name, "Ann");
        assert_eq!(new.email, "ann@x.com");
        assert!(new.phone.is_none());
        assert!(new.hire_date.is_none());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut req = valid();
        req.first_name = None;
        assert_eq!(
            error_message(req.validate().unwrap_err()),
            "Missing required field: first_name"
        );

        let mut req = valid();
        req.last_name = None;
        assert_eq!(
            error_message(req.validate().unwrap_err()),
            "Missing required field: last_name"
        );

        let mut req = valid();
        req.email = None;
        assert_eq!(
            error_message(req.validate().unwrap_err()),
            "Missing required field: email"
        );
    }

    #[test]
    fn rejects_empty_required_field() {
        let mut req = valid();
        req.last_name = Some(String::new());
        let err = req.validate().unwrap_err();
        assert_eq!(error_message(err), "Missing required field: last_name");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut req = valid();
        req.email = Some("ann.x.com".into());
        let err = req.validate().unwrap_err();
        assert_eq!(error_message(err), "Invalid email format");
    }

    #[test]
    fn rejects_negative_salary() {
        let mut req = valid();
        req.salary = Some(Decimal::new(-100, 0));
        assert!(req.validate().is_err());
    }

    #[test]
    fn parses_iso_hire_date() {
        let mut req = valid();
        req.hire_date = Some("2024-01-15".into());
        let new = req.validate().unwrap();
        assert_eq!(new.hire_date, Some(date!(2024 - 01 - 15)));
    }

    #[test]
    fn rejects_malformed_hire_date() {
        let mut req = valid();
        req.hire_date = Some("15/01/2024".into());
        assert!(req.validate().is_err());
    }
}
