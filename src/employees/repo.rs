use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};

use super::dto::NewEmployee;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One persisted employee row. The field list is the static mapping for the
/// employees table; queries name every column explicitly.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    #[serde(with = "iso_date::option")]
    pub hire_date: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Employee {
    /// Insert a validated employee and return the generated id. Uniqueness
    /// of the email is enforced by the table constraint; callers inspect the
    /// error rather than pre-checking, to avoid a check-then-insert race.
    pub async fn insert(db: &PgPool, new: &NewEmployee) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employees
                (first_name, last_name, email, phone, department, position, salary, hire_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.department)
        .bind(&new.position)
        .bind(new.salary)
        .bind(new.hire_date)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, email, phone, department, position,
                   salary, hire_date, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, email, phone, department, position,
                   salary, hire_date, created_at, updated_at
            FROM employees
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn employee() -> Employee {
        Employee {
            id: 1,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            phone: None,
            department: Some("Engineering".into()),
            position: None,
            salary: Some(Decimal::new(5000000, 2)),
            hire_date: Some(date!(2024 - 01 - 15)),
            created_at: datetime!(2024-02-01 09:30:00 UTC),
            updated_at: datetime!(2024-02-01 09:30:00 UTC),
        }
    }

    #[test]
    fn serializes_timestamps_as_rfc3339() {
        let v = serde_json::to_value(employee()).unwrap();
        assert_eq!(v["created_at"], "2024-02-01T09:30:00Z");
        assert_eq!(v["updated_at"], "2024-02-01T09:30:00Z");
    }

    #[test]
    fn serializes_hire_date_as_iso_date() {
        let v = serde_json::to_value(employee()).unwrap();
        assert_eq!(v["hire_date"], "2024-01-15");
    }

    #[test]
    fn serializes_salary_as_number_and_absent_optionals_as_null() {
        let v = serde_json::to_value(employee()).unwrap();
        assert_eq!(v["salary"], serde_json::json!(50000.0));
        assert_eq!(v["phone"], serde_json::Value::Null);
        assert_eq!(v["position"], serde_json::Value::Null);
    }
}
