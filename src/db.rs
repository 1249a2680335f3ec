use anyhow::Context;
use sqlx::PgPool;

const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    phone VARCHAR(20),
    department VARCHAR(100),
    position VARCHAR(100),
    salary NUMERIC(10, 2),
    hire_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

// Postgres has no ON UPDATE CURRENT_TIMESTAMP; updated_at is refreshed by a
// row-level trigger instead.
const CREATE_TOUCH_UPDATED_AT_FN: &str = r#"
CREATE OR REPLACE FUNCTION touch_employees_updated_at() RETURNS trigger AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql
"#;

const DROP_UPDATED_AT_TRIGGER: &str =
    "DROP TRIGGER IF EXISTS employees_touch_updated_at ON employees";

const CREATE_UPDATED_AT_TRIGGER: &str = r#"
CREATE TRIGGER employees_touch_updated_at
BEFORE UPDATE ON employees
FOR EACH ROW EXECUTE FUNCTION touch_employees_updated_at()
"#;

/// Idempotently create the employees table and its updated_at trigger.
///
/// Runs once at startup, before the listener binds. Failure here is fatal:
/// the caller propagates the error out of `main` and the process exits
/// nonzero without serving traffic.
pub async fn init_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_EMPLOYEES_TABLE)
        .execute(db)
        .await
        .context("create employees table")?;
    sqlx::query(CREATE_TOUCH_UPDATED_AT_FN)
        .execute(db)
        .await
        .context("create updated_at trigger function")?;
    sqlx::query(DROP_UPDATED_AT_TRIGGER)
        .execute(db)
        .await
        .context("drop stale updated_at trigger")?;
    sqlx::query(CREATE_UPDATED_AT_TRIGGER)
        .execute(db)
        .await
        .context("create updated_at trigger")?;

    tracing::info!("database schema initialized");
    Ok(())
}
