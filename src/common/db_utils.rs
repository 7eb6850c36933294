// src/common/db_utils.rs

use sqlx::error::ErrorKind;

use crate::common::error::{AppError, Resource};

// ---
// Helpers de erro do banco
// ---

/// Converte falhas de INSERT/UPDATE. Violações de restrição (CHECK, UNIQUE, NOT NULL, FK)
/// são culpa do payload e viram 400; o resto continua sendo erro de banco (500).
pub(crate) fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        let is_constraint = matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        );
        if is_constraint {
            let detail = db_err
                .constraint()
                .map(str::to_string)
                .unwrap_or_else(|| db_err.message().to_string());
            return AppError::ConstraintViolation(detail);
        }
    }
    e.into()
}

/// DELETE que não afetou nenhuma linha significa id inexistente.
pub(crate) fn ensure_affected(rows_affected: u64, resource: Resource) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(resource));
    }
    Ok(())
}
