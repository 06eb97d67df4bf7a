use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Converts Diesel errors into structured `AppError` variants.
///
/// Unique violations become `Duplicate` (409 at the HTTP layer), which
/// is how the ambiguous "insert the same (blog, category) link twice"
/// case is resolved: an explicit conflict rather than a silent no-op.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        match kind {
            DatabaseErrorKind::UniqueViolation => {
                match ConstraintParser::parse_unique_violation(message, info.constraint_name()) {
                    Some((entity, field, value)) => AppError::Duplicate { entity, field, value },
                    None => AppError::Duplicate {
                        entity: "resource".to_string(),
                        field: "unknown".to_string(),
                        value: "duplicate_value".to_string(),
                    },
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                match ConstraintParser::parse_foreign_key_violation(message) {
                    Some((entity, field, value)) => AppError::Validation {
                        field,
                        reason: format!("referenced {entity} with id {value} does not exist"),
                    },
                    None => AppError::Validation {
                        field: "unknown".to_string(),
                        reason: "referenced resource does not exist".to_string(),
                    },
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                match ConstraintParser::parse_not_null_violation(message) {
                    Some((_, field)) => AppError::Validation {
                        field,
                        reason: "must not be null".to_string(),
                    },
                    None => AppError::Validation {
                        field: "unknown".to_string(),
                        reason: "must not be null".to_string(),
                    },
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {message}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn duplicate_category_link_becomes_duplicate() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"category_blogs_pkey\"\nDETAIL: Key (blog_id, category_id)=(1, 2) already exists.".to_string(),
            constraint_name: Some("category_blogs_pkey".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));
        let result = DatabaseErrorConverter::convert_diesel_error(error, "add blog to category");

        match result {
            AppError::Duplicate { entity, field, value } => {
                assert_eq!(entity, "category_blogs");
                assert_eq!(field, "blog_id, category_id");
                assert_eq!(value, "1, 2");
            }
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn foreign_key_violation_becomes_validation() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"comments\" violates foreign key constraint \"comments_blog_id_fkey\"\nDETAIL: Key (blog_id)=(9) is not present in table \"blogs\".".to_string(),
            constraint_name: Some("comments_blog_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));
        let result = DatabaseErrorConverter::convert_diesel_error(error, "add comment");

        match result {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "blog_id");
                assert!(reason.contains("does not exist"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn not_found_becomes_not_found() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find blog");
        assert!(matches!(result, AppError::NotFound { .. }));
    }
}
