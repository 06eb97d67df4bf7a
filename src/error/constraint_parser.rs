use std::sync::OnceLock;

use regex::Regex;

/// Parses PostgreSQL constraint violation messages into structured
/// (entity, field, value) pieces the error converter can use.
pub struct ConstraintParser;

struct RegexPatterns {
    // "Key (blog_id, category_id)=(3, 7) already exists."
    key_value: Regex,
    // null value in column "title" ...
    column_name: Regex,
    // ... is not present in table "blogs"
    table_name: Regex,
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(|| RegexPatterns {
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        })
    }

    /// Extracts (entity, field, value) from a unique or primary-key
    /// violation, e.g. constraint `category_blogs_pkey` with detail
    /// `Key (blog_id, category_id)=(3, 7) already exists.`
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = Self::extract_key_value(message);

        if let Some(constraint) = constraint_name
            && let Some((entity, field)) = Self::split_constraint_name(constraint)
        {
            return match key_value {
                Some((parsed_field, value)) => {
                    // The message names the exact columns; prefer them
                    // over the field guessed from the constraint name.
                    let field = if parsed_field.is_empty() { field } else { parsed_field };
                    Some((entity, field, value))
                }
                None => Some((entity, field, "duplicate_value".to_string())),
            };
        }

        key_value.map(|(field, value)| {
            let entity =
                Self::extract_table(message).unwrap_or_else(|| "resource".to_string());
            (entity, field, value)
        })
    }

    /// Extracts (entity, field, value) from a foreign-key violation,
    /// e.g. `Key (blog_id)=(42) is not present in table "blogs".`
    pub fn parse_foreign_key_violation(message: &str) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value(message)?;
        let entity = Self::extract_table(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Extracts (entity, field) from a not-null violation.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::patterns()
            .column_name
            .captures(message)
            .map(|c| c[1].to_string())?;
        let entity = Self::extract_table(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Splits a PostgreSQL constraint name into (table, field).
    /// Handles `<table>_pkey`, `<table>_<field>_key` and
    /// `<table>_<field>_fkey` for the tables of this schema.
    fn split_constraint_name(constraint: &str) -> Option<(String, String)> {
        const TABLES: [&str; 5] =
            ["category_blogs", "app_users", "categories", "comments", "blogs"];

        let trimmed = constraint
            .strip_suffix("_fkey")
            .or_else(|| constraint.strip_suffix("_pkey"))
            .or_else(|| constraint.strip_suffix("_key"))
            .unwrap_or(constraint);

        for table in TABLES {
            if trimmed == table {
                // "<table>_pkey" style: the key is the primary key.
                return Some((table.to_string(), "id".to_string()));
            }
            if let Some(rest) = trimmed.strip_prefix(table)
                && let Some(field) = rest.strip_prefix('_')
                && !field.is_empty()
            {
                return Some((table.to_string(), field.to_string()));
            }
        }
        None
    }

    fn extract_key_value(message: &str) -> Option<(String, String)> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|c| (c[1].to_string(), c[2].to_string()))
    }

    fn extract_table(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .map(|c| c[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duplicate_category_link() {
        let message = "duplicate key value violates unique constraint \"category_blogs_pkey\"\nDETAIL: Key (blog_id, category_id)=(3, 7) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("category_blogs_pkey"));
        assert_eq!(
            result,
            Some((
                "category_blogs".to_string(),
                "blog_id, category_id".to_string(),
                "3, 7".to_string()
            ))
        );
    }

    #[test]
    fn parses_duplicate_username() {
        let message = "duplicate key value violates unique constraint \"app_users_username_key\"\nDETAIL: Key (username)=(mfc) already exists.";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("app_users_username_key"));
        assert_eq!(
            result,
            Some(("app_users".to_string(), "username".to_string(), "mfc".to_string()))
        );
    }

    #[test]
    fn unique_violation_without_detail_falls_back() {
        let message = "duplicate key value violates unique constraint \"app_users_username_key\"";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("app_users_username_key"));
        assert_eq!(
            result,
            Some((
                "app_users".to_string(),
                "username".to_string(),
                "duplicate_value".to_string()
            ))
        );
    }

    #[test]
    fn unique_violation_without_constraint_uses_message() {
        let message = "duplicate key\nDETAIL: Key (name)=(rust) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some(("resource".to_string(), "name".to_string(), "rust".to_string()))
        );
    }

    #[test]
    fn parses_foreign_key_violation() {
        let message = "insert or update on table \"comments\" violates foreign key constraint \"comments_blog_id_fkey\"\nDETAIL: Key (blog_id)=(42) is not present in table \"blogs\".";
        let result = ConstraintParser::parse_foreign_key_violation(message);
        assert!(result.is_some());
        let (_, field, value) = result.unwrap();
        assert_eq!(field, "blog_id");
        assert_eq!(value, "42");
    }

    #[test]
    fn parses_not_null_violation() {
        let message = "null value in column \"title\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message);
        assert_eq!(result, Some(("resource".to_string(), "title".to_string())));
    }

    #[test]
    fn unknown_constraint_name_is_none() {
        assert_eq!(ConstraintParser::split_constraint_name("widgets_pkey"), None);
    }
}
