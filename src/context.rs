//! Context describing the column an algorithm call applies to.

use std::fmt;

/// Identifies the database column an encrypt or decrypt call belongs to.
///
/// The context is supplied by the surrounding data-protection layer and is
/// opaque to the digest transform itself; algorithms that derive per-column
/// state are free to consult it.
///
/// # Example
///
/// ```
/// use likedigest::context::EncryptContext;
///
/// let ctx = EncryptContext::new("users", "email")
///     .with_database("app_db")
///     .with_schema("public");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptContext {
    database_name: Option<String>,
    schema_name: Option<String>,
    table_name: String,
    column_name: String,
}

impl EncryptContext {
    /// Creates a new context for the given table and column.
    #[must_use]
    pub fn new(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            database_name: None,
            schema_name: None,
            table_name: table_name.into(),
            column_name: column_name.into(),
        }
    }

    /// Sets the database name.
    #[must_use]
    pub fn with_database(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn with_schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    /// Returns the database name, if set.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// Returns the schema name, if set.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns the column name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}

impl fmt::Display for EncryptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.database_name.as_deref().unwrap_or("default"),
            self.schema_name.as_deref().unwrap_or("default"),
            self.table_name,
            self.column_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = EncryptContext::new("users", "email").with_database("app_db").with_schema("public");

        assert_eq!(ctx.to_string(), "app_db|public|users|email");
    }

    #[test]
    fn test_context_display_defaults() {
        let ctx = EncryptContext::new("users", "email");

        assert_eq!(ctx.to_string(), "default|default|users|email");
    }

    #[test]
    fn test_context_accessors() {
        let ctx = EncryptContext::new("orders", "address").with_schema("sales");

        assert_eq!(ctx.table_name(), "orders");
        assert_eq!(ctx.column_name(), "address");
        assert_eq!(ctx.schema_name(), Some("sales"));
        assert_eq!(ctx.database_name(), None);
    }
}
