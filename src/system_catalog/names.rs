//! Relation, column and literal names published by the information schema.
//! Every synthesizer takes its names from here so spellings stay in one place.

/// Reserved identifier of the introspection namespace.
pub const INFORMATION_SCHEMA: &str = "INFORMATION_SCHEMA";
/// Catalog and schema identity of user-schema rows.
pub const DEFAULT_NAMESPACE: &str = "";

pub mod relation {
    pub const SCHEMATA: &str = "SCHEMATA";
    pub const SPANNER_STATISTICS: &str = "SPANNER_STATISTICS";
    pub const DATABASE_OPTIONS: &str = "DATABASE_OPTIONS";
    pub const TABLES: &str = "TABLES";
    pub const COLUMNS: &str = "COLUMNS";
    pub const COLUMN_COLUMN_USAGE: &str = "COLUMN_COLUMN_USAGE";
    pub const INDEXES: &str = "INDEXES";
    pub const INDEX_COLUMNS: &str = "INDEX_COLUMNS";
    pub const COLUMN_OPTIONS: &str = "COLUMN_OPTIONS";
    pub const CHECK_CONSTRAINTS: &str = "CHECK_CONSTRAINTS";
    pub const TABLE_CONSTRAINTS: &str = "TABLE_CONSTRAINTS";
    pub const CONSTRAINT_TABLE_USAGE: &str = "CONSTRAINT_TABLE_USAGE";
    pub const REFERENTIAL_CONSTRAINTS: &str = "REFERENTIAL_CONSTRAINTS";
    pub const KEY_COLUMN_USAGE: &str = "KEY_COLUMN_USAGE";
    pub const CONSTRAINT_COLUMN_USAGE: &str = "CONSTRAINT_COLUMN_USAGE";
}

pub mod column {
    pub const CATALOG_NAME: &str = "CATALOG_NAME";
    pub const SCHEMA_NAME: &str = "SCHEMA_NAME";
    pub const PACKAGE_NAME: &str = "PACKAGE_NAME";
    pub const ALLOW_GC: &str = "ALLOW_GC";
    pub const OPTION_NAME: &str = "OPTION_NAME";
    pub const OPTION_TYPE: &str = "OPTION_TYPE";
    pub const OPTION_VALUE: &str = "OPTION_VALUE";

    pub const TABLE_CATALOG: &str = "TABLE_CATALOG";
    pub const TABLE_SCHEMA: &str = "TABLE_SCHEMA";
    pub const TABLE_NAME: &str = "TABLE_NAME";
    pub const TABLE_TYPE: &str = "TABLE_TYPE";
    pub const PARENT_TABLE_NAME: &str = "PARENT_TABLE_NAME";
    pub const ON_DELETE_ACTION: &str = "ON_DELETE_ACTION";
    pub const SPANNER_STATE: &str = "SPANNER_STATE";
    pub const ROW_DELETION_POLICY_EXPRESSION: &str = "ROW_DELETION_POLICY_EXPRESSION";

    pub const COLUMN_NAME: &str = "COLUMN_NAME";
    pub const ORDINAL_POSITION: &str = "ORDINAL_POSITION";
    pub const COLUMN_DEFAULT: &str = "COLUMN_DEFAULT";
    pub const DATA_TYPE: &str = "DATA_TYPE";
    pub const IS_NULLABLE: &str = "IS_NULLABLE";
    pub const SPANNER_TYPE: &str = "SPANNER_TYPE";
    pub const IS_GENERATED: &str = "IS_GENERATED";
    pub const GENERATION_EXPRESSION: &str = "GENERATION_EXPRESSION";
    pub const IS_STORED: &str = "IS_STORED";
    pub const DEPENDENT_COLUMN: &str = "DEPENDENT_COLUMN";

    pub const INDEX_NAME: &str = "INDEX_NAME";
    pub const INDEX_TYPE: &str = "INDEX_TYPE";
    pub const IS_UNIQUE: &str = "IS_UNIQUE";
    pub const IS_NULL_FILTERED: &str = "IS_NULL_FILTERED";
    pub const INDEX_STATE: &str = "INDEX_STATE";
    pub const SPANNER_IS_MANAGED: &str = "SPANNER_IS_MANAGED";
    pub const COLUMN_ORDERING: &str = "COLUMN_ORDERING";

    pub const CONSTRAINT_CATALOG: &str = "CONSTRAINT_CATALOG";
    pub const CONSTRAINT_SCHEMA: &str = "CONSTRAINT_SCHEMA";
    pub const CONSTRAINT_NAME: &str = "CONSTRAINT_NAME";
    pub const CONSTRAINT_TYPE: &str = "CONSTRAINT_TYPE";
    pub const IS_DEFERRABLE: &str = "IS_DEFERRABLE";
    pub const INITIALLY_DEFERRED: &str = "INITIALLY_DEFERRED";
    pub const ENFORCED: &str = "ENFORCED";
    pub const CHECK_CLAUSE: &str = "CHECK_CLAUSE";
    pub const UNIQUE_CONSTRAINT_CATALOG: &str = "UNIQUE_CONSTRAINT_CATALOG";
    pub const UNIQUE_CONSTRAINT_SCHEMA: &str = "UNIQUE_CONSTRAINT_SCHEMA";
    pub const UNIQUE_CONSTRAINT_NAME: &str = "UNIQUE_CONSTRAINT_NAME";
    pub const MATCH_OPTION: &str = "MATCH_OPTION";
    pub const UPDATE_RULE: &str = "UPDATE_RULE";
    pub const DELETE_RULE: &str = "DELETE_RULE";
    pub const POSITION_IN_UNIQUE_CONSTRAINT: &str = "POSITION_IN_UNIQUE_CONSTRAINT";
}

pub mod value {
    pub const BASE_TABLE: &str = "BASE TABLE";
    pub const VIEW: &str = "VIEW";
    pub const COMMITTED: &str = "COMMITTED";
    pub const READ_WRITE: &str = "READ_WRITE";
    pub const YES: &str = "YES";
    pub const NO: &str = "NO";
    pub const ALWAYS: &str = "ALWAYS";
    pub const NEVER: &str = "NEVER";
    pub const ASC: &str = "ASC";
    pub const DESC: &str = "DESC";

    pub const INDEX: &str = "INDEX";
    /// Name and type of the synthesized primary-key pseudo-index.
    pub const PRIMARY_KEY_INDEX: &str = "PRIMARY_KEY";

    pub const PRIMARY_KEY: &str = "PRIMARY KEY";
    pub const CHECK: &str = "CHECK";
    pub const FOREIGN_KEY: &str = "FOREIGN KEY";
    pub const UNIQUE: &str = "UNIQUE";

    pub const SIMPLE: &str = "SIMPLE";
    pub const NO_ACTION: &str = "NO ACTION";

    pub const DATABASE_DIALECT: &str = "database_dialect";
    pub const STRING: &str = "STRING";
    pub const GOOGLE_STANDARD_SQL: &str = "GOOGLE_STANDARD_SQL";

    pub const ALLOW_COMMIT_TIMESTAMP: &str = "allow_commit_timestamp";
    pub const BOOL: &str = "BOOL";
    pub const TRUE: &str = "TRUE";

    pub const PRIMARY_KEY_PREFIX: &str = "PK_";
    pub const NOT_NULL_CHECK_PREFIX: &str = "CK_IS_NOT_NULL_";
    pub const NOT_NULL_CHECK_SUFFIX: &str = " IS NOT NULL";
}

/// Declared type text used by the self-description store.
pub mod spanner_type {
    pub const STRING_MAX: &str = "STRING(MAX)";
    pub const INT64: &str = "INT64";
    pub const BOOL: &str = "BOOL";
}
