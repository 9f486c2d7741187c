//! Table analysis prompt.
//!
//! Asks the assistant to document one table's schema, relationships and
//! indexes as Markdown. The sample rows under "Column Analysis" and the
//! sample relationships are part of the template and always rendered.

use crate::{PromptKind, PromptTemplate};

/// Table analysis template bound to a table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAnalysisPrompt<'a> {
    /// Table to analyze. Substituted verbatim.
    pub table_name: &'a str,
}

impl<'a> TableAnalysisPrompt<'a> {
    pub fn new(table_name: &'a str) -> Self {
        Self { table_name }
    }
}

impl PromptTemplate for TableAnalysisPrompt<'_> {
    fn kind(&self) -> PromptKind {
        PromptKind::TableAnalysis
    }

    fn render(&self) -> String {
        render_table_analysis(self.table_name)
    }
}

/// Render the table analysis prompt for `table_name`.
///
/// The name lands in the preamble, the document title and the overview
/// `Name` field. Empty or Markdown-breaking names are embedded unchanged.
pub fn render_table_analysis(table_name: &str) -> String {
    format!(
        r#"Using DB MCP, analyze the schema and relationships of the {table_name} table in the database,
and create documentation in an easy-to-read Markdown format.
Before proceeding with this task, call List_databases to confirm which database to work with.
If backend code exists in the user's codebase, please reference it to explain the role of this table.

### Output Format (Markdown) (Write in the following format)

# 📋 Table Analysis: {table_name}

## 1. Table Overview
- **Name**: {table_name}
- **Type**: General
- **Role**: Store billing details and manage payment status

## 2. Column Analysis
| Column Name     | Type         | PK/FK | NULL Allowed | Default | Description |
|----------------|--------------|-------|--------------|---------|-------------|
| id             | BIGINT       | PK    | NO           | -       | Unique identifier |
| member_id      | BIGINT       | FK    | NO           | -       | Member ID (member.id) |
| amount         | DECIMAL(10,2)|       | NO           | 0.00    | Billing amount |
| status         | TINYINT      |       | NO           | 0       | Payment status (0:pending, 1:completed, 2:cancelled) |
...

## 3. Relationship Analysis
### Parent Tables
- member (member_id) → ON DELETE CASCADE / ON UPDATE CASCADE, billing target member information

### Child Tables
- payment (charge_id) → payment history reference

## 4. Key Indexes
- PK Index: PRIMARY KEY (id)
- Secondary Index: idx_member_id (member_id) → improve performance for member-based queries"#
    )
}
