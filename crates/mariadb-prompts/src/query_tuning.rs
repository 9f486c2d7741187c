//! Query tuning prompt.
//!
//! Casts the assistant as a MariaDB/MySQL DBA and asks for an EXPLAIN-based
//! analysis, optimization suggestions, an improved query and its expected
//! impact, in that order.

use crate::{PromptKind, PromptTemplate};

/// Query tuning template bound to the original query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTuningPrompt<'a> {
    /// Query under analysis. Embedded verbatim in a `sql` fence.
    pub original_query: &'a str,
}

impl<'a> QueryTuningPrompt<'a> {
    pub fn new(original_query: &'a str) -> Self {
        Self { original_query }
    }
}

impl PromptTemplate for QueryTuningPrompt<'_> {
    fn kind(&self) -> PromptKind {
        PromptKind::QueryTuning
    }

    fn render(&self) -> String {
        render_query_tuning(self.original_query)
    }
}

/// Render the query tuning prompt for `original_query`.
///
/// The query is neither parsed nor escaped: an unmatched code fence inside it
/// will break the surrounding Markdown, which is left to the caller.
pub fn render_query_tuning(original_query: &str) -> String {
    // The persona line ends with two spaces (a Markdown hard break).
    format!(
        r#"You are a MariaDB/MySQL query performance optimization expert (DBA).  
Using MariaDB MCP, provide **execution plan analysis, bottleneck causes, and specific improvement suggestions** for the query below.
Before proceeding with this task, call List_databases to confirm which database to work with.

---

### Target Query for Analysis
```sql
{original_query}
```

### 1. Execution Plan Analysis
- Interpret each column (type, rows, key, Extra) based on EXPLAIN
- Specifically identify bottleneck sections and causes (full scan, filesort, temporary tables, etc.)
- Explain potential impacts in large table environments

### 2. Optimization Suggestions
- Remove unnecessary operations/conditions
- Suggest appropriate index creation SQL
- Improve JOIN, WHERE, GROUP BY, ORDER BY structure
- Assess feasibility of converting subqueries to JOINs
- Propose LIMIT or data range limitation methods
- If there are specific columns that absolutely need index settings, you may suggest them
- Before making suggestions, make sure to execute the improved query to confirm there are no issues

### 3. Improved Query Example
- Maintain same results as original
- Present improved query that can expect performance enhancement

```sql
[Improved Query]
```

### 4. Expected Performance Impact
- Expected execution time change
- Change in number of rows examined
- Change in index usage

*Output format must follow the above structure (Analysis → Suggestions → Improved Query → Impact),
use concise technical terms and explanations that both DBAs and developers can understand.*
"#
    )
}
