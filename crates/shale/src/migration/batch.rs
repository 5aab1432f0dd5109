use shale_core::schema::Table;
use shale_sql::QueryBuilder;

/// Statements of one migration run, in execution order.
///
/// Alongside the statements, the batch remembers which statements create tables and
/// sequences so a failed run can drop what it already created.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    statements: Vec<String>,

    /// In creation order
    created: Vec<Created>,
}

/// Objects created by a batch, with the positions of the statements creating them.
#[derive(Debug, Clone)]
pub struct Created {
    pub table: Table,

    /// Position of the `CREATE TABLE` statement. `None` when the table already existed.
    pub table_at: Option<usize>,

    /// Position of the `CREATE SEQUENCE` statement backing the table's auto incrementing
    /// column
    pub sequence_at: Option<usize>,
}

impl Created {
    /// Statements dropping whatever statements before `position` created.
    fn undo(&self, builder: &QueryBuilder<'_>, position: usize) -> Vec<String> {
        let ran = |at: Option<usize>| at.is_some_and(|at| at < position);

        if ran(self.table_at) {
            builder.drop_table(&self.table)
        } else if ran(self.sequence_at) {
            builder.drop_sequence(&self.table)
        } else {
            vec![]
        }
    }
}

impl Batch {
    pub fn new() -> Batch {
        Batch::default()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn push(&mut self, sql: impl Into<String>) {
        self.statements.push(sql.into());
    }

    pub fn extend(&mut self, statements: impl IntoIterator<Item = String>) {
        self.statements.extend(statements);
    }

    pub fn created(&self) -> &[Created] {
        &self.created
    }

    pub fn record_created(&mut self, created: Created) {
        debug_assert!(created
            .table_at
            .into_iter()
            .chain(created.sequence_at)
            .all(|position| position < self.statements.len()));
        self.created.push(created);
    }

    /// Statements undoing what the batch created before `position`, most recent first, grouped
    /// by table.
    pub fn undo_before<'a>(
        &'a self,
        builder: &'a QueryBuilder<'a>,
        position: usize,
    ) -> impl Iterator<Item = (&'a Table, Vec<String>)> + 'a {
        self.created
            .iter()
            .rev()
            .map(move |created| (&created.table, created.undo(builder, position)))
            .filter(|(_, statements)| !statements.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shale_core::Dialect;

    fn created(name: &str, sequence_at: Option<usize>, table_at: Option<usize>) -> Created {
        Created {
            table: Table::new(name, true),
            table_at,
            sequence_at,
        }
    }

    #[test]
    fn undo_scans_backward() {
        let builder = QueryBuilder::new(&Dialect::SQLITE);

        let mut batch = Batch::new();
        batch.extend(["a", "b", "c", "d"].map(String::from));
        batch.record_created(created("first", None, Some(0)));
        batch.record_created(created("second", None, Some(2)));
        batch.record_created(created("third", None, Some(3)));

        let names: Vec<_> = batch
            .undo_before(&builder, 3)
            .map(|(table, _)| table.name())
            .collect();
        assert_eq!(names, ["second", "first"]);

        assert_eq!(batch.undo_before(&builder, 0).count(), 0);
        assert_eq!(batch.undo_before(&builder, 4).count(), 3);
    }

    #[test]
    fn undo_drops_orphaned_sequence() {
        let builder = QueryBuilder::new(&Dialect::POSTGRESQL);

        let mut batch = Batch::new();
        batch.extend(["a", "b"].map(String::from));
        batch.record_created(created("pending", Some(0), Some(1)));

        let undo: Vec<_> = batch.undo_before(&builder, 1).collect();
        assert_eq!(undo.len(), 1);
        assert_eq!(undo[0].1, [r#"DROP SEQUENCE IF EXISTS "pending_seq""#]);

        let undo: Vec<_> = batch.undo_before(&builder, 2).collect();
        assert_eq!(
            undo[0].1,
            [
                r#"DROP TABLE "pending""#,
                r#"DROP SEQUENCE IF EXISTS "pending_seq""#
            ]
        );
    }
}
