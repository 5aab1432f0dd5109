use super::{Comma, Formatter, ToSql};

use crate::stmt::{self, AlterTableAction};

use shale_core::{
    driver::{DropIndexStyle, IndexMethodPlacement},
    schema::{Action, IndexMethod, IndexType},
};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::AlterTable(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateSequence(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::DropSequence(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

struct AddColumn<'a>(&'a stmt::ColumnDef);

impl ToSql for AddColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ADD COLUMN ", self.0);
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ALTER TABLE ", &self.name, " ");

        match &self.action {
            AlterTableAction::RenameTo(new_name) => fmt!(f, "RENAME TO ", new_name),
            AlterTableAction::DropColumn(column) => fmt!(f, "DROP COLUMN ", column),
            AlterTableAction::DropForeignKey(name) => {
                let keyword = f.serializer.dialect.drop_foreign_key;
                fmt!(f, keyword, " ", name)
            }
            AlterTableAction::AddColumns(columns) => {
                fmt!(f, Comma(columns.iter().map(AddColumn)))
            }
            AlterTableAction::AddForeignKey(foreign_key) => fmt!(f, "ADD ", foreign_key),
        }
    }
}

/// `USING <method>`, preceded by a space
struct Using(IndexMethod);

impl ToSql for Using {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            IndexMethod::Default => {}
            IndexMethod::Btree => fmt!(f, " USING BTREE"),
            IndexMethod::Hash => fmt!(f, " USING HASH"),
        }
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ty = match self.ty {
            IndexType::Normal => "",
            IndexType::Unique => "UNIQUE ",
            IndexType::Fulltext => "FULLTEXT ",
        };
        let columns = Comma(&self.columns);
        let placement = f.serializer.dialect.index_method;

        fmt!(f, "CREATE ", ty, "INDEX ", &self.name, " ON ", &self.on);

        match placement {
            IndexMethodPlacement::BeforeColumns => {
                fmt!(f, Using(self.method), " (", columns, ")")
            }
            IndexMethodPlacement::AfterColumns => {
                fmt!(f, " (", columns, ")", Using(self.method))
            }
            IndexMethodPlacement::Ignored => fmt!(f, " (", columns, ")"),
        }
    }
}

impl ToSql for &stmt::CreateSequence {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE SEQUENCE ", &self.name);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns);

        if let Some(primary_key) = &self.primary_key {
            fmt!(f, ",", primary_key);
        }

        for foreign_key in &self.foreign_keys {
            fmt!(f, ",", foreign_key);
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::PrimaryKeyDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(constraint) = &self.constraint {
            fmt!(f, "CONSTRAINT ", constraint, " ");
        }

        fmt!(f, "PRIMARY KEY (", Comma(&self.columns), ")");
    }
}

impl ToSql for &stmt::ForeignKeyDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "CONSTRAINT ",
            &self.name,
            " FOREIGN KEY (",
            Comma(&self.columns),
            ") REFERENCES ",
            &self.referenced_table,
            " (",
            Comma(&self.referenced_columns),
            ")",
            OnEvent("DELETE", self.on_delete),
            OnEvent("UPDATE", self.on_update),
        );
    }
}

/// ` ON <event> <action>`, omitted for the default action
struct OnEvent(&'static str, Action);

impl ToSql for OnEvent {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(action) = self.1.as_sql() {
            fmt!(f, " ON ", self.0, " ", action);
        }
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.dialect.drop_index {
            DropIndexStyle::AlterTable => {
                fmt!(f, "ALTER TABLE ", &self.on, " DROP INDEX ", &self.name)
            }
            DropIndexStyle::Standalone => fmt!(f, "DROP INDEX ", &self.name),
        }
    }
}

impl ToSql for &stmt::DropSequence {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DROP SEQUENCE ");

        if self.if_exists {
            fmt!(f, "IF EXISTS ");
        }

        fmt!(f, &self.name);
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DROP TABLE ", &self.name);
    }
}
