use pretty_assertions::assert_eq;
use shale::{Column, Dialect, Plan};

#[test]
fn edits_render_in_declaration_order() {
    let mut plan = Plan::new(&Dialect::SQLITE);

    plan.table("authors", true)
        .unwrap()
        .add_column(Column::new("name", "string").unwrap())
        .unwrap()
        .create()
        .unwrap();

    plan.table("posts", true)
        .unwrap()
        .add_column(Column::new("author_id", "integer").unwrap())
        .unwrap()
        .add_index("author_id", "", "")
        .unwrap()
        .add_foreign_key("author_id", "authors")
        .unwrap()
        .alter()
        .unwrap();

    plan.table("drafts", true).unwrap().rename("archived").unwrap();
    plan.table("legacy", true).unwrap().drop().unwrap();
    plan.execute("VACUUM").unwrap();

    let batch = plan.finish().unwrap();
    assert_eq!(
        batch.statements(),
        [
            r#"CREATE TABLE "authors" ("id" integer PRIMARY KEY AUTOINCREMENT,"name" varchar(255) NOT NULL);"#,
            r#"ALTER TABLE "posts" ADD COLUMN "author_id" integer NOT NULL;"#,
            r#"CREATE INDEX "posts_author_id" ON "posts" ("author_id");"#,
            r#"ALTER TABLE "posts" ADD CONSTRAINT "posts_author_id" FOREIGN KEY ("author_id") REFERENCES "authors" ("id") ON DELETE RESTRICT ON UPDATE RESTRICT;"#,
            r#"ALTER TABLE "drafts" RENAME TO "archived";"#,
            r#"DROP TABLE "legacy""#,
            "VACUUM",
        ]
    );

    assert_eq!(batch.created().len(), 1);
    assert_eq!(batch.created()[0].table.name(), "authors");
    assert_eq!(batch.created()[0].table_at, Some(0));
    assert_eq!(batch.created()[0].sequence_at, None);
}

#[test]
fn postgresql_records_sequence_and_table_positions() {
    let mut plan = Plan::new(&Dialect::POSTGRESQL);
    plan.table("first", true).unwrap().create().unwrap();

    let batch = plan.finish().unwrap();
    assert_eq!(
        batch.statements(),
        [
            r#"CREATE SEQUENCE "first_seq";"#,
            r#"CREATE TABLE "first" ("id" int4 DEFAULT nextval('first_seq'::regclass) NOT NULL,CONSTRAINT "first_pkey" PRIMARY KEY ("id"));"#,
        ]
    );
    assert_eq!(batch.created()[0].sequence_at, Some(0));
    assert_eq!(batch.created()[0].table_at, Some(1));
}

#[test]
fn second_edit_while_editing() {
    let mut plan = Plan::new(&Dialect::MYSQL);
    plan.table("first", true).unwrap();

    let err = plan.table("second", true).unwrap_err();
    assert!(err.is_incorrect_usage());
    assert_eq!(
        err.to_string(),
        r#"incorrect usage: cannot start editing table "second" while table "first" is being edited"#
    );
}

#[test]
fn edits_require_a_table() {
    let mut plan = Plan::new(&Dialect::MYSQL);

    let err = plan
        .add_column(Column::new("title", "string").unwrap())
        .unwrap_err();
    assert!(err.is_incorrect_usage());
    assert_eq!(
        err.to_string(),
        "incorrect usage: add_column() called before table()"
    );

    assert!(plan.add_index("title", "", "").unwrap_err().is_incorrect_usage());
    assert!(plan
        .add_foreign_key("author_id", "authors")
        .unwrap_err()
        .is_incorrect_usage());
    assert!(plan.drop_column("title").unwrap_err().is_incorrect_usage());
    assert!(plan.drop_index("title").unwrap_err().is_incorrect_usage());
    assert!(plan
        .drop_foreign_key("author_id")
        .unwrap_err()
        .is_incorrect_usage());
    assert!(plan.create().unwrap_err().is_incorrect_usage());
    assert!(plan.drop().unwrap_err().is_incorrect_usage());
    assert!(plan.alter().unwrap_err().is_incorrect_usage());
    assert!(plan.rename("other").unwrap_err().is_incorrect_usage());
}

#[test]
fn unfinished_edit() {
    let mut plan = Plan::new(&Dialect::SQLITE);
    plan.table("pending", true)
        .unwrap()
        .add_column(Column::new("title", "string").unwrap())
        .unwrap();

    assert!(plan.execute("SELECT 1").unwrap_err().is_incorrect_usage());

    let err = plan.finish().unwrap_err();
    assert!(err.is_incorrect_usage());
}

#[test]
fn invalid_arguments_surface_immediately() {
    let mut plan = Plan::new(&Dialect::SQLITE);
    plan.table("posts", true).unwrap();

    let err = plan.add_index("title", "spatial", "").unwrap_err();
    assert!(err.is_invalid_argument_value());

    let err = plan
        .add_foreign_key_with("author_id", "authors", "id", "explode", "")
        .unwrap_err();
    assert!(err.is_invalid_argument_value());
    assert_eq!(
        err.to_string(),
        r#"invalid argument value: Action "explode" is not allowed on delete"#
    );

    let err = plan
        .add_column(Column::new("id", "integer").unwrap())
        .unwrap_err();
    assert!(err.is_invalid_argument_value());
}

#[test]
fn empty_column_lists_are_rejected() {
    let mut plan = Plan::new(&Dialect::SQLITE);
    plan.table("posts", true).unwrap();

    let err = plan.add_index(Vec::<&str>::new(), "", "").unwrap_err();
    assert!(err.is_invalid_argument_value());

    let err = plan
        .add_foreign_key(Vec::<&str>::new(), "authors")
        .unwrap_err();
    assert!(err.is_invalid_argument_value());
}
