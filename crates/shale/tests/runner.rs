use pretty_assertions::assert_eq;
use shale::{Column, Connection, Dialect, Error, Migration, Plan, Response, Result, Runner};

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Start,
    Execute(String),
    Commit,
    Rollback,
}

fn exec(sql: &str) -> Op {
    Op::Execute(sql.to_string())
}

/// Records every call and fails statements containing one of `fail_on`.
#[derive(Debug)]
struct MockConnection {
    dialect: Dialect,
    log: Arc<Mutex<Vec<Op>>>,
    fail_on: Vec<&'static str>,
    fail_commit: bool,
}

impl MockConnection {
    fn new(dialect: Dialect) -> (MockConnection, Arc<Mutex<Vec<Op>>>) {
        let log = Arc::new(Mutex::new(vec![]));
        let connection = MockConnection {
            dialect,
            log: log.clone(),
            fail_on: vec![],
            fail_commit: false,
        };
        (connection, log)
    }

    fn fail_on(mut self, pattern: &'static str) -> MockConnection {
        self.fail_on.push(pattern);
        self
    }

    fn fail_commit(mut self) -> MockConnection {
        self.fail_commit = true;
        self
    }
}

#[async_trait::async_trait]
impl Connection for MockConnection {
    fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    async fn execute(&mut self, sql: &str) -> Result<Response> {
        self.log.lock().unwrap().push(exec(sql));

        if self.fail_on.iter().any(|pattern| sql.contains(pattern)) {
            return Err(Error::query_execution(
                sql,
                std::io::Error::other("statement rejected"),
            ));
        }

        Ok(Response::count(0))
    }

    async fn start_transaction(&mut self) -> Result<()> {
        self.log.lock().unwrap().push(Op::Start);
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        self.log.lock().unwrap().push(Op::Commit);

        if self.fail_commit {
            return Err(Error::query_execution(
                "COMMIT",
                std::io::Error::other("serialization failure"),
            ));
        }

        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        self.log.lock().unwrap().push(Op::Rollback);
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Creates `first` and `second`, then drops both on the way down.
struct TwoTables {
    transactional: bool,
}

impl Migration for TwoTables {
    fn up(&self, plan: &mut Plan<'_>) -> Result<()> {
        plan.table("first", true)?.create()?;
        plan.table("second", true)?.create()?;
        Ok(())
    }

    fn down(&self, plan: &mut Plan<'_>) -> Result<()> {
        plan.table("second", true)?.drop()?;
        plan.table("first", true)?.drop()?;
        Ok(())
    }

    fn use_transaction(&self) -> bool {
        self.transactional
    }
}

const SQLITE_FIRST: &str = r#"CREATE TABLE "first" ("id" integer PRIMARY KEY AUTOINCREMENT);"#;
const SQLITE_SECOND: &str = r#"CREATE TABLE "second" ("id" integer PRIMARY KEY AUTOINCREMENT);"#;

#[tokio::test]
async fn migrate_without_transaction() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    let responses = runner.migrate().await.unwrap();
    assert_eq!(responses.len(), 2);

    assert_eq!(
        *log.lock().unwrap(),
        [exec(SQLITE_FIRST), exec(SQLITE_SECOND)]
    );
    assert_eq!(runner.executed_queries(), [SQLITE_FIRST, SQLITE_SECOND]);
}

#[tokio::test]
async fn migrate_in_transaction() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let mut runner = Runner::new(TwoTables { transactional: true }, connection);

    runner.migrate().await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        [
            Op::Start,
            exec(SQLITE_FIRST),
            exec(SQLITE_SECOND),
            Op::Commit
        ]
    );
}

#[tokio::test]
async fn failed_create_rolls_back_and_drops_earlier_tables() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let connection = connection.fail_on(r#"CREATE TABLE "second""#);
    let mut runner = Runner::new(TwoTables { transactional: true }, connection);

    let err = runner.migrate().await.unwrap_err();
    assert!(err.is_query_execution());
    assert_eq!(
        err.to_string(),
        format!("failed to execute `{SQLITE_SECOND}`: statement rejected")
    );

    assert_eq!(
        *log.lock().unwrap(),
        [
            Op::Start,
            exec(SQLITE_FIRST),
            exec(SQLITE_SECOND),
            Op::Rollback,
            exec(r#"DROP TABLE "first""#),
        ]
    );
    assert!(runner.executed_queries().is_empty());
}

#[tokio::test]
async fn compensation_drops_postgresql_sequences() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::POSTGRESQL);
    let connection = connection.fail_on(r#"CREATE SEQUENCE "second_seq""#);
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    runner.migrate().await.unwrap_err();

    assert_eq!(
        *log.lock().unwrap(),
        [
            exec(r#"CREATE SEQUENCE "first_seq";"#),
            exec(r#"CREATE TABLE "first" ("id" int4 DEFAULT nextval('first_seq'::regclass) NOT NULL,CONSTRAINT "first_pkey" PRIMARY KEY ("id"));"#),
            exec(r#"CREATE SEQUENCE "second_seq";"#),
            exec(r#"DROP TABLE "first""#),
            exec(r#"DROP SEQUENCE IF EXISTS "first_seq""#),
        ]
    );
}

#[tokio::test]
async fn compensation_drops_sequence_of_failed_table() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::POSTGRESQL);
    let connection = connection.fail_on(r#"CREATE TABLE "second""#);
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    let err = runner.migrate().await.unwrap_err();
    assert!(err.is_query_execution());

    assert_eq!(
        *log.lock().unwrap(),
        [
            exec(r#"CREATE SEQUENCE "first_seq";"#),
            exec(r#"CREATE TABLE "first" ("id" int4 DEFAULT nextval('first_seq'::regclass) NOT NULL,CONSTRAINT "first_pkey" PRIMARY KEY ("id"));"#),
            exec(r#"CREATE SEQUENCE "second_seq";"#),
            exec(r#"CREATE TABLE "second" ("id" int4 DEFAULT nextval('second_seq'::regclass) NOT NULL,CONSTRAINT "second_pkey" PRIMARY KEY ("id"));"#),
            exec(r#"DROP SEQUENCE IF EXISTS "second_seq""#),
            exec(r#"DROP TABLE "first""#),
            exec(r#"DROP SEQUENCE IF EXISTS "first_seq""#),
        ]
    );
}

#[tokio::test]
async fn failed_commit_rolls_back() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let connection = connection.fail_commit();
    let mut runner = Runner::new(TwoTables { transactional: true }, connection);

    let err = runner.migrate().await.unwrap_err();
    assert!(err.is_query_execution());

    assert_eq!(
        *log.lock().unwrap(),
        [
            Op::Start,
            exec(SQLITE_FIRST),
            exec(SQLITE_SECOND),
            Op::Commit,
            Op::Rollback,
        ]
    );
    assert!(runner.executed_queries().is_empty());
}

#[tokio::test]
async fn nothing_to_compensate() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let connection = connection.fail_on(r#"CREATE TABLE "first""#);
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    runner.migrate().await.unwrap_err();

    assert_eq!(*log.lock().unwrap(), [exec(SQLITE_FIRST)]);
}

struct IndexedTable;

impl Migration for IndexedTable {
    fn up(&self, plan: &mut Plan<'_>) -> Result<()> {
        plan.table("posts", true)?
            .add_column(Column::new("title", "string")?)?
            .add_index("title", "unique", "")?
            .create()?;
        Ok(())
    }

    fn down(&self, plan: &mut Plan<'_>) -> Result<()> {
        plan.table("posts", true)?.drop()?;
        Ok(())
    }
}

#[tokio::test]
async fn failed_index_drops_its_table() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let connection = connection.fail_on("CREATE UNIQUE INDEX");
    let mut runner = Runner::new(IndexedTable, connection);

    runner.migrate().await.unwrap_err();

    assert_eq!(
        *log.lock().unwrap(),
        [
            exec(r#"CREATE TABLE "posts" ("id" integer PRIMARY KEY AUTOINCREMENT,"title" varchar(255) NOT NULL);"#),
            exec(r#"CREATE UNIQUE INDEX "posts_title" ON "posts" ("title");"#),
            exec(r#"DROP TABLE "posts""#),
        ]
    );
}

#[tokio::test]
async fn failed_compensation_keeps_original_error() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let connection = connection
        .fail_on(r#"CREATE TABLE "second""#)
        .fail_on("DROP TABLE");
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    let err = runner.migrate().await.unwrap_err();
    assert!(err.to_string().contains(r#"CREATE TABLE "second""#));

    assert_eq!(
        log.lock().unwrap().last(),
        Some(&exec(r#"DROP TABLE "first""#))
    );
}

#[tokio::test]
async fn rollback_runs_down() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::MYSQL);
    let mut runner = Runner::new(TwoTables { transactional: false }, connection);

    runner.rollback().await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        [exec("DROP TABLE `second`"), exec("DROP TABLE `first`")]
    );
    assert_eq!(
        runner.executed_queries(),
        ["DROP TABLE `second`", "DROP TABLE `first`"]
    );
}

struct Unfinished;

impl Migration for Unfinished {
    fn up(&self, plan: &mut Plan<'_>) -> Result<()> {
        plan.table("first", true)?.create()?;
        plan.table("dangling", true)?;
        Ok(())
    }

    fn down(&self, _plan: &mut Plan<'_>) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn unfinished_edit_executes_nothing() {
    init_tracing();

    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let mut runner = Runner::new(Unfinished, connection);

    let err = runner.migrate().await.unwrap_err();
    assert!(err.is_incorrect_usage());
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn plan_renders_without_executing() {
    let (connection, log) = MockConnection::new(Dialect::SQLITE);
    let runner = Runner::new(TwoTables { transactional: true }, connection);

    let batch = runner.plan(shale::Direction::Up).unwrap();
    assert_eq!(batch.statements(), [SQLITE_FIRST, SQLITE_SECOND]);
    assert_eq!(batch.created().len(), 2);

    assert!(log.lock().unwrap().is_empty());
    assert!(runner.executed_queries().is_empty());
}

#[tokio::test]
async fn boxed_migration_and_borrowed_connection() {
    let (mut connection, log) = MockConnection::new(Dialect::SQLITE);
    let migration: Box<dyn Migration> = Box::new(TwoTables { transactional: false });

    {
        let mut runner = Runner::new(migration, &mut connection);
        runner.migrate().await.unwrap();
    }

    assert_eq!(log.lock().unwrap().len(), 2);
    assert_eq!(connection.dialect().name, "sqlite");
}
