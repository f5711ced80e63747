use rstest::rstest;
use tempfile::TempDir;

use pbpbench::backend::{self, Backend, Value};

/// Both adapters must behave identically through the trait for the
/// statements the scenarios issue.
#[rstest]
#[case::duckdb("duckdb")]
#[case::sqlite("sqlite")]
fn file_backed_create_insert_update_query(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let mut backend = backend::open(name, dir.path()).unwrap();
    assert_eq!(backend.name(), name);

    backend.execute("DROP TABLE IF EXISTS pbp").unwrap();
    backend
        .execute(
            "CREATE TABLE pbp (\"idx\" BIGINT, \"home_team\" TEXT, \
             \"two_point_attempt\" DOUBLE, \"total_home_score\" BIGINT, \
             \"total_away_score\" BIGINT, \"result\" BIGINT, \"total\" BIGINT)",
        )
        .unwrap();

    let columns: Vec<String> = [
        "idx",
        "home_team",
        "two_point_attempt",
        "total_home_score",
        "total_away_score",
        "result",
        "total",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    let rows: Vec<Vec<Value>> = (0..50)
        .map(|i| {
            vec![
                Value::Int(i),
                Value::Text(if i % 2 == 0 { "NE" } else { "KC" }.to_string()),
                Value::Real(if i % 10 == 0 { 1.0 } else { 0.0 }),
                Value::Int(10),
                Value::Int(3),
                Value::Int(7),
                Value::Int(13),
            ]
        })
        .collect();
    assert_eq!(backend.insert_rows("pbp", &columns, &rows).unwrap(), 50);

    // The aggregate scenario's query shape.
    let agg = backend
        .query(
            "select home_team, avg(two_point_attempt) from pbp \
             group by home_team order by home_team",
        )
        .unwrap();
    assert_eq!(agg.len(), 2);
    assert_eq!(agg[0][0], Value::Text("KC".to_string()));
    assert_eq!(agg[1][0], Value::Text("NE".to_string()));
    assert!(matches!(agg[0][1], Value::Real(_)));

    // The batch update scenario's statement shape.
    let affected = backend
        .execute(
            "UPDATE pbp SET total_home_score = 10, total_away_score = 20, \
             result = -10, total = 30 WHERE home_team = 'NE'",
        )
        .unwrap();
    assert_eq!(affected, 25);

    // An index outside the live row count is a no-op, never an error.
    let affected = backend
        .execute("UPDATE pbp SET total = 0 WHERE idx = 1230854")
        .unwrap();
    assert_eq!(affected, 0);

    backend.close().unwrap();
}

#[rstest]
#[case::duckdb("duckdb", "nfl_pbp.duckdb")]
#[case::sqlite("sqlite", "nfl_pbp.db")]
fn open_creates_engine_file(#[case] name: &str, #[case] file: &str) {
    let dir = TempDir::new().unwrap();
    let backend = backend::open(name, dir.path()).unwrap();
    backend.close().unwrap();
    assert!(dir.path().join(file).exists());
}

#[test]
fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut backend = backend::open("sqlite", dir.path()).unwrap();
        backend.execute("CREATE TABLE t (n BIGINT)").unwrap();
        backend.execute("INSERT INTO t VALUES (42)").unwrap();
        backend.close().unwrap();
    }
    let mut backend = backend::open("sqlite", dir.path()).unwrap();
    let rows = backend.query("SELECT n FROM t").unwrap();
    assert_eq!(rows, vec![vec![Value::Int(42)]]);
    backend.close().unwrap();
}
