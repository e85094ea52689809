use pretty_assertions::assert_eq;
use sieve::{
    stmt::{Path, Query},
    Catalog, ConnectionConfig, Db,
};
use tests::fixtures;

fn catalog() -> Catalog {
    Catalog::from_json(fixtures::BEAST_RIDERS.catalog).unwrap()
}

#[tokio::test]
async fn connect_from_configuration() {
    tests::init_logging();

    let config = ConnectionConfig::from_json(r#"{ "Url": "sqlite::memory:", "Logging": {} }"#).unwrap();
    let db = Db::connect(&config, catalog()).await.unwrap();

    for sql in fixtures::BEAST_RIDERS.setup {
        db.execute_raw(sql).await.unwrap();
    }

    let query = Query::new("BeastRider").filter(Path::<String>::new("BeastRider", "RiderName").eq("Daenerys"));
    let riders = db.query(&query).await.unwrap();

    assert_eq!(riders.len(), 1);
    assert_eq!(riders[0].get_as::<String>("Beast.Name").unwrap(), "Drogon");
    assert_eq!(riders[0].get_as::<i64>("Id").unwrap(), 2);
}

#[tokio::test]
async fn connection_uses_dialect_of_driver() {
    let db = Db::connect(&ConnectionConfig::sqlite_in_memory(), catalog())
        .await
        .unwrap();

    let translation = db
        .translate(&Query::new("BeastRider").filter(Path::<i64>::new("BeastRider", "Id").eq(1)))
        .unwrap();
    assert!(translation.sql.ends_with("WHERE t0.\"ID\" = ?1"), "{}", translation.sql);
}

#[tokio::test]
async fn unsupported_scheme() {
    let config = ConnectionConfig::from_json(
        r#"{
            "DatabaseServer": "db.example.com",
            "UserId": "scott",
            "Password": "tiger",
            "ServiceName": "ORCL"
        }"#,
    )
    .unwrap();

    let err = Db::connect(&config, catalog()).await.unwrap_err();
    assert!(err.is_invalid_connection_url(), "{err}");
    assert!(!err.to_string().contains("tiger"), "{err}");
}

#[tokio::test]
async fn invalid_sql_is_a_driver_error() {
    let db = Db::connect(&ConnectionConfig::sqlite_in_memory(), catalog())
        .await
        .unwrap();

    // The tables were never created
    let err = db.query(&Query::new("BeastRider")).await.unwrap_err();
    assert!(err.is_driver_operation_failed(), "{err}");
}
