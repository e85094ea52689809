use pretty_assertions::assert_eq;
use sieve::{
    schema::db,
    stmt::{Expr, Field, Path, Query},
    Record,
};
use sieve_core::stmt::TypedValue;
use tests::{fixtures, DbTest};

fn beast() -> Field {
    Field::model("BeastRider", "Beast", "Beast")
}

fn beast_name() -> Field {
    Field::string("BeastRider", "Beast.Name")
}

fn riders(records: &[Record]) -> Vec<String> {
    let mut names = records
        .iter()
        .map(|record| record.get_as::<String>("RiderName").unwrap())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[tokio::test]
async fn owned_property_equality() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;

    let query = Query::new("BeastRider")
        .filter(Expr::is_not_null(beast()))
        .filter(Expr::eq(beast_name(), "Khal drogo").unwrap());

    let khal_drogo = test.db().query(&query).await.unwrap();
    assert_eq!(riders(&khal_drogo), ["Khal Drogo"]);
}

#[tokio::test]
async fn owned_property_prefix_match() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;

    let query = Query::new("BeastRider")
        .filter(Expr::is_not_null(beast()))
        .filter(Expr::starts_with(beast_name(), "Khal").unwrap());

    let khals = test.db().query(&query).await.unwrap();
    assert_eq!(riders(&khals), ["Khal Drogo"]);
    assert_eq!(
        khals[0].get_as::<String>("Beast.Name").unwrap(),
        "Khal drogo"
    );

    let executed = test.last_query();
    assert_eq!(
        executed.sql,
        "SELECT t0.\"ID\", t0.\"RIDER_NAME\", t0.\"BEAST_NAME\" \
         FROM \"BEAST_RIDER\" t0 \
         WHERE (t0.\"BEAST_NAME\" IS NOT NULL AND t0.\"BEAST_NAME\" LIKE ?1)"
    );
    assert_eq!(
        executed.params,
        [TypedValue::new(db::Type::VarChar(50), "Khal%")]
    );
}

#[tokio::test]
async fn missing_owned_object_loads_as_null() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;

    let unmounted = test
        .db()
        .query(&Query::new("BeastRider").filter(Expr::is_null(beast())))
        .await
        .unwrap();

    assert_eq!(riders(&unmounted), ["Khal Jhaqo"]);
    assert_eq!(unmounted[0].get_opt::<String>("Beast.Name").unwrap(), None);
}

#[tokio::test]
async fn typed_path_prefix_match() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;

    let query = Query::new("BeastRider")
        .filter(Path::<String>::new("BeastRider", "Beast.Name").starts_with("Dro"));

    let riders = riders(&test.db().query(&query).await.unwrap());
    assert_eq!(riders, ["Daenerys"]);
}

#[tokio::test]
async fn wildcards_in_prefix_match_literally() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;

    test.db()
        .execute_raw(
            "INSERT INTO BEAST_RIDER (ID, RIDER_NAME, BEAST_NAME) VALUES (4, 'Percy', '100% Pony')",
        )
        .await
        .unwrap();

    let query = Query::new("BeastRider").filter(Expr::starts_with(beast_name(), "100%").unwrap());
    assert_eq!(riders(&test.db().query(&query).await.unwrap()), ["Percy"]);

    // `_` matches one character unless escaped
    let query = Query::new("BeastRider").filter(Expr::starts_with(beast_name(), "Dr_g").unwrap());
    assert!(test.db().query(&query).await.unwrap().is_empty());
}
