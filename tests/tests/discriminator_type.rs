use pretty_assertions::assert_eq;
use sieve::{
    schema::db,
    stmt::{Expr, Field, Query},
    Record,
};
use sieve_core::stmt::TypedValue;
use tests::{fixtures, DbTest};

fn names(records: &[Record]) -> Vec<String> {
    let mut names = records
        .iter()
        .map(|record| record.get_as::<String>("Name").unwrap())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[tokio::test]
async fn derived_entity_query_binds_discriminator_as_column_type() {
    let test = DbTest::setup(&fixtures::VEHICLES).await;

    let cars = test.db().query(&Query::new("Car")).await.unwrap();
    assert_eq!(names(&cars), ["Beetle", "Model T"]);

    let query = test.last_query();
    assert_eq!(
        query.sql,
        "SELECT t0.\"ID\", t0.\"NAME\", t0.\"DOORS\" FROM \"VEHICLE\" t0 WHERE t0.\"KIND\" = ?1"
    );
    assert_eq!(
        query.params,
        [TypedValue::new(db::Type::NVarChar(10), "Car")]
    );
}

#[tokio::test]
async fn type_test_on_base_query() {
    let test = DbTest::setup(&fixtures::VEHICLES).await;

    let trucks = test
        .db()
        .query(&Query::new("Vehicle").filter(Expr::type_is("Truck")))
        .await
        .unwrap();
    assert_eq!(names(&trucks), ["Actros"]);

    // Base projection only
    assert_eq!(
        trucks[0].iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["Id", "Name"]
    );
}

#[tokio::test]
async fn derived_fields_are_loaded() {
    let test = DbTest::setup(&fixtures::VEHICLES).await;

    let query = Query::new("Car").filter(Expr::eq(Field::i64("Car", "Doors"), 4).unwrap());
    let cars = test.db().query(&query).await.unwrap();

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].get_as::<String>("Name").unwrap(), "Model T");
    assert_eq!(cars[0].get_opt::<i64>("Doors").unwrap(), Some(4));
    assert!(cars[0].get("Payload").is_none());
}

#[tokio::test]
async fn executed_sql_matches_translation() {
    let test = DbTest::setup(&fixtures::VEHICLES).await;
    let query = Query::new("Vehicle").filter(Expr::type_is("Car"));

    let first = test.db().translate(&query).unwrap();
    let second = test.db().translate(&query).unwrap();
    assert_eq!(first, second);

    test.db().query(&query).await.unwrap();
    test.db().query(&query).await.unwrap();

    let executed = test.queries();
    assert_eq!(executed.len(), 2);
    for query in executed {
        assert_eq!(query.sql, first.sql);
        assert_eq!(query.params, first.params);
    }
}
