use pretty_assertions::assert_eq;
use sieve::{
    schema::db,
    stmt::{EntityRef, Expr, Field, Navigation, Query, Value},
    Record,
};
use sieve_core::stmt::TypedValue;
use tests::{fixtures, DbTest};

fn owner() -> Field {
    Field::model("Car", "Owner", "Person")
}

fn person(id: i64, name: &str) -> EntityRef {
    EntityRef::new("Person").with("Id", id).with("Name", name)
}

fn models(records: &[Record]) -> Vec<String> {
    let mut models = records
        .iter()
        .map(|record| record.get_as::<String>("Model").unwrap())
        .collect::<Vec<_>>();
    models.sort();
    models
}

#[tokio::test]
async fn owners_contains_car_owner() {
    let test = DbTest::setup(&fixtures::CAR_OWNERS).await;
    let owners = [person(1, "Alice"), person(2, "Bob")];

    let query = Query::new("Car").filter(Expr::in_list(owner(), owners).unwrap());
    let cars = test.db().query(&query).await.unwrap();

    assert_eq!(models(&cars), ["Beetle", "Mini"]);

    let executed = test.last_query();
    assert_eq!(
        executed.sql,
        "SELECT t0.\"ID\", t0.\"MODEL\" FROM \"CAR\" t0 WHERE t0.\"OWNER_ID\" IN (?1, ?2)"
    );
    assert_eq!(
        executed.params,
        [1, 2]
            .map(|id| TypedValue::new(db::Type::Numeric(Some((19, 0))), id))
            .to_vec()
    );
}

#[tokio::test]
async fn owner_equality() {
    let test = DbTest::setup(&fixtures::CAR_OWNERS).await;

    let owner = Navigation::new("Car", "Owner", "Person");
    let query = Query::new("Car").filter(owner.eq(person(3, "Carol")).unwrap());
    assert_eq!(models(&test.db().query(&query).await.unwrap()), ["Fiesta"]);
}

#[tokio::test]
async fn no_owners_match_nothing() {
    let test = DbTest::setup(&fixtures::CAR_OWNERS).await;

    let query = Query::new("Car").filter(Expr::in_list(owner(), Vec::<EntityRef>::new()).unwrap());
    assert!(test.db().query(&query).await.unwrap().is_empty());
    assert!(test.last_query().sql.ends_with("WHERE 1 = 0"));
}

#[tokio::test]
async fn cars_without_owner() {
    let test = DbTest::setup(&fixtures::CAR_OWNERS).await;

    let query = Query::new("Car").filter(Expr::eq(owner(), Value::Null).unwrap());
    assert_eq!(models(&test.db().query(&query).await.unwrap()), ["Trabant"]);
}

#[tokio::test]
async fn property_of_owner() {
    let test = DbTest::setup(&fixtures::CAR_OWNERS).await;

    let query = Query::new("Car")
        .filter(Expr::starts_with(Field::string("Car", "Owner.Name"), "Car").unwrap());
    let cars = test.db().query(&query).await.unwrap();

    assert_eq!(models(&cars), ["Fiesta"]);
    assert!(
        test.last_query()
            .sql
            .contains("LEFT JOIN \"PERSON\" t1 ON t1.\"ID\" = t0.\"OWNER_ID\""),
    );
}
