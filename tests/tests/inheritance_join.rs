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
async fn derived_query_does_not_join_owned_tables() {
    let test = DbTest::setup(&fixtures::ANIMALS).await;

    let query = Query::new("Cat")
        .filter(Expr::starts_with(Field::string("Animal", "Name"), "T").unwrap());
    let cats = test.db().query(&query).await.unwrap();

    assert_eq!(names(&cats), ["Tom"]);
    assert_eq!(cats[0].get_opt::<i64>("Lives").unwrap(), Some(9));

    let executed = test.last_query();
    assert_eq!(
        executed.sql,
        "SELECT t0.\"ID\", t0.\"NAME\", t0.\"LIVES\" \
         FROM \"ANIMAL\" t0 \
         WHERE (t0.\"SPECIES\" = ?1 AND t0.\"NAME\" LIKE ?2)"
    );
    assert_eq!(
        executed.params,
        [
            TypedValue::new(db::Type::Numeric(Some((5, 0))), 1),
            TypedValue::new(db::Type::VarChar(50), "T%"),
        ]
    );
}

#[tokio::test]
async fn owned_table_of_derived_entity_is_joined_once() {
    let test = DbTest::setup(&fixtures::ANIMALS).await;

    let colour = || Field::string("Cat", "Collar.Colour");
    let query = Query::new("Cat").filter(Expr::or(
        Expr::eq(colour(), "Red").unwrap(),
        Expr::starts_with(colour(), "Bl").unwrap(),
    ));

    let cats = test.db().query(&query).await.unwrap();
    assert_eq!(names(&cats), ["Tom"]);

    let sql = test.last_query().sql;
    assert_eq!(sql.matches("LEFT JOIN").count(), 1, "{sql}");
    assert!(
        sql.contains("LEFT JOIN \"ANIMAL_COLLAR\" t1 ON t1.\"ANIMAL_ID\" = t0.\"ID\""),
        "{sql}"
    );
}

#[tokio::test]
async fn numeric_discriminator_literal_is_coerced() {
    let test = DbTest::setup(&fixtures::ANIMALS).await;

    let dogs = test
        .db()
        .query(&Query::new("Animal").filter(Expr::type_is("Dog")))
        .await
        .unwrap();

    assert_eq!(names(&dogs), ["Rex"]);
    assert_eq!(
        test.last_query().params,
        [TypedValue::new(db::Type::Numeric(Some((5, 0))), 2)]
    );
}

#[tokio::test]
async fn base_query_has_no_filter() {
    let test = DbTest::setup(&fixtures::ANIMALS).await;

    let animals = test.db().query(&Query::new("Animal")).await.unwrap();
    assert_eq!(names(&animals), ["Felix", "Rex", "Tom"]);
    assert_eq!(
        test.last_query().sql,
        "SELECT t0.\"ID\", t0.\"NAME\" FROM \"ANIMAL\" t0"
    );
}
