use sieve::{
    stmt::{Expr, Field, Query},
    Catalog, Db, Translation,
};
use tests::{fixtures, DbTest};

fn assert_sync_send<T: Send + Sync>(val: T) -> T {
    val
}

#[test]
fn types_are_sync_send() {
    fn check<T: Send + Sync>() {}

    check::<Db>();
    check::<Catalog>();
    check::<Query>();
    check::<Translation>();
    check::<sieve::Error>();
}

#[tokio::test]
async fn queries_run_on_other_tasks() {
    let test = DbTest::setup(&fixtures::BEAST_RIDERS).await;
    let db = assert_sync_send(test.db().clone());

    let query = Query::new("BeastRider")
        .filter(Expr::starts_with(Field::string("BeastRider", "Beast.Name"), "Khal").unwrap());

    let handles = (0..4)
        .map(|_| {
            let db = db.clone();
            let query = query.clone();
            tokio::spawn(async move { db.query(&query).await })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let riders = handle.await.unwrap().unwrap();
        assert_eq!(riders.len(), 1);
    }

    assert_eq!(test.queries().len(), 4);
}
