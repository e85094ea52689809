use pretty_assertions::assert_eq;
use sieve::{
    stmt::{Enum, Expr, Field, Path, Query, Value},
    Record,
};
use tests::{fixtures, DbTest};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mount {
    Donkey,
    Horse,
    Mule,
    Dragon,
}

impl Enum for Mount {
    const NAME: &'static str = "Mount";

    fn variant_name(&self) -> &'static str {
        match self {
            Mount::Donkey => "Donkey",
            Mount::Horse => "Horse",
            Mount::Mule => "Mule",
            Mount::Dragon => "Dragon",
        }
    }

    fn from_variant_name(name: &str) -> Option<Self> {
        match name {
            "Donkey" => Some(Mount::Donkey),
            "Horse" => Some(Mount::Horse),
            "Mule" => Some(Mount::Mule),
            "Dragon" => Some(Mount::Dragon),
            _ => None,
        }
    }
}

fn names(records: &[Record]) -> Vec<String> {
    let mut names = records
        .iter()
        .map(|record| record.get_as::<String>("Name").unwrap())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[tokio::test]
async fn contains_enum_stored_as_string() {
    let test = DbTest::setup(&fixtures::MOUNTS).await;

    let query = Query::new("Rider").filter(
        Expr::in_list(
            Field::enumeration("Rider", "Mount", "Mount"),
            [
                Value::enumeration("Mount", "Donkey"),
                Value::enumeration("Mount", "Horse"),
                Value::enumeration("Mount", "Mule"),
            ],
        )
        .unwrap(),
    );

    let riders = test.db().query(&query).await.unwrap();
    assert_eq!(names(&riders), ["Quixote", "Sancho"]);

    let executed = test.last_query();
    assert!(
        executed.sql.ends_with("WHERE t0.\"MOUNT\" IN (?1, ?2, ?3)"),
        "{}",
        executed.sql
    );

    let params = executed
        .params
        .iter()
        .map(|param| param.value.as_str().expect("enum bound as a string"))
        .collect::<Vec<_>>();
    assert_eq!(params, ["Donkey", "Horse", "Mule"]);
}

#[tokio::test]
async fn contains_enum_stored_as_integer() {
    let test = DbTest::setup(&fixtures::MOUNTS).await;

    let query = Query::new("Rider")
        .filter(Path::<Mount>::new("Rider", "MountCode").in_list([Mount::Horse, Mount::Dragon]));

    let riders = test.db().query(&query).await.unwrap();
    assert_eq!(names(&riders), ["Daenerys", "Quixote"]);

    let params = test
        .last_query()
        .params
        .iter()
        .map(|param| param.value.as_i64().expect("enum bound as an integer"))
        .collect::<Vec<_>>();
    assert_eq!(params, [1, 10]);
}

#[tokio::test]
async fn enums_are_loaded_from_either_storage() {
    let test = DbTest::setup(&fixtures::MOUNTS).await;

    let query = Query::new("Rider").filter(Path::<String>::new("Rider", "Name").eq("Daenerys"));
    let riders = test.db().query(&query).await.unwrap();

    assert_eq!(riders.len(), 1);
    assert_eq!(riders[0].get_as::<Mount>("Mount").unwrap(), Mount::Dragon);
    assert_eq!(riders[0].get_as::<Mount>("MountCode").unwrap(), Mount::Dragon);
}

#[tokio::test]
async fn contains_null_matches_missing_mount() {
    let test = DbTest::setup(&fixtures::MOUNTS).await;

    let query = Query::new("Rider").filter(Path::<Mount>::new("Rider", "Mount").eq_opt(None));
    let riders = test.db().query(&query).await.unwrap();
    assert_eq!(names(&riders), ["Walker"]);
    assert_eq!(riders[0].get_opt::<Mount>("Mount").unwrap(), None);

    let query = Query::new("Rider").filter(
        Expr::in_list(
            Field::enumeration("Rider", "Mount", "Mount"),
            [Value::enumeration("Mount", "Mule"), Value::Null],
        )
        .unwrap(),
    );
    assert_eq!(names(&test.db().query(&query).await.unwrap()), ["Walker"]);
}
