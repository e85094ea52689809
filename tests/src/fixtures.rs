//! Catalogs, tables and rows of the reproduction scenarios.
//!
//! Catalogs spell column types the Oracle way. The SQLite tables behind
//! them use the same type names without `CHAR` length semantics, which
//! SQLite cannot parse.

/// A catalog declaration plus the statements creating and filling its
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub catalog: &'static str,
    pub setup: &'static [&'static str],
}

/// `Vehicle` hierarchy stored in one table, told apart by a `KIND` column.
pub const VEHICLES: Fixture = Fixture {
    catalog: r#"{
        "tables": [
            {
                "name": "VEHICLE",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "KIND", "type": "NVARCHAR2(10)" },
                    { "name": "NAME", "type": "VARCHAR2(50 CHAR)" },
                    { "name": "DOORS", "type": "NUMBER(2, 0)", "nullable": true },
                    { "name": "PAYLOAD", "type": "NUMBER(10, 0)", "nullable": true }
                ],
                "primary_key": ["ID"]
            }
        ],
        "entities": [
            {
                "name": "Vehicle",
                "table": "VEHICLE",
                "key": ["Id"],
                "discriminator": { "column": "KIND" },
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "Name", "type": "string", "column": "NAME" }
                ]
            },
            {
                "name": "Car",
                "extends": "Vehicle",
                "discriminator_value": "Car",
                "fields": [{ "name": "Doors", "type": "integer", "column": "DOORS", "nullable": true }]
            },
            {
                "name": "Truck",
                "extends": "Vehicle",
                "discriminator_value": "Truck",
                "fields": [{ "name": "Payload", "type": "integer", "column": "PAYLOAD", "nullable": true }]
            }
        ]
    }"#,
    setup: &[
        "CREATE TABLE VEHICLE (
            ID      NUMBER (19, 0) NOT NULL PRIMARY KEY,
            KIND    NVARCHAR2 (10) NOT NULL,
            NAME    VARCHAR2 (50) NOT NULL,
            DOORS   NUMBER (2, 0),
            PAYLOAD NUMBER (10, 0)
        )",
        "INSERT INTO VEHICLE (ID, KIND, NAME, DOORS) VALUES (1, 'Car', 'Beetle', 2)",
        "INSERT INTO VEHICLE (ID, KIND, NAME, DOORS) VALUES (2, 'Car', 'Model T', 4)",
        "INSERT INTO VEHICLE (ID, KIND, NAME, PAYLOAD) VALUES (3, 'Truck', 'Actros', 18000)",
    ],
};

/// A rider with an optional owned beast whose columns live in the rider's
/// table.
pub const BEAST_RIDERS: Fixture = Fixture {
    catalog: r#"{
        "tables": [
            {
                "name": "BEAST_RIDER",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "RIDER_NAME", "type": "VARCHAR2(50 CHAR)" },
                    { "name": "BEAST_NAME", "type": "VARCHAR2(50 CHAR)", "nullable": true }
                ],
                "primary_key": ["ID"]
            }
        ],
        "entities": [
            {
                "name": "BeastRider",
                "table": "BEAST_RIDER",
                "key": ["Id"],
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "RiderName", "type": "string", "column": "RIDER_NAME" },
                    {
                        "name": "Beast",
                        "nullable": true,
                        "owned": {
                            "type": "Beast",
                            "fields": [{ "name": "Name", "type": "string", "column": "BEAST_NAME" }]
                        }
                    }
                ]
            }
        ]
    }"#,
    setup: &[
        "CREATE TABLE BEAST_RIDER (
            ID         NUMBER (19, 0) NOT NULL PRIMARY KEY,
            RIDER_NAME VARCHAR2 (50) NOT NULL,
            BEAST_NAME VARCHAR2 (50)
        )",
        "INSERT INTO BEAST_RIDER (ID, RIDER_NAME, BEAST_NAME) VALUES (1, 'Khal Drogo', 'Khal drogo')",
        "INSERT INTO BEAST_RIDER (ID, RIDER_NAME, BEAST_NAME) VALUES (2, 'Daenerys', 'Drogon')",
        "INSERT INTO BEAST_RIDER (ID, RIDER_NAME) VALUES (3, 'Khal Jhaqo')",
    ],
};

/// Cars referencing their owner by foreign key.
pub const CAR_OWNERS: Fixture = Fixture {
    catalog: r#"{
        "tables": [
            {
                "name": "PERSON",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "NAME", "type": "VARCHAR2(50 CHAR)" }
                ],
                "primary_key": ["ID"]
            },
            {
                "name": "CAR",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "MODEL", "type": "VARCHAR2(50 CHAR)" },
                    { "name": "OWNER_ID", "type": "NUMBER(19, 0)", "nullable": true }
                ],
                "primary_key": ["ID"]
            }
        ],
        "entities": [
            {
                "name": "Person",
                "table": "PERSON",
                "key": ["Id"],
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "Name", "type": "string", "column": "NAME" }
                ]
            },
            {
                "name": "Car",
                "table": "CAR",
                "key": ["Id"],
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "Model", "type": "string", "column": "MODEL" },
                    {
                        "name": "Owner",
                        "references": "Person",
                        "foreign_key": ["OWNER_ID"],
                        "nullable": true
                    }
                ]
            }
        ]
    }"#,
    setup: &[
        "CREATE TABLE PERSON (
            ID   NUMBER (19, 0) NOT NULL PRIMARY KEY,
            NAME VARCHAR2 (50) NOT NULL
        )",
        "CREATE TABLE CAR (
            ID       NUMBER (19, 0) NOT NULL PRIMARY KEY,
            MODEL    VARCHAR2 (50) NOT NULL,
            OWNER_ID NUMBER (19, 0) REFERENCES PERSON (ID)
        )",
        "INSERT INTO PERSON (ID, NAME) VALUES (1, 'Alice')",
        "INSERT INTO PERSON (ID, NAME) VALUES (2, 'Bob')",
        "INSERT INTO PERSON (ID, NAME) VALUES (3, 'Carol')",
        "INSERT INTO CAR (ID, MODEL, OWNER_ID) VALUES (10, 'Beetle', 1)",
        "INSERT INTO CAR (ID, MODEL, OWNER_ID) VALUES (11, 'Mini', 2)",
        "INSERT INTO CAR (ID, MODEL, OWNER_ID) VALUES (12, 'Fiesta', 3)",
        "INSERT INTO CAR (ID, MODEL) VALUES (13, 'Trabant')",
    ],
};

/// A hierarchy whose derived entity owns an object stored in its own table.
pub const ANIMALS: Fixture = Fixture {
    catalog: r#"{
        "tables": [
            {
                "name": "ANIMAL",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "SPECIES", "type": "NUMBER(5, 0)" },
                    { "name": "NAME", "type": "VARCHAR2(50 CHAR)" },
                    { "name": "LIVES", "type": "NUMBER(1, 0)", "nullable": true }
                ],
                "primary_key": ["ID"]
            },
            {
                "name": "ANIMAL_COLLAR",
                "columns": [
                    { "name": "ANIMAL_ID", "type": "NUMBER(19, 0)" },
                    { "name": "COLOUR", "type": "VARCHAR2(20 CHAR)" }
                ],
                "primary_key": ["ANIMAL_ID"]
            }
        ],
        "entities": [
            {
                "name": "Animal",
                "table": "ANIMAL",
                "key": ["Id"],
                "discriminator": { "column": "SPECIES" },
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "Name", "type": "string", "column": "NAME" }
                ]
            },
            {
                "name": "Cat",
                "extends": "Animal",
                "discriminator_value": 1,
                "fields": [
                    { "name": "Lives", "type": "integer", "column": "LIVES", "nullable": true },
                    {
                        "name": "Collar",
                        "nullable": true,
                        "owned": {
                            "type": "Collar",
                            "table": "ANIMAL_COLLAR",
                            "join": [{ "owner": "ID", "owned": "ANIMAL_ID" }],
                            "fields": [{ "name": "Colour", "type": "string", "column": "COLOUR" }]
                        }
                    }
                ]
            },
            { "name": "Dog", "extends": "Animal", "discriminator_value": "2" }
        ]
    }"#,
    setup: &[
        "CREATE TABLE ANIMAL (
            ID      NUMBER (19, 0) NOT NULL PRIMARY KEY,
            SPECIES NUMBER (5, 0) NOT NULL,
            NAME    VARCHAR2 (50) NOT NULL,
            LIVES   NUMBER (1, 0)
        )",
        "CREATE TABLE ANIMAL_COLLAR (
            ANIMAL_ID NUMBER (19, 0) NOT NULL PRIMARY KEY REFERENCES ANIMAL (ID),
            COLOUR    VARCHAR2 (20) NOT NULL
        )",
        "INSERT INTO ANIMAL (ID, SPECIES, NAME, LIVES) VALUES (1, 1, 'Tom', 9)",
        "INSERT INTO ANIMAL (ID, SPECIES, NAME, LIVES) VALUES (2, 1, 'Felix', 7)",
        "INSERT INTO ANIMAL (ID, SPECIES, NAME) VALUES (3, 2, 'Rex')",
        "INSERT INTO ANIMAL_COLLAR (ANIMAL_ID, COLOUR) VALUES (1, 'Red')",
    ],
};

/// Riders whose mount is an enum stored both by name and by discriminant.
pub const MOUNTS: Fixture = Fixture {
    catalog: r#"{
        "enums": [
            { "name": "Mount", "variants": ["Donkey", "Horse", "Mule", { "name": "Dragon", "discriminant": 10 }] }
        ],
        "tables": [
            {
                "name": "RIDER",
                "columns": [
                    { "name": "ID", "type": "NUMBER(19, 0)" },
                    { "name": "NAME", "type": "VARCHAR2(50 CHAR)" },
                    { "name": "MOUNT", "type": "VARCHAR2(20 CHAR)", "nullable": true },
                    { "name": "MOUNT_CODE", "type": "NUMBER(3, 0)", "nullable": true }
                ],
                "primary_key": ["ID"]
            }
        ],
        "entities": [
            {
                "name": "Rider",
                "table": "RIDER",
                "key": ["Id"],
                "fields": [
                    { "name": "Id", "type": "integer", "column": "ID" },
                    { "name": "Name", "type": "string", "column": "NAME" },
                    {
                        "name": "Mount",
                        "type": "Mount",
                        "column": "MOUNT",
                        "conversion": "enum_to_string",
                        "nullable": true
                    },
                    {
                        "name": "MountCode",
                        "type": "Mount",
                        "column": "MOUNT_CODE",
                        "conversion": "enum_to_integer",
                        "nullable": true
                    }
                ]
            }
        ]
    }"#,
    setup: &[
        "CREATE TABLE RIDER (
            ID         NUMBER (19, 0) NOT NULL PRIMARY KEY,
            NAME       VARCHAR2 (50) NOT NULL,
            MOUNT      VARCHAR2 (20),
            MOUNT_CODE NUMBER (3, 0)
        )",
        "INSERT INTO RIDER (ID, NAME, MOUNT, MOUNT_CODE) VALUES (1, 'Sancho', 'Donkey', 0)",
        "INSERT INTO RIDER (ID, NAME, MOUNT, MOUNT_CODE) VALUES (2, 'Quixote', 'Horse', 1)",
        "INSERT INTO RIDER (ID, NAME, MOUNT, MOUNT_CODE) VALUES (3, 'Daenerys', 'Dragon', 10)",
        "INSERT INTO RIDER (ID, NAME) VALUES (4, 'Walker')",
    ],
};
