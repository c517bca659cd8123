use delimited::error::Result;
use delimited::mapper::{FieldTable, Mapped, Mode};
use delimited::read::Reader;
use delimited::write::Writer;
use delimited::Dialect;

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    // declared order intentionally differs from the header order below
    age: i64,
    name: String,
}

impl Mapped for Person {
    fn fields() -> FieldTable<Self> {
        FieldTable::new()
            .field("Age", |p: &Person| p.age, |p, v| p.age = v)
            .field("Name", |p: &Person| p.name.clone(), |p, v| p.name = v)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Measurement {
    station: String,
    value: Option<f64>,
    taken: chrono::NaiveDate,
    valid: bool,
}

impl Mapped for Measurement {
    fn fields() -> FieldTable<Self> {
        FieldTable::new()
            .field(
                "station",
                |m: &Measurement| m.station.clone(),
                |m, v| m.station = v,
            )
            .field("value", |m: &Measurement| m.value, |m, v| m.value = v)
            .field("taken", |m: &Measurement| m.taken, |m, v| m.taken = v)
            .field("valid", |m: &Measurement| m.valid, |m, v| m.valid = v)
    }
}

#[test]
fn header_names_beat_declared_order() -> Result<()> {
    let mut reader = Reader::from_string("Name,Age\nAlice,30\n", Dialect::new())?;
    let (rows, errors) = reader.deserialize::<Person>(Mode::Tolerant)?;
    assert!(errors.is_empty());
    assert_eq!(
        rows,
        vec![Person {
            name: "Alice".to_string(),
            age: 30
        }]
    );
    Ok(())
}

#[test]
fn positional_binding_without_header() -> Result<()> {
    let dialect = Dialect::new().with_header(false);
    let mut reader = Reader::from_string("30,Alice\n", dialect)?;
    let (rows, _) = reader.deserialize::<Person>(Mode::Tolerant)?;
    assert_eq!(rows[0].age, 30);
    assert_eq!(rows[0].name, "Alice");
    Ok(())
}

#[test]
fn tolerant_mode_reports_rows_and_continues() -> Result<()> {
    let data = "Name,Age\nAlice,30\nBob,old\nCarol,41\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let (rows, errors) = reader.deserialize::<Person>(Mode::Tolerant)?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "Carol");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, 2);
    assert_eq!(errors[0].field, "Age");
    Ok(())
}

#[test]
fn strict_mode_aborts_on_first_failure() -> Result<()> {
    let data = "Name,Age\nBob,old\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let result = reader.deserialize::<Person>(Mode::Strict);
    assert!(matches!(result, Err(delimited::Error::FieldConversion(_))));
    Ok(())
}

#[test]
fn typed_round_trip_with_header() -> Result<()> {
    let measurements = vec![
        Measurement {
            station: "north,ridge".to_string(),
            value: Some(12.25),
            taken: chrono::NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
            valid: true,
        },
        Measurement {
            station: "south".to_string(),
            value: None,
            taken: chrono::NaiveDate::from_ymd_opt(2020, 3, 16).unwrap(),
            valid: false,
        },
    ];

    let mut writer = Writer::from_writer(Vec::new(), Dialect::new());
    writer.serialize(&measurements)?;
    let bytes = writer.into_inner()?;
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("station,value,taken,valid\n"));
    assert!(text.contains("\"north,ridge\",12.25,2020-03-15,true\n"));
    assert!(text.contains("south,,2020-03-16,false\n"));

    let mut reader = Reader::from_string(text, Dialect::new())?;
    let (rows, errors) = reader.deserialize::<Measurement>(Mode::Strict)?;
    assert!(errors.is_empty());
    assert_eq!(rows, measurements);
    Ok(())
}

#[test]
fn short_rows_keep_target_defaults() -> Result<()> {
    let data = "Name,Age\nDave\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let (rows, errors) = reader.deserialize::<Person>(Mode::Tolerant)?;
    assert!(errors.is_empty());
    assert_eq!(rows[0].name, "Dave");
    assert_eq!(rows[0].age, 0);
    Ok(())
}
