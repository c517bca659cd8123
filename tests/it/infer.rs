use proptest::prelude::*;

use delimited::error::Result;
use delimited::read::{infer, infer_kinds, Kind, Reader};
use delimited::Dialect;

#[test]
fn kinds_follow_the_header() -> Result<()> {
    let data = "id,price,active,when\n1,2.5,true,2020-03-15\n2,3.5,false,2020-03-16\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let kinds = infer_kinds(&mut reader, None)?;
    assert_eq!(
        kinds,
        vec![
            ("id".to_string(), Kind::Integer),
            ("price".to_string(), Kind::Float),
            ("active".to_string(), Kind::Boolean),
            ("when".to_string(), Kind::Date),
        ]
    );
    Ok(())
}

#[test]
fn integers_widen_to_float_but_conflicts_degrade() -> Result<()> {
    let dialect = Dialect::new().with_header(false);
    let mut reader = Reader::from_string("1,true\n2.5,3\n", dialect)?;
    let kinds = infer_kinds(&mut reader, None)?;
    assert_eq!(kinds[0], ("column_1".to_string(), Kind::Float));
    assert_eq!(kinds[1], ("column_2".to_string(), Kind::Text));
    Ok(())
}

#[test]
fn max_rows_limits_the_scan() -> Result<()> {
    let dialect = Dialect::new().with_header(false);
    let mut reader = Reader::from_string("1\nnot a number\n", dialect)?;
    let kinds = infer_kinds(&mut reader, Some(1))?;
    assert_eq!(kinds, vec![("column_1".to_string(), Kind::Integer)]);
    Ok(())
}

#[test]
fn datetime_beats_date() {
    assert_eq!(infer("2018-11-13T17:11:10"), Kind::DateTime);
    assert_eq!(infer("2018-11-13"), Kind::Date);
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn integers_infer_as_integer(v in any::<i64>()) {
        prop_assert_eq!(infer(&v.to_string()), Kind::Integer);
    }
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn alphabetic_text_infers_as_text(v in "[xyz][xyz ]*") {
        prop_assert_eq!(infer(&v), Kind::Text);
    }
}
