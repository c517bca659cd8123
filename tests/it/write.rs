use delimited::error::Result;
use delimited::write::{write_record, Writer};
use delimited::{record, Dialect};

fn written(records: &[delimited::Record], dialect: Dialect) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new(), dialect);
    writer.write_all(records)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes).unwrap())
}

#[test]
fn quotes_delimiters_and_qualifiers() -> Result<()> {
    let out = written(
        &[record!["x", "y,z", "w\"q"]],
        Dialect::new().with_header(false),
    )?;
    assert_eq!(out, "x,\"y,z\",\"w\"\"q\"\n");
    Ok(())
}

#[test]
fn configured_terminator_is_used() -> Result<()> {
    let dialect = Dialect::new().with_terminator("\r\n")?;
    let out = written(&[record!["a", "b"], record!["c", "d"]], dialect)?;
    assert_eq!(out, "a,b\r\nc,d\r\n");
    Ok(())
}

#[test]
fn force_qualifier_quotes_everything() -> Result<()> {
    let dialect = Dialect::new().with_always_quote(true);
    let out = written(&[record!["a", "1"]], dialect)?;
    assert_eq!(out, "\"a\",\"1\"\n");
    Ok(())
}

#[test]
fn empty_field_policy_is_explicit() -> Result<()> {
    let rows = [record!["", "b"]];
    assert_eq!(written(&rows, Dialect::new())?, ",b\n");
    let out = written(&rows, Dialect::new().with_quote_empty(true))?;
    assert_eq!(out, "\"\",b\n");
    Ok(())
}

#[test]
fn embedded_newlines_are_quoted() -> Result<()> {
    let out = written(&[record!["a\nb", "c\r\nd"]], Dialect::new())?;
    assert_eq!(out, "\"a\nb\",\"c\r\nd\"\n");
    Ok(())
}

#[test]
fn custom_delimiter() -> Result<()> {
    let dialect = Dialect::new().with_delimiter('\t')?;
    let out = written(&[record!["a", "b,c", "d\te"]], dialect)?;
    assert_eq!(out, "a\tb,c\t\"d\te\"\n");
    Ok(())
}

#[test]
fn free_function_writes_one_record() -> Result<()> {
    let mut sink = Vec::new();
    write_record(&mut sink, &record!["a", "b"], &Dialect::new())?;
    assert_eq!(sink, b"a,b\n");
    Ok(())
}

#[test]
fn header_written_once() -> Result<()> {
    let mut writer = Writer::from_writer(Vec::new(), Dialect::new());
    writer.write_header(&["c1", "c2"])?;
    writer.write_header(&["again", "again"])?;
    writer.write(&record!["1", "2"])?;
    let out = String::from_utf8(writer.into_inner()?).unwrap();
    assert_eq!(out, "c1,c2\n1,2\n");
    Ok(())
}

#[test]
fn writes_to_a_file() -> Result<()> {
    let path = std::env::temp_dir().join("delimited_it_write.csv");
    let mut writer = Writer::from_path(&path, Dialect::new())?;
    writer.write(&record!["a", "b"])?;
    writer.flush()?;
    drop(writer);
    assert_eq!(std::fs::read_to_string(&path)?, "a,b\n");
    std::fs::remove_file(&path)?;
    Ok(())
}
