use delimited::error::Result;
use delimited::grid::{read_grid, write_grid, Grid};
use delimited::read::Reader;
use delimited::write::Writer;
use delimited::{record, Dialect};

#[test]
fn header_names_the_columns() -> Result<()> {
    let data = "city,lat,lng\n\"Elgin, Scotland\",57.653484,-3.335724\nOxford,51.752022,-1.257677\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let grid = read_grid(&mut reader)?;

    assert_eq!(grid.column_names(), &["city", "lat", "lng"]);
    assert_eq!(grid.num_rows(), 2);
    assert_eq!(grid.get(0, "city"), Some("Elgin, Scotland"));
    assert_eq!(grid.get(1, "lat"), Some("51.752022"));
    Ok(())
}

#[test]
fn headerless_columns_are_synthesized() -> Result<()> {
    let dialect = Dialect::new().with_header(false);
    let mut reader = Reader::from_string("1,2,3\n4,5,6\n", dialect)?;
    let grid = read_grid(&mut reader)?;

    assert_eq!(grid.column_names(), &["column_1", "column_2", "column_3"]);
    assert_eq!(grid.get(1, "column_2"), Some("5"));
    Ok(())
}

#[test]
fn grid_round_trip() -> Result<()> {
    let data = "a,b\n1,\"x,y\"\n2,z\n";
    let mut reader = Reader::from_string(data, Dialect::new())?;
    let grid = read_grid(&mut reader)?;

    let mut writer = Writer::from_writer(Vec::new(), Dialect::new());
    write_grid(&mut writer, &grid)?;
    let out = String::from_utf8(writer.into_inner()?).unwrap();
    assert_eq!(out, data);
    Ok(())
}

#[test]
fn building_a_grid_by_hand() -> Result<()> {
    let mut grid = Grid::new(vec!["k", "v"]);
    grid.push_row(record!["one", 1]);
    grid.push_row(record!["two", 2]);

    let dialect = Dialect::new().with_header(false);
    let mut writer = Writer::from_writer(Vec::new(), dialect);
    write_grid(&mut writer, &grid)?;
    let out = String::from_utf8(writer.into_inner()?).unwrap();
    // headerless dialect: no column-name record
    assert_eq!(out, "one,1\ntwo,2\n");
    Ok(())
}

#[test]
fn empty_grid() -> Result<()> {
    let dialect = Dialect::new().with_header(false);
    let mut reader = Reader::from_string("", dialect)?;
    let grid = read_grid(&mut reader)?;
    assert_eq!(grid.num_rows(), 0);
    assert_eq!(grid.num_columns(), 0);
    Ok(())
}
