// tests/file_io.rs
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};

use pretty_assertions::assert_eq;
use toy_robot::{RobotConfig, RobotInterpreter};

#[test]
fn test_file_to_file_session() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("commands.txt");
    let output_path = dir.path().join("report.txt");

    fs::write(
        &input_path,
        "PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\nPLACE 1,1,NORTHX\nFLY\n",
    )
    .unwrap();

    let input = BufReader::new(File::open(&input_path).unwrap());
    let mut output = BufWriter::new(File::create(&output_path).unwrap());
    let mut interpreter = RobotInterpreter::new(RobotConfig::default());
    let processed = interpreter.run(input, &mut output).unwrap();
    output.flush().unwrap();
    drop(output);

    assert_eq!(processed, 8);
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "3,3,NORTH\n\
         One or more invalid arguments.\n\
         Unknown command or invalid argument count.\n"
    );
}

#[test]
fn test_empty_file_produces_no_output() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "\n   \n,,,").unwrap();

    let reader = BufReader::new(File::open(input.path()).unwrap());
    let mut out = Vec::new();
    let processed = RobotInterpreter::new(RobotConfig::default())
        .run(reader, &mut out)
        .unwrap();

    assert_eq!(processed, 0);
    assert!(out.is_empty());
}
