use std::io::{BufRead, Write};

use crate::control::rocket::ParameterSnapshot;
use crate::errors::SimulationError;

use super::telemetry::{SimulationTrace, TraceSample};

pub const CSV_HEADER: &str = "Time, Acceleration, Velocity, Altitude";

/// Writes every sample of the trace, one row per step.
pub fn write_csv<W: Write>(writer: &mut W, trace: &SimulationTrace) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for sample in trace.samples() {
        writeln!(
            writer,
            "{:2.1}, {:6.3}, {:6.3}, {:6.3}",
            sample.time, sample.acceleration, sample.velocity, sample.altitude
        )?;
    }
    Ok(())
}

pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<TraceSample>, SimulationError> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            let header = header?;
            if header.trim() != CSV_HEADER {
                return Err(SimulationError::ParseError(format!(
                    "unexpected CSV header '{}'",
                    header
                )));
            }
        }
        None => return Err(SimulationError::ParseError("empty CSV export".to_string())),
    }

    let mut samples = Vec::new();
    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(&line, ',', 4)
            .map_err(|e| SimulationError::ParseError(format!("row {}: {}", line_number + 1, e)))?;
        samples.push(TraceSample {
            time: fields[0],
            acceleration: fields[1],
            velocity: fields[2],
            altitude: fields[3],
        });
    }
    Ok(samples)
}

fn parse_fields(line: &str, separator: char, expected: usize) -> Result<Vec<f64>, String> {
    let fields: Vec<&str> = line.split(separator).map(str::trim).collect();
    if fields.len() != expected {
        return Err(format!("expected {} fields, found {}", expected, fields.len()));
    }
    fields
        .iter()
        .map(|f| f.parse::<f64>().map_err(|e| format!("'{}': {}", f, e)))
        .collect()
}

/// One tab-separated line: SRB count, booster count, booster fuel, booster thrust.
pub fn write_snapshot<W: Write>(writer: &mut W, snapshot: &ParameterSnapshot) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{:.6}\t{:.6}",
        snapshot.srb_count, snapshot.booster_count, snapshot.booster_fuel_mass, snapshot.booster_thrust
    )
}

pub fn read_snapshot<R: BufRead>(reader: R) -> Result<ParameterSnapshot, SimulationError> {
    let line = reader
        .lines()
        .next()
        .ok_or_else(|| SimulationError::ParseError("empty parameter file".to_string()))??;

    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(SimulationError::ParseError(format!(
            "expected 4 parameters, found {}",
            fields.len()
        )));
    }

    let count = |field: &str, name: &str| {
        field
            .parse::<u32>()
            .map_err(|e| SimulationError::ParseError(format!("{} '{}': {}", name, field, e)))
    };
    let value = |field: &str, name: &str| {
        field
            .parse::<f64>()
            .map_err(|e| SimulationError::ParseError(format!("{} '{}': {}", name, field, e)))
    };

    Ok(ParameterSnapshot {
        srb_count: count(fields[0], "srb_count")?,
        booster_count: count(fields[1], "booster_count")?,
        booster_fuel_mass: value(fields[2], "booster_fuel_mass")?,
        booster_thrust: value(fields[3], "booster_thrust")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_csv_layout() {
        let trace = SimulationTrace::from_samples(&[
            TraceSample {
                time: 0.0,
                acceleration: 9.1234,
                velocity: 0.0,
                altitude: 0.0,
            },
            TraceSample {
                time: 0.1,
                acceleration: 9.2,
                velocity: 0.91234,
                altitude: 0.091234,
            },
        ]);
        let mut out = Vec::new();
        write_csv(&mut out, &trace).expect("write to Vec");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Time, Acceleration, Velocity, Altitude");
        assert_eq!(lines[1], "0.0,  9.123,  0.000,  0.000");
        assert_eq!(lines[2], "0.1,  9.200,  0.912,  0.091");
    }

    #[test]
    fn test_read_csv_rejects_bad_header() {
        let input = "t,a,v,h\n0.0, 1.0, 2.0, 3.0\n";
        assert!(matches!(
            read_csv(Cursor::new(input)),
            Err(SimulationError::ParseError(_))
        ));
    }

    #[test]
    fn test_read_csv_rejects_short_row() {
        let input = format!("{}\n0.0, 1.0, 2.0\n", CSV_HEADER);
        let err = read_csv(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("row 1"), "got {}", err);
    }

    #[test]
    fn test_snapshot_line_format() {
        let snapshot = ParameterSnapshot {
            srb_count: 3,
            booster_count: 1,
            booster_fuel_mass: 284_089.0,
            booster_thrust: 3_827.0,
        };
        let mut out = Vec::new();
        write_snapshot(&mut out, &snapshot).expect("write to Vec");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "3\t1\t284089.000000\t3827.000000\n"
        );
    }

    #[test]
    fn test_read_snapshot() {
        let snapshot = read_snapshot(Cursor::new("5\t2\t150000.500000\t4200.250000\n"))
            .expect("valid record");

        assert_eq!(snapshot.srb_count, 5);
        assert_eq!(snapshot.booster_count, 2);
        assert_eq!(snapshot.booster_fuel_mass, 150_000.5);
        assert_eq!(snapshot.booster_thrust, 4_200.25);
    }

    #[test]
    fn test_read_snapshot_errors() {
        assert!(read_snapshot(Cursor::new("")).is_err());
        assert!(read_snapshot(Cursor::new("3\t1\t284089.0\n")).is_err());
        assert!(read_snapshot(Cursor::new("three\t1\t284089.0\t3827.0\n")).is_err());
    }
}
