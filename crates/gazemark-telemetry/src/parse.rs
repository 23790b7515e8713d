use crate::error::ParseError;
use crate::record::{Fov, TelemetryRecord, TelemetrySequence};
use gazemark_base::{Quat, Vec3};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;

/// Canonical column names, in fixed schema order.
pub const COLUMNS: [&str; 19] = [
    "ViewIndex",
    "FOV1",
    "FOV2",
    "FOV3",
    "FOV4",
    "PositionX",
    "PositionY",
    "PositionZ",
    "QuaternionX",
    "QuaternionY",
    "QuaternionZ",
    "QuaternionW",
    "GazeQX",
    "GazeQY",
    "GazeQZ",
    "GazeQW",
    "GazePosX",
    "GazePosY",
    "GazePosZ",
];

/// Allowed deviation from unit norm for parsed quaternions.
const UNIT_NORM_TOLERANCE: f64 = 0.1;

/// Read and parse a telemetry file.
///
/// # Errors
/// Returns `ParseError::Read` when the file cannot be read, otherwise as
/// [`parse_telemetry_str`].
pub fn parse_telemetry_file(path: &Path) -> Result<TelemetrySequence, ParseError> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| ParseError::Read(format!("{}: {err}", path.display())))?;
    parse_telemetry_str(&text)
}

/// Parse telemetry text in either supported layout.
///
/// The structured stage expects a delimited table whose header names the
/// canonical columns. When that stage fails for shape reasons (unparseable
/// table, header missing canonical names) the positional stage takes over:
/// whitespace-separated rows of 19 tokens, an optional leading header line,
/// rows with any other token count dropped. Value and validation failures
/// in a table already recognized as structured surface directly.
///
/// # Errors
/// Returns the final stage's `ParseError` when no stage produces a
/// sequence. An input whose rows all drop parses to an empty sequence.
pub fn parse_telemetry_str(text: &str) -> Result<TelemetrySequence, ParseError> {
    let records = match parse_structured(text) {
        Ok(records) => records,
        Err(err @ (ParseError::Csv(_) | ParseError::MissingColumn(_))) => {
            log::debug!("structured parse failed ({err}); trying positional layout");
            parse_positional(text)?
        }
        Err(err) => return Err(err),
    };
    if records.is_empty() {
        log::warn!("telemetry source produced no records");
    }
    Ok(TelemetrySequence::new(records))
}

fn parse_structured(text: &str) -> Result<Vec<TelemetryRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut indices = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let idx = headers
            .iter()
            .position(|h| h == name)
            .ok_or(ParseError::MissingColumn(name))?;
        indices.push(idx);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
        let mut tokens = Vec::with_capacity(COLUMNS.len());
        for &idx in &indices {
            tokens.push(row.get(idx).unwrap_or(""));
        }
        records.push(record_from_tokens(&tokens, line)?);
    }
    Ok(records)
}

fn parse_positional(text: &str) -> Result<Vec<TelemetryRecord>, ParseError> {
    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if idx == 0 && !tokens.iter().all(|t| t.parse::<f64>().is_ok()) {
            // First line is a header, not data
            continue;
        }
        if tokens.len() != COLUMNS.len() {
            dropped += 1;
            continue;
        }
        records.push(record_from_tokens(&tokens, line)?);
    }
    if dropped > 0 {
        log::warn!("dropped {dropped} row(s) with unexpected column count");
    }
    Ok(records)
}

// Tokens arrive in canonical schema order regardless of source layout.
fn record_from_tokens(tokens: &[&str], line: usize) -> Result<TelemetryRecord, ParseError> {
    let view_index = parse_view_index(tokens[0], line)?;
    let mut fields = [0.0f64; 18];
    for (i, field) in fields.iter_mut().enumerate() {
        *field = parse_field(tokens[i + 1], COLUMNS[i + 1], line)?;
    }

    let record = TelemetryRecord {
        view_index,
        fov: Fov {
            left: fields[0],
            right: fields[1],
            down: fields[2],
            up: fields[3],
        },
        position: Vec3::new(fields[4], fields[5], fields[6]),
        camera_orientation: Quat::new(fields[10], fields[7], fields[8], fields[9]),
        gaze_orientation: Quat::new(fields[14], fields[11], fields[12], fields[13]),
        gaze_position: Vec3::new(fields[15], fields[16], fields[17]),
    };
    validate_record(&record, line)?;
    Ok(record)
}

fn parse_field(token: &str, column: &'static str, line: usize) -> Result<f64, ParseError> {
    token.trim().parse::<f64>().map_err(|_| ParseError::Value {
        line,
        column,
        token: token.to_string(),
    })
}

fn parse_view_index(token: &str, line: usize) -> Result<i64, ParseError> {
    let token = token.trim();
    if let Ok(v) = token.parse::<i64>() {
        return Ok(v);
    }
    // Some exports write the index as a float
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v as i64),
        _ => Err(ParseError::Value {
            line,
            column: COLUMNS[0],
            token: token.to_string(),
        }),
    }
}

fn validate_record(record: &TelemetryRecord, line: usize) -> Result<(), ParseError> {
    validate_quat(record.camera_orientation, "camera orientation", line)?;
    validate_quat(record.gaze_orientation, "gaze orientation", line)?;
    validate_fov(&record.fov, line)?;
    Ok(())
}

fn validate_quat(q: Quat, what: &str, line: usize) -> Result<(), ParseError> {
    let norm = q.length();
    if !norm.is_finite() || (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
        return Err(ParseError::Record {
            line,
            reason: format!("{what} quaternion is not near-unit (norm {norm})"),
        });
    }
    Ok(())
}

fn validate_fov(fov: &Fov, line: usize) -> Result<(), ParseError> {
    let angles = [
        (fov.left, "left"),
        (fov.right, "right"),
        (fov.down, "down"),
        (fov.up, "up"),
    ];
    for (angle, name) in angles {
        if !angle.is_finite() || angle.abs() >= FRAC_PI_2 {
            return Err(ParseError::Record {
                line,
                reason: format!("{name} FOV angle {angle} is outside (-pi/2, pi/2)"),
            });
        }
    }
    Ok(())
}
