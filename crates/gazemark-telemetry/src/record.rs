use gazemark_base::{Quat, Vec3};

/// Field-of-view half-angles in radians, signed. Left and down are
/// typically negative for a frustum extending both ways from center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fov {
    pub left: f64,
    pub right: f64,
    pub down: f64,
    pub up: f64,
}

/// One telemetry entry for one rendered eye view of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    /// 0 = left eye, 1 = right eye.
    pub view_index: i64,
    pub fov: Fov,
    pub position: Vec3,
    pub camera_orientation: Quat,
    pub gaze_orientation: Quat,
    pub gaze_position: Vec3,
}

/// Telemetry records in source arrival order.
#[derive(Debug, Clone, Default)]
pub struct TelemetrySequence {
    records: Vec<TelemetryRecord>,
}

impl TelemetrySequence {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Partition into (left, right) sub-sequences by view index, preserving
    /// arrival order. Within each output, index i belongs to frame i of the
    /// matching video stream. Indices other than 0 and 1 land in neither.
    pub fn split_eyes(&self) -> (Vec<TelemetryRecord>, Vec<TelemetryRecord>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for record in &self.records {
            match record.view_index {
                0 => left.push(*record),
                1 => right.push(*record),
                _ => {}
            }
        }
        (left, right)
    }
}
