// SPDX-License-Identifier: MPL-2.0
//! Write-through of the editor transform into externally owned parameter
//! fields.
//!
//! The editor never reads these fields back during gestures; it only writes
//! presentation-rounded values after each mutating transition.

use super::state::TransformState;
use log::warn;

pub const SCALE_FIELD: &str = "scale";
pub const OFFSET_X_FIELD: &str = "offset_x";
pub const OFFSET_Y_FIELD: &str = "offset_y";

/// A value written into a named parameter field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Int(i32),
}

/// Name-addressed numeric fields owned by the host.
///
/// `write` returns false when the field does not exist; the editor skips it
/// and keeps writing the remaining fields.
pub trait SyncTarget {
    fn write(&mut self, field: &str, value: ParamValue) -> bool;
}

/// Scale as presented externally: two decimal places.
pub fn rounded_scale(scale: f32) -> f32 {
    (scale * 100.0).round() / 100.0
}

/// Offsets as presented externally: nearest integer.
#[allow(clippy::cast_possible_truncation)]
pub fn rounded_offset(offset: f32) -> i32 {
    offset.round() as i32
}

/// Writes the three transform fields to the target, skipping missing ones.
pub fn push(state: &TransformState, target: &mut dyn SyncTarget) {
    let fields = [
        (SCALE_FIELD, ParamValue::Float(rounded_scale(state.scale))),
        (OFFSET_X_FIELD, ParamValue::Int(rounded_offset(state.offset_x))),
        (OFFSET_Y_FIELD, ParamValue::Int(rounded_offset(state.offset_y))),
    ];
    for (field, value) in fields {
        if !target.write(field, value) {
            warn!("sync target has no field `{field}`; skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(String, ParamValue)>,
        missing: Vec<&'static str>,
    }

    impl SyncTarget for Recorder {
        fn write(&mut self, field: &str, value: ParamValue) -> bool {
            if self.missing.contains(&field) {
                return false;
            }
            self.writes.push((field.to_string(), value));
            true
        }
    }

    #[test]
    fn push_writes_all_three_fields_rounded() {
        let state = TransformState::from_params(1.2345, 29.6, -14.4);
        let mut target = Recorder::default();

        push(&state, &mut target);

        assert_eq!(
            target.writes,
            vec![
                (SCALE_FIELD.to_string(), ParamValue::Float(1.23)),
                (OFFSET_X_FIELD.to_string(), ParamValue::Int(30)),
                (OFFSET_Y_FIELD.to_string(), ParamValue::Int(-14)),
            ]
        );
    }

    #[test]
    fn push_skips_missing_fields_and_writes_the_rest() {
        let state = TransformState::default();
        let mut target = Recorder {
            missing: vec![OFFSET_X_FIELD],
            ..Recorder::default()
        };

        push(&state, &mut target);

        let names: Vec<_> = target.writes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec![SCALE_FIELD, OFFSET_Y_FIELD]);
    }

    #[test]
    fn rounding_policy_matches_presentation() {
        assert_eq!(rounded_scale(0.8099999), 0.81);
        assert_eq!(rounded_scale(2.718), 2.72);
        assert_eq!(rounded_offset(0.5), 1);
        assert_eq!(rounded_offset(-0.5), -1);
        assert_eq!(rounded_offset(29.4), 29);
    }
}
