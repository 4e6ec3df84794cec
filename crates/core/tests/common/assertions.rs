//! Assertion helpers over collected events.

use mp_protocol::ipc::Event;
use mp_protocol::pipeline_models::PipelineState;
use mp_protocol::record::Record;

/// Records carried by `DataProcessed` events, in order.
pub fn processed_records(events: &[Event]) -> Vec<Record> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::DataProcessed { record, .. } => Some(record.clone()),
            _ => None,
        })
        .collect()
}

/// Target states of `StateChanged` events, in order.
pub fn state_changes(events: &[Event]) -> Vec<PipelineState> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::StateChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect()
}

pub fn count_rejections(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::DataRejected { .. }))
        .count()
}
