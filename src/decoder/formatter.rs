//! Text formatting for decoded events

use crate::decoder::BusEvent;

/// Format an event's value the way it appears on its annotation row
///
/// Addresses are four hex digits and data bytes two, both with an `h`
/// suffix. Instructions show their mnemonic; cycle kinds their label.
pub fn format_payload(event: &BusEvent) -> String {
    match event {
        BusEvent::AddressCycle { value, .. } => format!("{:04X}h", value),
        BusEvent::DataCycle { value, .. } => format!("{:02X}h", value),
        BusEvent::InstructionDecoded { mnemonic, .. } => mnemonic.to_string(),
        BusEvent::CycleKind { kind, .. } => kind.label().to_string(),
    }
}

/// Format an event as a single listing line
///
/// `start-end row: payload`, with the instruction length appended for
/// decoded instructions.
pub fn format_event(event: &BusEvent) -> String {
    let payload = match event {
        BusEvent::InstructionDecoded {
            opcode,
            mnemonic,
            length,
            ..
        } => format!("{} ({:02X}h, {} bytes)", mnemonic, opcode, length),
        _ => format_payload(event),
    };

    format!(
        "{}-{} {}: {}",
        event.start_sample(),
        event.end_sample(),
        event.category().id(),
        payload
    )
}
