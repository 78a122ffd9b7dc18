//! Built-in command tables, one module per product area.

mod capture;
mod connect;
mod live;
mod vod;

use m2a_types::CommandSpec;

/// Every built-in command in declaration order: Connect, Live, Capture, VOD.
pub fn builtin_commands() -> Vec<CommandSpec> {
    let mut commands = connect::commands();
    commands.extend(live::commands());
    commands.extend(capture::commands());
    commands.extend(vod::commands());
    commands
}
