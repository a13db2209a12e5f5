/// Render a countdown for the next-bell widget.
///
/// Whole days drop the seconds: `90000` becomes `1d 1h 0m`.
pub fn format_countdown(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if seconds < 60 {
        format!("{secs}s")
    } else if seconds < 3600 {
        format!("{minutes}m {secs}s")
    } else if seconds < 86_400 {
        format!("{hours}h {minutes}m {secs}s")
    } else {
        format!("{days}d {hours}h {minutes}m")
    }
}
