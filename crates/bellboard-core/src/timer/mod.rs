mod countdown;
mod interval;

pub use countdown::format_countdown;
pub use interval::IntervalTask;
