use crate::api::{MuteRequest, Status};

/// What to send to the server for a mute change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuteToggle {
    /// Send as-is.
    Direct(MuteRequest),
    /// Unmuting while mute windows are active. Ask first; `request` overrides
    /// those windows.
    NeedsConfirmation { prompt: String, request: MuteRequest },
}

impl MuteToggle {
    pub fn request(&self) -> MuteRequest {
        match self {
            MuteToggle::Direct(request) => *request,
            MuteToggle::NeedsConfirmation { request, .. } => *request,
        }
    }
}

/// Plan a change of the manual mute flag to `muted`.
pub fn plan_mute(muted: bool, status: &Status) -> MuteToggle {
    if muted || !status.muted_by_schedule {
        return MuteToggle::Direct(MuteRequest {
            muted,
            override_schedule: false,
        });
    }

    MuteToggle::NeedsConfirmation {
        prompt: override_prompt(&status.active_schedule_names()),
        request: MuteRequest {
            muted: false,
            override_schedule: true,
        },
    }
}

/// Plan flipping the manual mute flag.
pub fn plan_mute_toggle(status: &Status) -> MuteToggle {
    plan_mute(!status.muted, status)
}

fn override_prompt(names: &[&str]) -> String {
    let (subject, object) = if names.len() > 1 {
        ("mute schedules are", "these schedules")
    } else {
        ("mute schedule is", "this schedule")
    };
    format!(
        "The following {subject} currently active:\n\n{}\n\n\
         Do you want to override {object} and unmute?",
        names.join(", ")
    )
}
