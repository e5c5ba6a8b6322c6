pub mod types;

use tracing::debug;

pub use types::{
    ClockTime, Goal, Intensity, PlanDescription, PlanRejection, PlanRequest, PlanTemplate,
    Recurrence, TimeWindow,
};

pub const PLAN_TIP: &str = "Tip: take any block that works for you and add it as a task on the \
board (for example under a \"Today's routine\" or \"Study\" type).";

/// Validates the raw form values and builds a plan.
pub fn suggest_plan(request: &PlanRequest) -> Result<PlanDescription, PlanRejection> {
    let goal = request.goal.trim();
    if goal.is_empty() || request.start.trim().is_empty() || request.end.trim().is_empty() {
        return Err(PlanRejection::MissingFields);
    }

    let start = ClockTime::parse(&request.start).ok_or(PlanRejection::InvalidTime)?;
    let end = ClockTime::parse(&request.end).ok_or(PlanRejection::InvalidTime)?;
    let window = TimeWindow::new(start, end).ok_or(PlanRejection::EndNotAfterStart)?;

    Ok(build_plan(
        Goal::parse(goal),
        window,
        Recurrence::parse(&request.recurrence),
        &request.context,
    ))
}

pub fn build_plan(
    goal: Option<Goal>,
    window: TimeWindow,
    recurrence: Recurrence,
    context: &str,
) -> PlanDescription {
    let total_minutes = window.total_minutes();
    let intensity = Intensity::for_minutes(total_minutes);
    let hours = format_hours(total_minutes);
    debug!(?goal, total_minutes, %intensity, "building plan");

    let context = context.trim();
    PlanDescription {
        total_minutes,
        template: goal.map(|goal| template(goal, total_minutes, &hours, intensity)),
        hours,
        intensity,
        recurrence,
        recurrence_phrase: recurrence.phrase(),
        context: (!context.is_empty()).then(|| context.to_string()),
    }
}

// One decimal place of `total_minutes / 60` as a double, so inexact values
// like 9/60 round on their binary value (0.1). Exact halves (15, 45, 75...
// minutes) round up.
fn format_hours(total_minutes: u32) -> String {
    if total_minutes % 30 == 15 {
        let tenths = (total_minutes * 10 + 30) / 60;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", f64::from(total_minutes) / 60.0)
}

fn template(goal: Goal, total: u32, hours: &str, intensity: Intensity) -> PlanTemplate {
    let (heading, blocks) = match goal {
        Goal::Health => (
            format!("Health routine proposal ({hours} h · {intensity} intensity)"),
            vec![
                "5–10 min of joint mobility and warm-up.".to_string(),
                format!(
                    "{} min of strength (push-ups, squats, core).",
                    if total > 45 { "25–30" } else { "15–20" }
                ),
                format!(
                    "{} min of light cardio (brisk walk, bike, easy jog).",
                    if total > 60 { "20–25" } else { "10–15" }
                ),
                "5–10 min of stretching and breathing to cool down.".to_string(),
            ],
        ),
        Goal::Study => (
            format!("Study routine proposal ({hours} h · {intensity} intensity)"),
            vec![
                "1 block of 25 min of total focus (no phone) + 5 min break.".to_string(),
                if total > 60 {
                    "2nd block of 25 + 5 min, ideal for another subject or review."
                } else {
                    "Short 10–15 min review of what you covered."
                }
                .to_string(),
                "Last 10–15 min to write a mini summary or a list of questions.".to_string(),
            ],
        ),
        Goal::Productivity => (
            format!("Personal productivity routine proposal ({hours} h)"),
            vec![
                "10 min to list the day's tasks (work, home, errands, study).".to_string(),
                if total > 60 {
                    "2 blocks of 25 min of deep work + 5 min break each."
                } else {
                    "1 block of 25 min of deep work + 5 min break."
                }
                .to_string(),
                "Remaining time for mechanical tasks: email, tidying up, preparing things for tomorrow."
                    .to_string(),
            ],
        ),
        Goal::Mixed => {
            let mut blocks = vec![
                "15–20 min of strength + mobility (push-ups, core, some legs).".to_string(),
                "1 block of 25 min of study + 5 min break.".to_string(),
            ];
            if total > 70 {
                blocks.push(
                    "Second 25 min block of study or review, depending on how you feel."
                        .to_string(),
                );
            }
            blocks.push("Final 5–10 min to stretch, breathe and plan the next day.".to_string());
            (
                format!("Mixed routine proposal (health + study) · {hours} h"),
                blocks,
            )
        }
    };

    PlanTemplate {
        goal,
        heading,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(goal: &str, start: &str, end: &str) -> PlanRequest {
        PlanRequest {
            goal: goal.into(),
            start: start.into(),
            end: end.into(),
            ..Default::default()
        }
    }

    #[test]
    fn short_window_is_quick() {
        let plan = suggest_plan(&request("health", "09:00", "09:30")).unwrap();
        assert_eq!(plan.total_minutes, 30);
        assert_eq!(plan.intensity, Intensity::Quick);
        assert_eq!(plan.hours, "0.5");
    }

    #[test]
    fn long_window_is_long() {
        let plan = suggest_plan(&request("health", "09:00", "10:45")).unwrap();
        assert_eq!(plan.total_minutes, 105);
        assert_eq!(plan.intensity, Intensity::Long);
        assert_eq!(plan.hours, "1.8");
    }

    #[test]
    fn hours_round_like_a_double_with_one_decimal() {
        assert_eq!(format_hours(9), "0.1");
        assert_eq!(format_hours(21), "0.3");
        assert_eq!(format_hours(15), "0.3");
        assert_eq!(format_hours(30), "0.5");
        assert_eq!(format_hours(45), "0.8");
        assert_eq!(format_hours(60), "1.0");
        assert_eq!(format_hours(100), "1.7");
        assert_eq!(format_hours(105), "1.8");
    }

    #[test]
    fn intensity_bands_are_exclusive() {
        assert_eq!(Intensity::for_minutes(39), Intensity::Quick);
        assert_eq!(Intensity::for_minutes(40), Intensity::Moderate);
        assert_eq!(Intensity::for_minutes(90), Intensity::Moderate);
        assert_eq!(Intensity::for_minutes(91), Intensity::Long);
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert_eq!(
            suggest_plan(&request("study", "10:00", "09:00")),
            Err(PlanRejection::EndNotAfterStart)
        );
        assert_eq!(
            suggest_plan(&request("study", "10:00", "10:00")),
            Err(PlanRejection::EndNotAfterStart)
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = suggest_plan(&request("", "09:00", "10:00")).unwrap_err();
        assert_eq!(err, PlanRejection::MissingFields);
        assert_eq!(err.message(), "Fill in the goal, start time and end time.");

        assert_eq!(
            suggest_plan(&request("health", "09:00", " ")),
            Err(PlanRejection::MissingFields)
        );
    }

    #[test]
    fn malformed_time_is_rejected() {
        assert_eq!(
            suggest_plan(&request("health", "nine", "10:00")),
            Err(PlanRejection::InvalidTime)
        );
        assert_eq!(
            suggest_plan(&request("health", "09:00", "25:00")),
            Err(PlanRejection::InvalidTime)
        );
    }

    #[test]
    fn unknown_goal_has_no_blocks() {
        let plan = suggest_plan(&request("gardening", "09:00", "10:00")).unwrap();
        assert_eq!(plan.template, None);
        assert!(plan.blocks().is_empty());
        assert_eq!(plan.intensity, Intensity::Moderate);
    }

    #[test]
    fn health_blocks_scale_with_time() {
        let short = suggest_plan(&request("health", "09:00", "09:45")).unwrap();
        assert!(short.blocks()[1].starts_with("15–20"));
        assert!(short.blocks()[2].starts_with("10–15"));

        let long = suggest_plan(&request("health", "09:00", "10:05")).unwrap();
        assert!(long.blocks()[1].starts_with("25–30"));
        assert!(long.blocks()[2].starts_with("20–25"));
        assert_eq!(
            long.template.unwrap().heading,
            "Health routine proposal (1.1 h · moderate intensity)"
        );
    }

    #[test]
    fn mixed_adds_second_study_block_past_seventy_minutes() {
        let seventy = suggest_plan(&request("mixed", "18:00", "19:10")).unwrap();
        assert_eq!(seventy.blocks().len(), 3);

        let more = suggest_plan(&request("mixed", "18:00", "19:11")).unwrap();
        assert_eq!(more.blocks().len(), 4);
        assert!(more.blocks()[2].starts_with("Second 25 min block"));
    }

    #[test]
    fn study_and_productivity_switch_at_an_hour() {
        let study = suggest_plan(&request("study", "08:00", "09:00")).unwrap();
        assert!(study.blocks()[1].starts_with("Short"));
        let study = suggest_plan(&request("study", "08:00", "09:01")).unwrap();
        assert!(study.blocks()[1].starts_with("2nd block"));

        let work = suggest_plan(&request("productivity", "08:00", "09:30")).unwrap();
        assert!(work.blocks()[1].starts_with("2 blocks"));
        assert_eq!(
            work.template.unwrap().heading,
            "Personal productivity routine proposal (1.5 h)"
        );
    }

    #[test]
    fn recurrence_and_context_are_echoed() {
        let plan = suggest_plan(&PlanRequest {
            goal: "study".into(),
            start: "19:00".into(),
            end: "20:00".into(),
            recurrence: "weekdays".into(),
            context: "  exams next week ".into(),
        })
        .unwrap();

        assert_eq!(plan.recurrence, Recurrence::Weekdays);
        assert_eq!(plan.context.as_deref(), Some("exams next week"));
        assert_eq!(plan.summary(), "Available time: 1.0 h Monday to Friday.");

        let plan = suggest_plan(&request("study", "19:00", "20:00")).unwrap();
        assert_eq!(plan.recurrence, Recurrence::Unspecified);
        assert_eq!(plan.context, None);
        assert_eq!(plan.recurrence_phrase, "every day you choose");
    }
}
