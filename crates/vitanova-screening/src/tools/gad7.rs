use crate::ScreeningTool;

/// GAD-7: Generalized Anxiety Disorder seven-item screen.
/// Each item is rated 0–3; totals run 0–21.
pub struct Gad7;

const QUESTIONS: &[&str] = &[
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

impl ScreeningTool for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn questions(&self) -> &[&str] {
        QUESTIONS
    }
}
