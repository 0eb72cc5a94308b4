//! Askama page templates.

use askama::Template;
use leafscan_core::{ClassLabel, LabelSet, PredictionResult};

use crate::markup::inline_markdown;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub active: &'static str,
}

impl HomePage {
    pub fn new() -> Self {
        Self { active: "home" }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CropGroup {
    pub crop: String,
    pub labels: Vec<ClassLabel>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub active: &'static str,
    pub class_count: usize,
    pub groups: Vec<CropGroup>,
}

impl AboutPage {
    pub fn new(labels: &LabelSet) -> Self {
        let groups = labels
            .by_crop()
            .into_iter()
            .map(|(crop, labels)| CropGroup {
                crop: crop.replace('_', " "),
                labels,
            })
            .collect();
        Self {
            active: "about",
            class_count: labels.len(),
            groups,
        }
    }
}

/// Rendered form of a prediction.
pub struct Outcome {
    pub class_name: &'static str,
    pub heading: String,
    pub advisory_html: String,
    pub score: String,
    pub known: bool,
}

impl From<&PredictionResult> for Outcome {
    fn from(result: &PredictionResult) -> Self {
        let heading = ClassLabel::parse(result.class_name)
            .map(|l| format!("{}: {}", l.display_crop(), l.condition))
            .unwrap_or_else(|_| result.class_name.to_string());
        Self {
            class_name: result.class_name,
            heading,
            advisory_html: inline_markdown(result.advisory),
            score: format!("{:.3}", result.score),
            known: result.known,
        }
    }
}

#[derive(Template)]
#[template(path = "recognize.html")]
pub struct RecognizePage {
    pub active: &'static str,
    pub preview: Option<String>,
    pub file_name: Option<String>,
    pub outcome: Option<Outcome>,
    pub error: Option<String>,
}

impl RecognizePage {
    pub fn empty() -> Self {
        Self {
            active: "recognize",
            preview: None,
            file_name: None,
            outcome: None,
            error: None,
        }
    }
}
