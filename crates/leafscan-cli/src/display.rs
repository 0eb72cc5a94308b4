//! Terminal output for predictions and the label set.

use leafscan_core::{ClassLabel, LabelSet, PredictionResult};

pub fn print_prediction(result: &PredictionResult) {
    println!(
        "=== {} (class {}, score {:.3}) ===",
        result.class_name, result.class_index, result.score
    );
    if let Ok(label) = ClassLabel::parse(result.class_name) {
        let status = if label.healthy { "healthy" } else { "diseased" };
        println!("{} · {} [{status}]", label.display_crop(), label.condition);
    }
    println!();
    println!("{}", strip_emphasis(result.advisory));
}

pub fn print_labels(json: bool) -> anyhow::Result<()> {
    let labels = LabelSet::plant_village();
    let parsed: Vec<ClassLabel> = (0..labels.len()).filter_map(|i| labels.label(i)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("{:>3}  {:<52} {:<26} HEALTHY", "IDX", "NAME", "CONDITION");
    for (i, label) in parsed.iter().enumerate() {
        println!(
            "{:>3}  {:<52} {:<26} {}",
            i,
            label.name,
            label.condition,
            if label.healthy { "yes" } else { "" }
        );
    }
    Ok(())
}

/// Drop Markdown emphasis markers for plain-text output.
fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers() {
        assert_eq!(
            strip_emphasis("From *Alternaria solani*. **Prevention:** rotate."),
            "From Alternaria solani. Prevention: rotate."
        );
    }
}
