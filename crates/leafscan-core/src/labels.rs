//! The fixed PlantVillage label set.
//!
//! Index `i` of the classifier's output vector corresponds to `CLASS_NAMES[i]`.
//! The order is fixed by the trained artifact and must not be changed
//! independently of it.

use serde::Serialize;
use thiserror::Error;

/// Number of classes the artifact was trained on.
pub const CLASS_COUNT: usize = 38;

/// Separator between the crop and the condition in a class name.
const CROP_SEPARATOR: &str = "___";

const CLASS_NAMES: [&str; CLASS_COUNT] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("class name {0:?} has no crop separator")]
    MissingSeparator(String),
}

/// Ordered, immutable sequence of class names.
#[derive(Debug, Clone, Copy)]
pub struct LabelSet {
    names: &'static [&'static str],
}

impl LabelSet {
    /// The 38-class PlantVillage label set the bundled artifact was trained on.
    pub const fn plant_village() -> Self {
        Self {
            names: &CLASS_NAMES,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Class name at `index`, or `None` when out of range (negative included).
    pub fn get(&self, index: i64) -> Option<&'static str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .copied()
    }

    /// Index of a class name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Parsed view of the class at `index`.
    pub fn label(&self, index: usize) -> Option<ClassLabel> {
        self.names
            .get(index)
            .and_then(|name| ClassLabel::parse(name).ok())
    }

    /// Parsed labels grouped by crop, in label-set order.
    pub fn by_crop(&self) -> Vec<(String, Vec<ClassLabel>)> {
        let mut groups: Vec<(String, Vec<ClassLabel>)> = Vec::new();
        for label in self.names.iter().filter_map(|n| ClassLabel::parse(n).ok()) {
            match groups.last_mut() {
                Some((crop, items)) if *crop == label.crop => items.push(label),
                _ => groups.push((label.crop.clone(), vec![label])),
            }
        }
        groups
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::plant_village()
    }
}

/// Human-readable view of a class name such as `Tomato___Leaf_Mold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLabel {
    pub name: &'static str,
    /// Text before the separator, kept as-is (`Corn_(maize)`).
    pub crop: String,
    /// Text after the separator with underscores replaced (`Leaf Mold`).
    pub condition: String,
    pub healthy: bool,
}

impl ClassLabel {
    pub fn parse(name: &'static str) -> Result<Self, LabelError> {
        let (crop, condition) = name
            .split_once(CROP_SEPARATOR)
            .ok_or_else(|| LabelError::MissingSeparator(name.to_string()))?;

        let condition = condition.replace('_', " ").trim().to_string();
        let healthy = condition.eq_ignore_ascii_case("healthy");

        Ok(Self {
            name,
            crop: crop.to_string(),
            condition,
            healthy,
        })
    }

    /// Crop name with underscores replaced (`Pepper, bell`).
    pub fn display_crop(&self) -> String {
        self.crop.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_village_has_38_classes() {
        let labels = LabelSet::plant_village();
        assert_eq!(labels.len(), CLASS_COUNT);
        assert_eq!(labels.get(0), Some("Apple___Apple_scab"));
        assert_eq!(labels.get(3), Some("Apple___healthy"));
        assert_eq!(labels.get(37), Some("Tomato___healthy"));
    }

    #[test]
    fn get_out_of_range() {
        let labels = LabelSet::plant_village();
        assert_eq!(labels.get(-1), None);
        assert_eq!(labels.get(38), None);
        assert_eq!(labels.get(i64::MAX), None);
        assert_eq!(labels.get(i64::MIN), None);
    }

    #[test]
    fn names_are_unique() {
        let labels = LabelSet::plant_village();
        for (i, name) in labels.iter().enumerate() {
            assert_eq!(labels.position(name), Some(i), "duplicate name {name}");
        }
    }

    #[test]
    fn parse_strips_trailing_underscore() {
        let label = ClassLabel::parse("Corn_(maize)___Common_rust_").unwrap();
        assert_eq!(label.crop, "Corn_(maize)");
        assert_eq!(label.condition, "Common rust");
        assert!(!label.healthy);
    }

    #[test]
    fn parse_healthy() {
        let label = ClassLabel::parse("Pepper,_bell___healthy").unwrap();
        assert_eq!(label.display_crop(), "Pepper, bell");
        assert!(label.healthy);
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            ClassLabel::parse("Tomato_healthy"),
            Err(LabelError::MissingSeparator("Tomato_healthy".into()))
        );
    }

    #[test]
    fn every_class_parses() {
        let labels = LabelSet::plant_village();
        for i in 0..labels.len() {
            assert!(labels.label(i).is_some(), "class {i} failed to parse");
        }
    }

    #[test]
    fn by_crop_groups_contiguously() {
        let groups = LabelSet::plant_village().by_crop();
        assert_eq!(groups.len(), 14);
        assert_eq!(groups[0].0, "Apple");
        assert_eq!(groups[0].1.len(), 4);
        let tomato = groups.last().unwrap();
        assert_eq!(tomato.0, "Tomato");
        assert_eq!(tomato.1.len(), 10);
        let total: usize = groups.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, CLASS_COUNT);
    }
}
