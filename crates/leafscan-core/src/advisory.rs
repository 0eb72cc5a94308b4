//! Static advisory text per class.
//!
//! Text uses inline Markdown emphasis (`*Genus species*`, `**Prevention:**`).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::labels::LabelSet;

/// Shown when a class has no advisory entry.
pub const FALLBACK_ADVISORY: &str =
    "Additional information for this class is not available at the moment.";

const ENTRIES: &[(&str, &str)] = &[
    (
        "Apple___Apple_scab",
        "Apple scab, caused by the fungus *Venturia inaequalis*, creates dark, velvety spots on leaves and fruit. This can lead to curled, prematurely falling leaves, reducing fruit yield and quality. **Prevention:** Rake and destroy fallen leaves in autumn to reduce fungal spores. Prune trees to improve air circulation, and apply preventative fungicides starting in early spring. Planting resistant apple varieties is a highly effective long-term strategy.",
    ),
    (
        "Apple___Black_rot",
        "Black rot, from the fungus *Botryosphaeria obtusa*, shows as concentric dark brown to black lesions on leaves and fruit, and can cause cankers and fruit rot. **Prevention:** Prune out and destroy cankered limbs and infected fruit. Maintain good air circulation through proper pruning. Fungicide sprays during the growing season can provide additional protection, especially during warm, humid weather.",
    ),
    (
        "Apple___Cedar_apple_rust",
        "Cedar apple rust, caused by the fungus *Gymnosporangium juniperi-virginianae*, creates bright orange-yellow spots on apple leaves. **Prevention:** The most effective method is to remove nearby cedar or juniper trees, which are alternate hosts for the fungus. If this is not possible, apply fungicides to apple trees from the pink-bud stage until after petal fall. Resistant apple varieties are also available.",
    ),
    (
        "Apple___healthy",
        "A healthy apple leaf is vibrant green and free of blemishes. **Best Practices:** Ensure consistent watering, especially during dry periods. Apply a balanced fertilizer in the spring. Prune annually to remove dead wood and improve air circulation. Regularly inspect leaves for early signs of pests or diseases to address issues promptly.",
    ),
    (
        "Blueberry___healthy",
        "Healthy blueberry leaves are dark green and firm. **Best Practices:** Blueberries thrive in acidic soil (pH 4.5-5.5). Use mulch to retain soil moisture and suppress weeds. Water regularly, providing about 1-2 inches of water per week. Prune in late winter to remove old or weak canes and encourage new growth.",
    ),
    (
        "Cherry_(including_sour)___Powdery_mildew",
        "Powdery mildew, from the fungus *Podosphaera clandestina*, creates a white, powdery coating on leaves and fruit. **Prevention:** Ensure good air circulation by pruning trees. Avoid over-fertilizing, which encourages susceptible new growth. Apply fungicides (such as sulfur, neem oil, or potassium bicarbonate) at the first sign of disease and repeat as needed.",
    ),
    (
        "Cherry_(including_sour)___healthy",
        "Healthy cherry leaves are glossy green and free of blemishes. **Best Practices:** Provide well-drained soil and consistent moisture. Fertilize in early spring before new growth begins. Prune annually to maintain an open structure for good air circulation and sunlight penetration, which helps prevent fungal diseases.",
    ),
    (
        "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
        "Gray leaf spot, caused by *Cercospora zeae-maydis*, creates rectangular gray or tan lesions on leaves. **Prevention:** Practice crop rotation with non-host crops. Tillage can help bury infected residue. Choose resistant corn hybrids. Fungicides may be necessary in high-risk situations, especially during warm, humid weather.",
    ),
    (
        "Corn_(maize)___Common_rust_",
        "Common rust, from the fungus *Puccinia sorghi*, forms reddish-brown pustules on leaves. **Prevention:** The most effective management strategy is planting resistant corn hybrids. While fungicides are available, they are often not economically justified unless the infection is severe and occurs early in the season on a susceptible hybrid.",
    ),
    (
        "Corn_(maize)___Northern_Leaf_Blight",
        "Northern leaf blight, from *Exserohilum turcicum*, creates long, gray-green lesions on leaves. **Prevention:** Plant resistant hybrids. Practice crop rotation and tillage to reduce fungal residue. Fungicides can be effective but should be applied based on scouting and disease pressure to ensure cost-effectiveness.",
    ),
    (
        "Corn_(maize)___healthy",
        "Healthy corn leaves are vibrant green and without blemishes. **Best Practices:** Ensure adequate nitrogen fertilization, as corn is a heavy feeder. Maintain consistent soil moisture, especially during the critical tasseling and silking stages. Monitor for pests like corn borers and earworms and treat as necessary.",
    ),
    (
        "Grape___Black_rot",
        "Black rot, from the fungus *Guignardia bidwellii*, causes black lesions on leaves, shoots, and fruit. **Prevention:** Practice good sanitation by removing and destroying infected plant material, including mummified berries. Prune vines to improve air circulation. Apply fungicides from early spring through mid-summer, especially during wet periods.",
    ),
    (
        "Grape___Esca_(Black_Measles)",
        "Esca (Black Measles) is a complex fungal disease causing dark spots on leaves and berries. **Prevention:** There is no cure for Esca. Management focuses on preventing infection. Avoid large pruning wounds, and if necessary, treat them with a wound sealant. Remove and destroy severely infected vines to reduce the spread of inoculum.",
    ),
    (
        "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
        "Leaf blight, from *Pseudocercospora vitis*, causes angular brown spots on leaves. **Prevention:** Rake and destroy fallen leaves to reduce fungal spores. Improve air circulation through proper pruning and vine training. Fungicide applications used for other grape diseases, like black rot, will also typically control leaf blight.",
    ),
    (
        "Grape___healthy",
        "Healthy grape leaves are bright green and blemish-free. **Best Practices:** Grapes require full sun and well-drained soil. Prune annually during dormancy to select fruiting canes and remove old wood. Use a trellis system to support the vines and improve air circulation. Monitor for pests like Japanese beetles and grape berry moths.",
    ),
    (
        "Orange___Haunglongbing_(Citrus_greening)",
        "Huanglongbing (HLB), or citrus greening, is a devastating bacterial disease spread by the Asian citrus psyllid. **Prevention:** There is no cure. Management relies on controlling the psyllid insect vector through insecticides. Remove and destroy infected trees immediately to prevent further spread. Plant only certified disease-free trees.",
    ),
    (
        "Peach___Bacterial_spot",
        "Bacterial spot, from *Xanthomonas arboricola pv. pruni*, causes dark lesions on leaves and fruit. **Prevention:** Plant resistant peach varieties if available. Apply copper-based bactericides in the fall after leaf drop and in the spring before bud swell. Prune to improve air circulation. Avoid high-nitrogen fertilizers, which can increase susceptibility.",
    ),
    (
        "Peach___healthy",
        "Healthy peach leaves are deep green and blemish-free. **Best Practices:** Peaches require full sun and well-drained soil. Prune in late winter to an open center or \"vase\" shape to promote air circulation and sunlight penetration. Thin fruit to prevent branches from breaking and to increase the size of remaining peaches.",
    ),
    (
        "Pepper,_bell___Bacterial_spot",
        "Bacterial spot, from *Xanthomonas campestris pv. vesicatoria*, causes water-soaked spots on leaves and fruit. **Prevention:** Plant resistant bell pepper varieties. Avoid overhead watering to keep foliage dry. Use copper-based bactericides as a preventative measure, especially during warm, wet weather. Rotate crops and remove infected plant debris.",
    ),
    (
        "Pepper,_bell___healthy",
        "Healthy bell pepper leaves are glossy green and blemish-free. **Best Practices:** Plant in a sunny location with well-drained soil. Use mulch to conserve moisture and prevent weeds. Fertilize with a balanced fertilizer, but avoid excessive nitrogen. Support plants with stakes or cages to prevent branches from breaking.",
    ),
    (
        "Potato___Early_blight",
        "Early blight, from *Alternaria solani*, creates concentric brown spots on leaves. **Prevention:** Plant certified disease-free seed potatoes. Practice crop rotation. Destroy volunteer potato plants and weeds. Apply fungicides when conditions are favorable for disease development (warm and humid).",
    ),
    (
        "Potato___Late_blight",
        "Late blight, from *Phytophthora infestans*, causes water-soaked lesions on leaves and can lead to rapid plant collapse. **Prevention:** Plant resistant varieties. Eliminate cull piles and volunteer potato plants. Time irrigation to allow foliage to dry before evening. Apply fungicides preventatively, especially during cool, wet weather.",
    ),
    (
        "Potato___healthy",
        "Healthy potato leaves are dark green and free of blemishes. **Best Practices:** Plant in well-drained, loose soil. \"Hilling\" soil around the base of the plants protects tubers from sunlight and pests. Maintain consistent moisture, especially when tubers are forming. Monitor for pests like the Colorado potato beetle.",
    ),
    (
        "Raspberry___healthy",
        "Healthy raspberry leaves are vibrant green and blemish-free. **Best Practices:** Plant in a sunny spot with well-drained soil. Prune canes after they have finished fruiting to encourage new growth and remove potential disease sources. Use a trellis to support the canes and improve air circulation.",
    ),
    (
        "Soybean___healthy",
        "Healthy soybean leaves are uniformly dark green and show no signs of spots, lesions, or discoloration. To maintain this, ensure proper irrigation to avoid water stress, use balanced fertilizers to provide essential nutrients, and regularly monitor for pests and diseases. **Prevention:** Practice crop rotation to disrupt disease cycles, and select disease-resistant soybean varieties whenever possible. Good field hygiene, such as removing crop debris, can also prevent the spread of pathogens.",
    ),
    (
        "Squash___Powdery_mildew",
        "Powdery mildew, from fungi like *Erysiphe cichoracearum*, creates a white, powdery coating on leaves. **Prevention:** Plant resistant varieties. Ensure proper spacing between plants to promote air circulation. Water the soil, not the leaves, to reduce humidity. Apply fungicides like neem oil or sulfur at the first sign of infection.",
    ),
    (
        "Strawberry___Leaf_scorch",
        "Leaf scorch, from the fungus *Diplocarpon earlianum*, creates dark purple spots on leaves. **Prevention:** Renovate strawberry beds after harvest by mowing off old leaves and removing them. Mulch with straw to reduce fungal splash. Plant resistant varieties. Fungicides can be used in severe cases.",
    ),
    (
        "Strawberry___healthy",
        "Healthy strawberry leaves are bright green and free from spots, lesions, or discoloration. Regular watering, balanced fertilization, and pest monitoring are crucial for plant health. Healthy leaves support vigorous growth and high-quality fruit production.",
    ),
    (
        "Tomato___Bacterial_spot",
        "Bacterial spot, caused by *Xanthomonas campestris pv. vesicatoria*, results in small, water-soaked spots on leaves, stems, and fruit. The spots can enlarge, become necrotic, and merge, leading to significant damage and reduced yield. Warm, wet conditions favor its spread, and management includes copper-based sprays and resistant varieties.",
    ),
    (
        "Tomato___Early_blight",
        "Early blight, caused by *Alternaria solani*, presents as concentric rings on older leaves, leading to defoliation and reduced fruit quality. It thrives in warm, humid conditions. Management includes crop rotation, resistant varieties, and timely fungicide applications.",
    ),
    (
        "Tomato___Late_blight",
        "Late blight, caused by *Phytophthora infestans*, causes water-soaked lesions on leaves and stems, quickly leading to plant collapse and significant fruit rot. Cool, wet conditions favor its spread. Management strategies include using resistant varieties, ensuring proper field sanitation, and applying fungicides.",
    ),
    (
        "Tomato___Leaf_Mold",
        "Leaf mold, caused by *Passalora fulva*, appears as yellow spots on the upper leaf surface and olive-green to gray mold on the underside. High humidity and poor ventilation favor its development. Managing the disease involves ensuring good air circulation, reducing humidity, and applying fungicides if necessary.",
    ),
    (
        "Tomato___Septoria_leaf_spot",
        "Septoria leaf spot, caused by *Septoria lycopersici*, results in small, water-soaked spots that develop into circular lesions with dark borders and light centers. It can cause significant defoliation and reduced yields. Management includes crop rotation, removing infected plant debris, and applying fungicides.",
    ),
    (
        "Tomato___Spider_mites Two-spotted_spider_mite",
        "Two-spotted spider mites (*Tetranychus urticae*) cause stippling and yellowing of leaves, leading to leaf drop and reduced plant vigor. They thrive in hot, dry conditions. Management includes using miticides, introducing natural predators, and maintaining adequate moisture levels.",
    ),
    (
        "Tomato___Target_Spot",
        "Target spot, caused by *Corynespora cassiicola*, presents as dark, concentric lesions on leaves, stems, and fruit, leading to defoliation and fruit rot. Warm, humid conditions favor its spread. Effective management includes crop rotation, resistant varieties, and fungicide applications.",
    ),
    (
        "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
        "Tomato yellow leaf curl virus (TYLCV) is transmitted by whiteflies, causing yellowing and curling of leaves, stunted growth, and reduced fruit production. Management focuses on controlling whitefly populations and using resistant tomato varieties.",
    ),
    (
        "Tomato___Tomato_mosaic_virus",
        "Tomato mosaic virus (ToMV) causes mottled, discolored leaves, stunted growth, and reduced yields. It spreads through contaminated tools, hands, and plant debris. Preventative measures include using resistant varieties, sanitizing equipment, and removing infected plants.",
    ),
    (
        "Tomato___healthy",
        "Healthy tomato leaves are vibrant green and free from spots, lesions, or discoloration. Proper watering, balanced fertilization, and pest monitoring are essential for plant health. Healthy leaves support robust growth and high-quality fruit production.",
    ),
];

static TABLE: LazyLock<AdvisoryTable> = LazyLock::new(|| AdvisoryTable::from_entries(ENTRIES));

/// Immutable map from class name to advisory text.
#[derive(Debug)]
pub struct AdvisoryTable {
    entries: HashMap<&'static str, &'static str>,
}

impl AdvisoryTable {
    /// The process-wide table, built on first access.
    pub fn global() -> &'static AdvisoryTable {
        &TABLE
    }

    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&'static str> {
        self.entries.get(class_name).copied()
    }

    /// Advisory text for `class_name`, or [`FALLBACK_ADVISORY`].
    pub fn get_or_fallback(&self, class_name: &str) -> &'static str {
        self.get(class_name).unwrap_or(FALLBACK_ADVISORY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in `labels` without an advisory entry.
    pub fn missing(&self, labels: &LabelSet) -> Vec<&'static str> {
        labels
            .iter()
            .filter(|name| !self.entries.contains_key(name))
            .collect()
    }
}
