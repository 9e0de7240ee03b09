/// Numeric columns recognized in a food catalog.
///
/// Declaration order is the column order used when writing a catalog back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    CaloricValue,
    Fat,
    SaturatedFats,
    MonounsaturatedFats,
    PolyunsaturatedFats,
    Carbohydrates,
    Sugars,
    Protein,
    DietaryFiber,
    Cholesterol,
    Sodium,
    Water,
    VitaminA,
    VitaminB1,
    VitaminB11,
    VitaminB12,
    VitaminB2,
    VitaminB3,
    VitaminB5,
    VitaminB6,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Calcium,
    Copper,
    Iron,
    Magnesium,
    Manganese,
    Phosphorus,
    Potassium,
    Selenium,
    Zinc,
    NutritionDensity,
}

impl Nutrient {
    pub const COUNT: usize = 34;

    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::CaloricValue,
        Nutrient::Fat,
        Nutrient::SaturatedFats,
        Nutrient::MonounsaturatedFats,
        Nutrient::PolyunsaturatedFats,
        Nutrient::Carbohydrates,
        Nutrient::Sugars,
        Nutrient::Protein,
        Nutrient::DietaryFiber,
        Nutrient::Cholesterol,
        Nutrient::Sodium,
        Nutrient::Water,
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB11,
        Nutrient::VitaminB12,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB5,
        Nutrient::VitaminB6,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Calcium,
        Nutrient::Copper,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Manganese,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Selenium,
        Nutrient::Zinc,
        Nutrient::NutritionDensity,
    ];

    /// The 21 micronutrients averaged into the micronutrient density score.
    pub const MICRONUTRIENTS: [Nutrient; 21] = [
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB11,
        Nutrient::VitaminB12,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB5,
        Nutrient::VitaminB6,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Calcium,
        Nutrient::Copper,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Manganese,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Selenium,
        Nutrient::Zinc,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header as it appears in the dataset.
    pub fn header(self) -> &'static str {
        match self {
            Nutrient::CaloricValue => "Caloric Value",
            Nutrient::Fat => "Fat",
            Nutrient::SaturatedFats => "Saturated Fats",
            Nutrient::MonounsaturatedFats => "Monounsaturated Fats",
            Nutrient::PolyunsaturatedFats => "Polyunsaturated Fats",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Sugars => "Sugars",
            Nutrient::Protein => "Protein",
            Nutrient::DietaryFiber => "Dietary Fiber",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Sodium => "Sodium",
            Nutrient::Water => "Water",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminB1 => "Vitamin B1",
            Nutrient::VitaminB11 => "Vitamin B11",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::VitaminB2 => "Vitamin B2",
            Nutrient::VitaminB3 => "Vitamin B3",
            Nutrient::VitaminB5 => "Vitamin B5",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::Calcium => "Calcium",
            Nutrient::Copper => "Copper",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Manganese => "Manganese",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
            Nutrient::Selenium => "Selenium",
            Nutrient::Zinc => "Zinc",
            Nutrient::NutritionDensity => "Nutrition Density",
        }
    }

    /// Look up a nutrient by its exact (trimmed) column header.
    pub fn from_header(header: &str) -> Option<Nutrient> {
        let header = header.trim();
        Nutrient::ALL.into_iter().find(|n| n.header() == header)
    }
}
