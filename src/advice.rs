use crate::item::Season;

const SPRING: &str = "Spring Fashion Tips:\n\n\
• Light layers for changing temperatures\n\
• Pastel colors (pink, mint, lavender)\n\
• Light jackets or cardigans\n\
• Closed-toe shoes or ballet flats\n\
• Floral patterns\n\
• Light scarves for chilly mornings\n\
• Denim jackets for casual looks\n\
• Trench coats for rainy days";

const SUMMER: &str = "Summer Fashion Tips:\n\n\
• Light, breathable fabrics (linen, cotton)\n\
• Bright, vibrant colors\n\
• Wide-brimmed hats and sunglasses\n\
• Open sandals or espadrilles\n\
• Short sleeves and sleeveless tops\n\
• Lightweight dresses and skirts\n\
• Swimwear cover-ups\n\
• Light-colored clothing to reflect sunlight";

const FALL: &str = "Fall Fashion Tips:\n\n\
• Medium-weight layers\n\
• Warm colors (burgundy, mustard, olive)\n\
• Leather jackets or denim jackets\n\
• Ankle boots or loafers\n\
• Scarves and light gloves\n\
• Plaid patterns and knits\n\
• Turtlenecks and sweaters\n\
• Corduroy pants for texture";

const WINTER: &str = "Winter Fashion Tips:\n\n\
• Heavy layers for warmth\n\
• Dark or neutral colors (black, gray, navy)\n\
• Insulated coats and parkas\n\
• Thermal underlayers\n\
• Wool socks and insulated boots\n\
• Chunky knit sweaters and scarves\n\
• Fleece-lined leggings\n\
• Waterproof outerwear for snow";

pub const NO_SEASON_ADVICE: &str = "Select a season to get fashion advice";

/// Static styling tips for `season`.
pub fn seasonal_advice(season: Season) -> &'static str {
    match season {
        Season::Spring => SPRING,
        Season::Summer => SUMMER,
        Season::Fall => FALL,
        Season::Winter => WINTER,
        Season::AllSeasons => NO_SEASON_ADVICE,
    }
}

/// Text shown after the outfit of the day was picked.
pub fn daily_outfit_banner(season: Season) -> String {
    format!(
        "Daily outfit generated for {season}!\n\n{}",
        seasonal_advice(season)
    )
}

/// Text shown after a suggestion batch was generated.
pub fn suggestions_banner(count: usize, season: Season) -> String {
    format!(
        "{count} suggestions generated for {season}!\n\n{}",
        seasonal_advice(season)
    )
}
