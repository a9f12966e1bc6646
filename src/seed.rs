// Seed dataset - the seven Mumbai neighborhoods the demo ships with
// Built once at startup and handed to the store; never mutated afterwards.

use crate::model::{Demographics, NeighborhoodRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Scores in field order: match, walkability, safety, nightlife, family,
/// cost, transit, green, diversity
type Scores = [u8; 9];

struct Seed<'a> {
    id: &'a str,
    name: &'a str,
    scores: Scores,
    image: &'a str,
    description: &'a str,
    highlights: &'a [&'a str],
    demographics: (u32, &'a str, &'a str),
    amenities: &'a [&'a str],
    pros: &'a [&'a str],
    cons: &'a [&'a str],
}

impl Seed<'_> {
    fn build(&self) -> NeighborhoodRecord {
        let [
            match_score,
            walkability_score,
            safety_score,
            nightlife_score,
            family_score,
            cost_score,
            transit_score,
            green_score,
            diversity_score,
        ] = self.scores;
        let (median_age, median_income, population) = self.demographics;

        NeighborhoodRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            match_score,
            walkability_score,
            safety_score,
            nightlife_score,
            family_score,
            cost_score,
            transit_score,
            green_score,
            diversity_score,
            image: self.image.to_string(),
            description: self.description.to_string(),
            highlights: strings(self.highlights),
            demographics: Demographics {
                median_age,
                median_income: median_income.to_string(),
                population: population.to_string(),
            },
            amenities: strings(self.amenities),
            pros: strings(self.pros),
            cons: strings(self.cons),
        }
    }
}

const SEEDS: [Seed<'static>; 7] = [
    Seed {
        id: "1",
        name: "Bandra West",
        scores: [95, 92, 80, 95, 85, 50, 90, 70, 95],
        image: "/bandra.jpg",
        description: "Trendy suburb known for its seaside promenade, cafes, nightlife, and Bollywood celebrities.",
        highlights: &["Seaside promenade", "Cafes", "Nightlife", "Shopping"],
        demographics: (32, "₹22,00,000", "150,000"),
        amenities: &["Parks", "Restaurants", "Boutiques", "Schools"],
        pros: &["Lively", "Great food", "Celebrity spotting"],
        cons: &["Expensive", "Traffic", "Noisy"],
    },
    Seed {
        id: "2",
        name: "Andheri East",
        scores: [88, 80, 75, 85, 80, 60, 85, 65, 90],
        image: "/adnheri-east.jpg",
        description: "Bustling business and residential hub with malls, offices, and great connectivity.",
        highlights: &["Metro", "Malls", "Offices", "Restaurants"],
        demographics: (31, "₹18,00,000", "200,000"),
        amenities: &["Metro", "Shopping malls", "Offices", "Schools"],
        pros: &["Well-connected", "Business hub", "Good amenities"],
        cons: &["Crowded", "Pollution", "Traffic"],
    },
    Seed {
        id: "3",
        name: "Powai",
        scores: [90, 85, 82, 80, 88, 55, 80, 80, 92],
        image: "/powai.jpg",
        description: "Modern township with lakes, tech parks, and a cosmopolitan vibe.",
        highlights: &["Powai Lake", "Tech parks", "Restaurants", "Schools"],
        demographics: (30, "₹20,00,000", "120,000"),
        amenities: &["Lakeside", "Tech parks", "Restaurants", "Gyms"],
        pros: &["Scenic", "Modern", "Family-friendly"],
        cons: &["Expensive", "Traffic", "Flooding risk"],
    },
    Seed {
        id: "4",
        name: "Colaba",
        scores: [85, 88, 78, 90, 75, 45, 80, 60, 88],
        image: "/Colaba.jpg",
        description: "Historic area with colonial architecture, the Gateway of India, and vibrant street life.",
        highlights: &["Gateway of India", "Cafes", "Shopping", "Museums"],
        demographics: (34, "₹19,00,000", "80,000"),
        amenities: &["Tourist spots", "Restaurants", "Shops", "Hotels"],
        pros: &["Historic", "Touristy", "Walkable"],
        cons: &["Expensive", "Crowded", "Noisy"],
    },
    Seed {
        id: "5",
        name: "Juhu",
        scores: [87, 82, 80, 85, 90, 48, 75, 75, 90],
        image: "/juhu.jpg",
        description: "Famous for its beach, luxury hotels, and celebrity homes.",
        highlights: &["Juhu Beach", "Hotels", "Restaurants", "Schools"],
        demographics: (33, "₹21,00,000", "100,000"),
        amenities: &["Beach", "Hotels", "Restaurants", "Schools"],
        pros: &["Beachside", "Upscale", "Family-friendly"],
        cons: &["Expensive", "Touristy", "Traffic"],
    },
    Seed {
        id: "6",
        name: "Lower Parel",
        scores: [83, 80, 76, 88, 70, 52, 78, 68, 85],
        image: "/lower-parel.jpg",
        description: "Trendy area with high-rises, malls, and a vibrant nightlife scene.",
        highlights: &["High-rises", "Nightlife", "Malls", "Restaurants"],
        demographics: (29, "₹23,00,000", "90,000"),
        amenities: &["Malls", "Restaurants", "Offices", "Gyms"],
        pros: &["Trendy", "Modern", "Great nightlife"],
        cons: &["Expensive", "Crowded", "Noisy"],
    },
    Seed {
        id: "7",
        name: "Malad West",
        scores: [80, 78, 74, 75, 85, 65, 70, 72, 80],
        image: "/malad-west.jpg",
        description: "Popular suburb with malls, residential complexes, and good connectivity.",
        highlights: &["Malls", "Residential", "Schools", "Restaurants"],
        demographics: (35, "₹16,00,000", "250,000"),
        amenities: &["Malls", "Schools", "Restaurants", "Parks"],
        pros: &["Affordable", "Family-friendly", "Good amenities"],
        cons: &["Traffic", "Pollution", "Crowded"],
    },
];

/// The seed records in insertion order
pub fn records() -> Vec<NeighborhoodRecord> {
    SEEDS.iter().map(Seed::build).collect()
}
