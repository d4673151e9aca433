//! Typed models for the site's static content

use serde::{Deserialize, Serialize};

/// Outbound links for an artist; absent platforms are skipped in the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistSocials {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub spotify: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

/// A label artist shown in the showcase carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub bio: String,
    /// Path to the showcase image, relative to the data directory
    pub image: String,
    #[serde(default)]
    pub socials: ArtistSocials,
    /// Embed URLs for the artist's latest releases
    #[serde(default)]
    pub tracks: Vec<String>,
}

/// Price of a package, with a preformatted display string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
    pub display: String,
}

/// A production package shown in the pricelist picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub features: Vec<String>,
    pub price: Price,
    #[serde(default)]
    pub popular: bool,
}

/// Contact details for the contact section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social: ArtistSocials,
}

/// Site-wide metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub established: Option<u16>,
    #[serde(default)]
    pub location: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Crescentials Record".to_string(),
            tagline: "Create Music with Essentials.".to_string(),
            description: String::new(),
            established: None,
            location: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_parses_with_partial_socials() {
        let json = r#"{
            "name": "Lunar Tide",
            "bio": "Dream-pop duo.",
            "image": "images/lunar-tide.png",
            "socials": { "instagram": "https://instagram.com/lunartide" },
            "tracks": ["https://open.spotify.com/embed/track/abc"]
        }"#;

        let artist: Artist = serde_json::from_str(json).unwrap();
        assert_eq!(artist.name, "Lunar Tide");
        assert!(artist.socials.instagram.is_some());
        assert!(artist.socials.spotify.is_none());
        assert_eq!(artist.tracks.len(), 1);
    }

    #[test]
    fn test_artist_defaults_optional_fields() {
        let json = r#"{ "name": "Solo", "bio": "", "image": "x.png" }"#;
        let artist: Artist = serde_json::from_str(json).unwrap();
        assert!(artist.tracks.is_empty());
        assert!(artist.socials.youtube.is_none());
    }

    #[test]
    fn test_pricing_package_parses() {
        let json = r#"{
            "id": "single",
            "name": "Single",
            "description": "One fully produced track",
            "features": ["Mixing", "Mastering"],
            "price": { "amount": 1500000.0, "currency": "IDR", "display": "IDR 1.5M" },
            "popular": true
        }"#;

        let package: PricingPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.features.len(), 2);
        assert_eq!(package.price.display, "IDR 1.5M");
        assert!(package.popular);
    }

    #[test]
    fn test_pricing_package_popular_defaults_false() {
        let json = r#"{
            "id": "ep", "name": "EP", "features": [],
            "price": { "amount": 1.0, "currency": "USD", "display": "$1" }
        }"#;
        let package: PricingPackage = serde_json::from_str(json).unwrap();
        assert!(!package.popular);
        assert!(package.description.is_empty());
    }
}
