use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotItem {
    pub index: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub popularity: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotSearchData {
    pub source: String,
    pub update_time: String,
    pub hot_list: Vec<HotItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Calendar {
    pub date: String,
    pub lunar_date: String,
    pub ganzhi: String,
    pub zodiac: String,
    pub day_of_year: String,
    pub solar_term: String,
    pub auspicious: String,
    pub inauspicious: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WebsiteLogo {
    pub logo: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WebsiteTitle {
    pub title: String,
}

/// Footer links double as create/delete payloads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FooterLink {
    pub title: String,
    pub link: String,
}
