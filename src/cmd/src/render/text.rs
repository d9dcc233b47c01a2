//! Static copy of the page.

use uplift_gen::series::SeriesKind;

pub const TITLE: &str = "Triple Whale's Sonar + Klaviyo Demo";

pub const INTRO: &str = "\
Discover how Triple Whale's Sonar enhances Klaviyo's abandoned cart flows by:
  - Capturing more customer events.
  - Matching more visitors to their profiles.
  - Triggering significantly more flows.
  - Increasing revenue by an average of 22% on Sonar-triggered flows.";

pub const CURRENT_PERFORMANCE: &str = "Your Current Performance";

pub const VISITORS: &str = "Visitors Starting Checkout";
pub const VISITORS_NOTE: &str = "The table above highlights how Sonar identifies and matches more \
visitors to their profiles compared to \"Without Sonar.\"";

pub const FLOWS_SUMMARY: &str = "Flows Summary";
pub const REVENUE_SUMMARY: &str = "Revenue Summary";

pub const TOP_SHOPS: &str = "Top 10 Shops Leveraging Sonar";
pub const TOP_SHOPS_NOTE: &str = "Based on 30 days of data from November 2024, here are the top \
10 shops getting the most value from Sonar:";

pub const CASE_STUDIES: &str = "How Sonar Drives Results";

pub struct CaseStudy {
    pub shop: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

pub const CASE_STUDY_LINKS: [CaseStudy; 2] = [
    CaseStudy {
        shop: "Paw.com",
        summary: "Increased matched user profiles by 40%, leading to an uplift in triggered \
flows and a significant increase in revenue.",
        url: "https://www.triplewhale.com/case-studies/paw-com",
    },
    CaseStudy {
        shop: "Ampersand",
        summary: "Leveraged Sonar to improve abandoned cart flows, achieving a 25% increase \
in revenue from email campaigns.",
        url: "https://www.triplewhale.com/case-studies/ampersand",
    },
];

pub fn chart_title(kind: SeriesKind) -> String {
    format!("{kind} Over 3 Months")
}

pub fn chart_description(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Flows => {
            "The chart below shows the difference in flows triggered without and with Sonar \
over the course of 3 months:"
        }
        SeriesKind::Revenue => {
            "The chart below illustrates the uplift in revenue generated with Sonar-triggered \
flows over the course of 3 months:"
        }
    }
}
