use common::format::format_percent;
use common::format::format_usd;

/// One shop of the November 2024 leaderboard. Amounts are whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopLeaderboardRow {
    pub shop_name: &'static str,
    pub gmv_tier: &'static str,
    pub total_converted_usd: u64,
    pub sonar_converted_usd: u64,
}

impl ShopLeaderboardRow {
    /// Share of converted revenue attributed to Sonar, as a ratio.
    pub fn percent_increase(&self) -> f64 {
        self.sonar_converted_usd as f64 / self.total_converted_usd as f64
    }

    pub fn percent_increase_display(&self) -> String {
        format_percent(self.percent_increase())
    }

    pub fn total_converted_display(&self) -> String {
        format_usd(self.total_converted_usd as f64)
    }

    pub fn sonar_converted_display(&self) -> String {
        format_usd(self.sonar_converted_usd as f64)
    }
}

const fn shop(
    shop_name: &'static str,
    gmv_tier: &'static str,
    total_converted_usd: u64,
    sonar_converted_usd: u64,
) -> ShopLeaderboardRow {
    ShopLeaderboardRow {
        shop_name,
        gmv_tier,
        total_converted_usd,
        sonar_converted_usd,
    }
}

// ordered by Sonar converted revenue, descending
const TOP_SHOPS: [ShopLeaderboardRow; 10] = [
    shop("Anonymized Shop 1", "30M-40M", 1561120, 367928),
    shop("Anonymized Shop 2", ">125M", 6191415, 356874),
    shop("Anonymized Shop 3", "100M-125M", 3727144, 262831),
    shop("Anonymized Shop 4", "60M-75M", 1366531, 163046),
    shop("Anonymized Shop 5", ">125M", 1212964, 114246),
    shop("Anonymized Shop 6", "75M-100M", 985321, 109374),
    shop("Anonymized Shop 7", "50M-60M", 875124, 87423),
    shop("Anonymized Shop 8", "40M-50M", 765231, 75431),
    shop("Anonymized Shop 9", "30M-40M", 654876, 65324),
    shop("Anonymized Shop 10", ">125M", 543112, 54211),
];

pub fn top_shops() -> &'static [ShopLeaderboardRow] {
    &TOP_SHOPS
}
