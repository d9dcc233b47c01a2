/// A visitor that started checkout, and whether their event could be matched
/// to a profile without and with Sonar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorRecord {
    pub name: &'static str,
    pub email: &'static str,
    pub checkout_date: &'static str,
    pub matched_without_sonar: bool,
    pub matched_with_sonar: bool,
}

impl VisitorRecord {
    /// Matched only thanks to Sonar.
    pub fn additional_event_captured(&self) -> bool {
        self.matched_with_sonar && !self.matched_without_sonar
    }
}

const fn visitor(
    name: &'static str,
    email: &'static str,
    checkout_date: &'static str,
    matched_without_sonar: bool,
    matched_with_sonar: bool,
) -> VisitorRecord {
    VisitorRecord {
        name,
        email,
        checkout_date,
        matched_without_sonar,
        matched_with_sonar,
    }
}

// Sonar also misses some visitors (Charlie, Grace).
const VISITORS: [VisitorRecord; 7] = [
    visitor("Alice", "alice@example.com", "2024-12-01", true, true),
    visitor("Bob", "bob@example.com", "2024-12-01", false, true),
    visitor("Charlie", "charlie@example.com", "2024-12-02", false, false),
    visitor("Diana", "diana@example.com", "2024-12-03", true, true),
    visitor("Eve", "eve@example.com", "2024-12-03", false, true),
    visitor("Frank", "frank@example.com", "2024-12-04", false, true),
    visitor("Grace", "grace@example.com", "2024-12-05", false, false),
];

pub fn visitors() -> &'static [VisitorRecord] {
    &VISITORS
}
