use crate::data::ProjectRecord;

/// Newest first: descending numeric year, ties broken by descending
/// `order`. The sort is stable, so equal pairs keep their input order.
pub fn sorted_projects(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut sorted: Vec<&ProjectRecord> = projects.iter().collect();
    sorted.sort_by(|a, b| {
        b.numeric_year()
            .cmp(&a.numeric_year())
            .then(b.order.cmp(&a.order))
    });
    sorted
}

/// Label shown on a grid tile. Writing and speaking entries get fixed
/// labels; everything else shows its organization, or the raw category
/// when the organization is empty.
pub fn tile_label(record: &ProjectRecord) -> &str {
    match record.category.as_str() {
        "Writing" => "Writing",
        "Speaking & Directing" => "Speaking",
        _ if !record.organization.is_empty() => &record.organization,
        _ => &record.category,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterTab {
    All,
    Exhibitions,
    Writing,
    Speaking,
}

impl FilterTab {
    pub const ALL: [FilterTab; 4] = [
        FilterTab::All,
        FilterTab::Exhibitions,
        FilterTab::Writing,
        FilterTab::Speaking,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterTab::All => "all",
            FilterTab::Exhibitions => "exhibitions",
            FilterTab::Writing => "writing",
            FilterTab::Speaking => "speaking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterTab::All => "All",
            FilterTab::Exhibitions => "Exhibitions",
            FilterTab::Writing => "Writing",
            FilterTab::Speaking => "Speaking",
        }
    }

    /// Exhibitions is the complement of the two fixed-label categories.
    pub fn matches(self, category: &str) -> bool {
        match self {
            FilterTab::All => true,
            FilterTab::Writing => category == "Writing",
            FilterTab::Speaking => category == "Speaking & Directing",
            FilterTab::Exhibitions => {
                category != "Writing" && category != "Speaking & Directing"
            }
        }
    }
}
