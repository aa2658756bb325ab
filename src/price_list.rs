//! Price list data and the tab/search filter behind the prices page.

use unicode_normalization::UnicodeNormalization;

pub const ALL_TAB: &str = "all";

pub struct PriceRow {
    pub name: &'static str,
    pub value: &'static str,
}

pub struct PriceCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub rows: &'static [PriceRow],
}

const fn row(name: &'static str, value: &'static str) -> PriceRow {
    PriceRow { name, value }
}

pub const CATALOG: &[PriceCategory] = &[
    PriceCategory {
        key: "consultatie",
        title: "Consultație și diagnostic",
        rows: &[
            row("Consultație inițială", "150 lei"),
            row("Radiografie retroalveolară", "50 lei"),
            row("Radiografie panoramică", "120 lei"),
            row("Plan de tratament", "gratuit"),
        ],
    },
    PriceCategory {
        key: "igienizare",
        title: "Igienizare",
        rows: &[
            row("Detartraj cu ultrasunete", "200 lei"),
            row("Periaj profesional", "100 lei"),
            row("Airflow", "150 lei"),
            row("Fluorizare", "80 lei"),
        ],
    },
    PriceCategory {
        key: "estetica",
        title: "Estetică dentară",
        rows: &[
            row("Albire profesională în cabinet", "1200 lei"),
            row("Fațetă ceramică", "1800 lei"),
            row("Fațetă compozit", "700 lei"),
        ],
    },
    PriceCategory {
        key: "tratamente",
        title: "Tratamente",
        rows: &[
            row("Obturație compozit", "300 lei"),
            row("Tratament de canal (per canal)", "350 lei"),
            row("Extracție dentară simplă", "250 lei"),
        ],
    },
    PriceCategory {
        key: "ortodontie",
        title: "Ortodonție",
        rows: &[
            row("Aparat dentar fix metalic (per arcadă)", "3500 lei"),
            row("Gutiere transparente", "de la 9000 lei"),
            row("Control ortodontic", "150 lei"),
        ],
    },
];

/// Tab keys in display order; the first tab shows every category.
pub fn tab_keys() -> Vec<&'static str> {
    std::iter::once(ALL_TAB)
        .chain(CATALOG.iter().map(|c| c.key))
        .collect()
}

/// Lowercase, trimmed, with diacritics stripped (`ș`, `ş` and `s` all
/// compare equal).
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{300}'..='\u{36f}').contains(c))
        .collect();
    folded.trim().to_string()
}

/// Matches against the row name, its value and its category title.
pub fn matches_search(row: &PriceRow, category_title: &str, query: &str) -> bool {
    let query = normalize(query);
    if query.is_empty() {
        return true;
    }
    let text = format!("{} {} {}", row.name, row.value, category_title);
    normalize(&text).contains(&query)
}

/// Row visibility for every category of a catalog.
#[derive(Debug, PartialEq)]
pub struct FilterResult {
    rows: Vec<Vec<bool>>,
    query_active: bool,
}

impl FilterResult {
    pub fn row_visible(&self, category: usize, row: usize) -> bool {
        self.rows
            .get(category)
            .and_then(|rows| rows.get(row))
            .copied()
            .unwrap_or(false)
    }

    /// A category with no visible rows is hidden as a whole.
    pub fn category_hidden(&self, category: usize) -> bool {
        !self
            .rows
            .get(category)
            .map_or(false, |rows| rows.iter().any(|v| *v))
    }

    pub fn visible_categories(&self) -> usize {
        (0..self.rows.len()).filter(|c| !self.category_hidden(*c)).count()
    }

    /// The "no results" note only makes sense for a search.
    pub fn empty_message_hidden(&self) -> bool {
        self.visible_categories() > 0 || !self.query_active
    }
}

pub fn filter(catalog: &[PriceCategory], active_tab: &str, query: &str) -> FilterResult {
    let query = query.trim();
    let rows = catalog
        .iter()
        .map(|category| {
            let category_match = active_tab == ALL_TAB || category.key == active_tab;
            category
                .rows
                .iter()
                .map(|row| category_match && matches_search(row, category.title, query))
                .collect()
        })
        .collect();
    FilterResult {
        rows,
        query_active: !query.is_empty(),
    }
}

/// Tab index named by a location hash such as `#Ortodontie`.
pub fn tab_from_hash(tabs: &[&str], hash: &str) -> Option<usize> {
    let key = hash.trim_start_matches('#').to_lowercase();
    if key.is_empty() {
        return None;
    }
    tabs.iter().position(|t| *t == key)
}

/// Roving focus between tabs: arrows wrap around, Home/End jump to the ends.
pub fn next_tab(current: usize, count: usize, key: &str) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match key {
        "ArrowRight" | "ArrowDown" => Some((current + 1) % count),
        "ArrowLeft" | "ArrowUp" => Some((current + count - 1) % count),
        "Home" => Some(0),
        "End" => Some(count - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[PriceCategory] = &[
        PriceCategory {
            key: "igienizare",
            title: "Igienizare",
            rows: &[row("Detartraj", "200 lei"), row("Periaj profesional", "100 lei")],
        },
        PriceCategory {
            key: "estetica",
            title: "Estetică dentară",
            rows: &[row("Fațetă ceramică", "1800 lei"), row("Albire", "1200 lei")],
        },
    ];

    #[test]
    fn normalize_strips_romanian_diacritics() {
        assert_eq!(normalize("  Fațetă Ceramică "), "fateta ceramica");
        assert_eq!(normalize("Şcoală, ţară, ÎNGRIJIRE"), "scoala, tara, ingrijire");
        assert_eq!(normalize("Ștefan"), normalize("stefan"));
    }

    #[test]
    fn search_ignores_accents_and_case() {
        let row = &SAMPLE[1].rows[0];
        assert!(matches_search(row, SAMPLE[1].title, "FATETA"));
        assert!(matches_search(row, SAMPLE[1].title, "fațetă"));
        assert!(!matches_search(row, SAMPLE[1].title, "detartraj"));
    }

    #[test]
    fn search_covers_value_and_category_title() {
        let row = &SAMPLE[0].rows[1];
        assert!(matches_search(row, SAMPLE[0].title, "100"));
        assert!(matches_search(row, SAMPLE[0].title, "igieniz"));
        assert!(matches_search(row, SAMPLE[0].title, "   "));
    }

    #[test]
    fn all_tab_without_query_shows_everything() {
        let result = filter(SAMPLE, ALL_TAB, "");
        assert!(result.row_visible(0, 0) && result.row_visible(1, 1));
        assert_eq!(result.visible_categories(), 2);
        assert!(result.empty_message_hidden());
    }

    #[test]
    fn category_tab_hides_other_categories() {
        let result = filter(SAMPLE, "estetica", "");
        assert!(result.category_hidden(0));
        assert!(!result.category_hidden(1));
        assert!(result.row_visible(1, 0));
        assert!(!result.row_visible(0, 0));
    }

    #[test]
    fn tab_and_query_combine() {
        let result = filter(SAMPLE, "estetica", "albire");
        assert!(!result.row_visible(1, 0));
        assert!(result.row_visible(1, 1));

        let result = filter(SAMPLE, "igienizare", "albire");
        assert_eq!(result.visible_categories(), 0);
    }

    #[test]
    fn category_with_no_matching_rows_is_hidden() {
        let result = filter(SAMPLE, ALL_TAB, "detartraj");
        assert!(!result.category_hidden(0));
        assert!(result.category_hidden(1));
    }

    #[test]
    fn empty_message_needs_a_query() {
        assert!(!filter(SAMPLE, ALL_TAB, "implant").empty_message_hidden());
        // A tab can leave nothing visible without a search; no message then.
        let empty_tab = filter(&SAMPLE[..1], "estetica", "");
        assert_eq!(empty_tab.visible_categories(), 0);
        assert!(empty_tab.empty_message_hidden());
    }

    #[test]
    fn hash_selects_a_known_tab() {
        let tabs = ["all", "igienizare", "estetica"];
        assert_eq!(tab_from_hash(&tabs, "#estetica"), Some(2));
        assert_eq!(tab_from_hash(&tabs, "#Igienizare"), Some(1));
        assert_eq!(tab_from_hash(&tabs, "#all"), Some(0));
        assert_eq!(tab_from_hash(&tabs, "#implant"), None);
        assert_eq!(tab_from_hash(&tabs, ""), None);
        assert_eq!(tab_from_hash(&tabs, "#"), None);
    }

    #[test]
    fn arrow_keys_wrap_between_tabs() {
        assert_eq!(next_tab(0, 4, "ArrowRight"), Some(1));
        assert_eq!(next_tab(3, 4, "ArrowDown"), Some(0));
        assert_eq!(next_tab(0, 4, "ArrowLeft"), Some(3));
        assert_eq!(next_tab(2, 4, "ArrowUp"), Some(1));
        assert_eq!(next_tab(2, 4, "Home"), Some(0));
        assert_eq!(next_tab(1, 4, "End"), Some(3));
        assert_eq!(next_tab(1, 4, "Enter"), None);
        assert_eq!(next_tab(0, 0, "ArrowRight"), None);
    }

    #[test]
    fn catalog_tabs_start_with_all() {
        let tabs = tab_keys();
        assert_eq!(tabs[0], ALL_TAB);
        assert_eq!(tabs.len(), CATALOG.len() + 1);
    }
}
