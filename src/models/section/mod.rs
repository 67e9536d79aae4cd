use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named, addressable region of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Timeline,
    ProblemStatements,
    PrizePool,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Timeline,
        SectionId::ProblemStatements,
        SectionId::PrizePool,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// In-page anchor, e.g. `prize-pool`.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Timeline => "timeline",
            SectionId::ProblemStatements => "problem-statements",
            SectionId::PrizePool => "prize-pool",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Timeline => "Timeline",
            SectionId::ProblemStatements => "Problem Statements",
            SectionId::PrizePool => "Prize Pool",
            SectionId::Faq => "FAQ",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section anchor '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().trim_start_matches('#').to_ascii_lowercase();
        SectionId::ALL
            .iter()
            .copied()
            .find(|section| section.anchor() == normalized)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionListError {
    #[error("section list must not be empty")]
    Empty,
    #[error("section '{0}' appears more than once")]
    Duplicate(SectionId),
}

/// Ordered, fixed sequence of sections. Order defines next/previous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<SectionId>,
}

impl Default for SectionList {
    fn default() -> Self {
        Self {
            sections: SectionId::ALL.to_vec(),
        }
    }
}

impl SectionList {
    pub fn new(sections: Vec<SectionId>) -> Result<Self, SectionListError> {
        if sections.is_empty() {
            return Err(SectionListError::Empty);
        }
        for (index, section) in sections.iter().enumerate() {
            if sections[..index].contains(section) {
                return Err(SectionListError::Duplicate(*section));
            }
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> SectionId {
        // Non-empty by construction
        self.sections[0]
    }

    pub fn last(&self) -> SectionId {
        self.sections[self.sections.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.sections.contains(&id)
    }

    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|section| *section == id)
    }

    pub fn next(&self, id: SectionId) -> Option<SectionId> {
        let index = self.position(id)?;
        self.sections.get(index + 1).copied()
    }

    pub fn previous(&self, id: SectionId) -> Option<SectionId> {
        let index = self.position(id)?;
        index.checked_sub(1).map(|prev| self.sections[prev])
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_through_from_str() {
        for section in SectionId::ALL {
            assert_eq!(section.anchor().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn from_str_accepts_hash_prefix_and_case() {
        assert_eq!("#FAQ".parse::<SectionId>(), Ok(SectionId::Faq));
        assert_eq!(" prize-pool ".parse::<SectionId>(), Ok(SectionId::PrizePool));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "sponsors".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("sponsors".into()));
    }

    #[test]
    fn default_list_is_page_order() {
        let list = SectionList::default();
        assert_eq!(list.first(), SectionId::Home);
        assert_eq!(list.last(), SectionId::Contact);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn next_and_previous_respect_bounds() {
        let list = SectionList::new(vec![
            SectionId::Home,
            SectionId::About,
            SectionId::Faq,
        ])
        .unwrap();

        assert_eq!(list.next(SectionId::Home), Some(SectionId::About));
        assert_eq!(list.next(SectionId::Faq), None);
        assert_eq!(list.previous(SectionId::Home), None);
        assert_eq!(list.previous(SectionId::Faq), Some(SectionId::About));
        assert_eq!(list.next(SectionId::Contact), None);
    }

    #[test]
    fn rejects_empty_and_duplicate_lists() {
        assert_eq!(SectionList::new(vec![]), Err(SectionListError::Empty));
        assert_eq!(
            SectionList::new(vec![SectionId::Home, SectionId::About, SectionId::Home]),
            Err(SectionListError::Duplicate(SectionId::Home))
        );
    }
}
