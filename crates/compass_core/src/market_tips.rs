use std::fmt;

use crate::lifecycle::{Attempt, RequestLifecycle, RequestState};

/// The closed set of sectors the tips view can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sector {
    #[default]
    General,
    Technology,
    Finance,
    Healthcare,
    Education,
    Marketing,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::General,
        Sector::Technology,
        Sector::Finance,
        Sector::Healthcare,
        Sector::Education,
        Sector::Marketing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sector::General => "General",
            Sector::Technology => "Technology",
            Sector::Finance => "Finance",
            Sector::Healthcare => "Healthcare",
            Sector::Education => "Education",
            Sector::Marketing => "Marketing",
        }
    }

    /// Query-parameter encoding. `General` means "no filter" and is encoded
    /// by omitting the parameter, never by sending the literal name.
    pub fn filter_param(self) -> Option<&'static str> {
        match self {
            Sector::General => None,
            other => Some(other.name()),
        }
    }

    pub fn parse(input: &str) -> Option<Sector> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.name().eq_ignore_ascii_case(input.trim()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized market/career tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTip {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketTipsState {
    sector: Sector,
    request: RequestLifecycle<Vec<MarketTip>>,
}

impl MarketTipsState {
    pub fn sector(&self) -> Sector {
        self.sector
    }

    pub fn request(&self) -> &RequestState<Vec<MarketTip>> {
        self.request.state()
    }

    pub fn tips(&self) -> &[MarketTip] {
        self.request.state().success().map_or(&[], Vec::as_slice)
    }

    /// Records the selection and starts a fetch for it. Selecting under an
    /// in-flight fetch supersedes it; only the newest attempt may commit.
    pub(crate) fn begin_fetch(&mut self, sector: Sector) -> Attempt {
        self.sector = sector;
        self.request.begin()
    }

    pub(crate) fn settle(&mut self, attempt: Attempt, result: Result<Vec<MarketTip>, String>) -> bool {
        self.request.settle(attempt, result)
    }
}
