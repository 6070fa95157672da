use crate::lifecycle::{Attempt, RequestLifecycle, RequestState};

/// Which recommendation form input an edit intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Preferences,
    Skills,
    DetailedExpectations,
}

/// The submit payload. All three fields are always sent, empty strings
/// included; relevance filtering is the service's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationQuery {
    pub preferences: String,
    pub skills: String,
    pub detailed_expectations: String,
}

/// One normalized job posting. The full description is stored here;
/// truncation for display happens in the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub short_description: String,
    pub relevance_notes: Option<String>,
    pub skills: Vec<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationState {
    form: RecommendationQuery,
    request: RequestLifecycle<Vec<JobListing>>,
    submitted: bool,
}

impl RecommendationState {
    pub fn form(&self) -> &RecommendationQuery {
        &self.form
    }

    pub fn request(&self) -> &RequestState<Vec<JobListing>> {
        self.request.state()
    }

    /// Whether the user has ever submitted the form. Distinguishes "no
    /// results for this query" from "never asked".
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn jobs(&self) -> &[JobListing] {
        self.request.state().success().map_or(&[], Vec::as_slice)
    }

    pub(crate) fn edit_field(&mut self, field: QueryField, value: String) {
        match field {
            QueryField::Preferences => self.form.preferences = value,
            QueryField::Skills => self.form.skills = value,
            QueryField::DetailedExpectations => self.form.detailed_expectations = value,
        }
    }

    /// Starts a submission. Resubmitting while one is in flight supersedes
    /// it: the older attempt's settlement will no longer commit.
    pub(crate) fn begin_submit(&mut self) -> (Attempt, RecommendationQuery) {
        self.submitted = true;
        (self.request.begin(), self.form.clone())
    }

    pub(crate) fn settle(
        &mut self,
        attempt: Attempt,
        result: Result<Vec<JobListing>, String>,
    ) -> bool {
        self.request.settle(attempt, result)
    }
}
