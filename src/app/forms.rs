// ABOUTME: Editable state for the flag form and the movie search screen
// Pure input handling; network calls happen in AppState's async actions

use crate::models::{FeatureFlag, FeatureFlagRequest, Movie, MovieKind, SearchQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Enabled,
}

impl FormField {
    pub const fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Enabled,
            FormField::Enabled => FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlagFormState {
    /// `Some` when editing an existing flag, `None` when creating.
    pub editing_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub focus: FormField,
    pub errors: Vec<String>,
    pub submitting: bool,
}

impl FlagFormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(flag: &FeatureFlag) -> Self {
        Self {
            editing_id: Some(flag.id),
            name: flag.name.clone(),
            description: flag.description.clone().unwrap_or_default(),
            enabled: flag.enabled,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Feature Flag"
        } else {
            "Create Feature Flag"
        }
    }

    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            FormField::Name => self.name.push(ch),
            FormField::Description => self.description.push(ch),
            FormField::Enabled => {
                if ch == ' ' {
                    self.toggle_enabled();
                }
            }
        }
        self.errors.clear();
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Enabled => {}
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn to_request(&self) -> FeatureFlagRequest {
        let description = self.description.trim();
        FeatureFlagRequest::new(
            self.name.trim(),
            self.enabled,
            (!description.is_empty()).then(|| description.to_string()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Title,
    Year,
}

#[derive(Debug, Clone)]
pub struct MovieSearchState {
    pub title: String,
    pub year: String,
    pub kind: Option<MovieKind>,
    pub focus: SearchField,
    pub movies: Vec<Movie>,
    pub total_results: String,
    pub selected_index: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
    /// Title of the last search that was sent.
    pub last_title: Option<String>,
}

impl Default for MovieSearchState {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: String::new(),
            kind: None,
            focus: SearchField::Title,
            movies: Vec::new(),
            total_results: "0".to_string(),
            selected_index: None,
            loading: false,
            error: None,
            last_title: None,
        }
    }
}

impl MovieSearchState {
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            SearchField::Title => self.title.push(ch),
            SearchField::Year => {
                if ch.is_ascii_digit() && self.year.len() < 4 {
                    self.year.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            SearchField::Title => self.title.pop(),
            SearchField::Year => self.year.pop(),
        };
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SearchField::Title => SearchField::Year,
            SearchField::Year => SearchField::Title,
        };
    }

    pub fn cycle_kind(&mut self) {
        self.kind = MovieKind::cycle(self.kind);
    }

    /// The query to send, or `None` when the title is blank.
    pub fn query(&self) -> Option<SearchQuery> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(SearchQuery::new(self.title.trim()).kind(self.kind).year(self.year.as_str()))
    }

    pub fn set_results(&mut self, movies: Vec<Movie>, total_results: &str) {
        self.selected_index = if movies.is_empty() { None } else { Some(0) };
        self.movies = movies;
        self.total_results = total_results.to_string();
    }

    pub fn clear_results(&mut self) {
        self.set_results(Vec::new(), "0");
    }

    pub fn next_movie(&mut self) {
        if !self.movies.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some((current + 1) % self.movies.len());
        }
    }

    pub fn previous_movie(&mut self) {
        if !self.movies.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some(if current == 0 {
                self.movies.len() - 1
            } else {
                current - 1
            });
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn movie(title: &str) -> Movie {
        Movie {
            imdb_id: format!("tt-{title}"),
            title: title.to_string(),
            year: "2001".to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    #[test]
    fn form_routes_input_to_focused_field() {
        let mut form = FlagFormState::create();
        "beta".chars().for_each(|c| form.input_char(c));
        form.next_field();
        "new checkout".chars().for_each(|c| form.input_char(c));
        form.backspace();
        form.next_field();
        form.input_char(' ');

        assert_eq!(form.name, "beta");
        assert_eq!(form.description, "new checkou");
        assert!(form.enabled);
        assert_eq!(form.focus, FormField::Enabled);
    }

    #[test]
    fn form_request_trims_and_drops_blank_description() {
        let mut form = FlagFormState::create();
        form.name = "  dark_mode ".to_string();
        form.description = "   ".to_string();
        assert_eq!(form.to_request(), FeatureFlagRequest::new("dark_mode", false, None));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let flag = FeatureFlag {
            id: 4,
            name: "beta".into(),
            enabled: true,
            description: Some("Beta users".into()),
            created_at: None,
            updated_at: None,
        };
        let form = FlagFormState::edit(&flag);
        assert!(form.is_edit());
        assert_eq!(form.title(), "Edit Feature Flag");
        assert_eq!(form.to_request(), FeatureFlagRequest::from(&flag));
    }

    #[test]
    fn year_accepts_at_most_four_digits() {
        let mut search = MovieSearchState::default();
        search.next_field();
        "19a865".chars().for_each(|c| search.input_char(c));
        assert_eq!(search.year, "1986");
    }

    #[test]
    fn blank_title_has_no_query() {
        let mut search = MovieSearchState::default();
        search.title = "   ".to_string();
        assert!(search.query().is_none());

        search.title = " alien ".to_string();
        search.cycle_kind();
        let query = search.query().unwrap();
        assert_eq!(query.title, "alien");
        assert_eq!(query.kind, Some(MovieKind::Movie));
        assert_eq!(query.year, None);
    }

    #[test]
    fn movie_selection_wraps() {
        let mut search = MovieSearchState::default();
        search.set_results(vec![movie("a"), movie("b")], "2");
        assert_eq!(search.selected_index, Some(0));

        search.previous_movie();
        assert_eq!(search.selected_movie().unwrap().title, "b");
        search.next_movie();
        assert_eq!(search.selected_movie().unwrap().title, "a");

        search.clear_results();
        assert_eq!(search.selected_index, None);
        assert_eq!(search.total_results, "0");
    }
}
