use busbook_core::Stage;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/seat-selection")]
    SeatSelection,
    #[at("/payment")]
    Payment,
    #[at("/confirmation")]
    Confirmation,
    #[at("/login")]
    Login,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_stage(stage: Stage) -> Self {
        match stage {
            Stage::Search => Self::Search,
            Stage::SeatSelection => Self::SeatSelection,
            Stage::Payment => Self::Payment,
            Stage::Confirmation => Self::Confirmation,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Search => Some(Stage::Search),
            Self::SeatSelection => Some(Stage::SeatSelection),
            Self::Payment => Some(Stage::Payment),
            Self::Confirmation => Some(Stage::Confirmation),
            Self::Home | Self::Login | Self::NotFound => None,
        }
    }

    /// Resolve a page path, accepting the `.html` page names of static hosts
    /// (`search.html`, `index.html`) alongside the router's own paths.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if let Some(route) = Self::recognize(path)
            && route != Self::NotFound
        {
            return route;
        }
        if let Some(stage) = Stage::from_path(path) {
            return Self::from_stage(stage);
        }
        let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        match last {
            "" | "index" | "index.html" => Self::Home,
            "login" | "login.html" => Self::Login,
            _ => Self::NotFound,
        }
    }
}
